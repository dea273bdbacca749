//! TUI views and rendering
//!
//! All rendering logic is contained here. Views draw from AppState but never
//! modify it.

use firstwords::{Feeling, Field, FormPhase, MoodPhase, Screen};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::trace;

use super::state::{
    AFFIRMATION_BUTTONS, AppState, HOME_ACTIONS, InteractionMode, RESULT_BUTTONS, TextTarget, option_rows,
    override_text,
};

mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const ACCENT: Color = Color::Rgb(255, 215, 0); // Gold
    pub const TICKED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const HINT: Color = Color::Rgb(255, 165, 0); // Orange
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
}

const HOME_GREETING: &str = "Hi there, creative soul.";
const HOME_FOOTER: &str = "Your creativity matters. Your voice has value.";
const SUBMIT_LABEL: &str = "Create My Intro";
const AFFIRMATION_HEADING: &str = "For you, right now";
const AFFIRMATION_CLOSER: &str = "Take a deep breath. You've got this.";

/// Terminal color for a feeling's color tag
fn feeling_color(tag: &str) -> Color {
    match tag {
        "rose" => Color::Rgb(244, 63, 94),
        "blue" => Color::Rgb(59, 130, 246),
        "yellow" => Color::Rgb(234, 179, 8),
        "green" => Color::Rgb(34, 197, 94),
        _ => Color::Gray,
    }
}

/// Glyph for a feeling's icon identifier
fn feeling_glyph(icon: &str) -> &'static str {
    match icon {
        "heart" => "♥",
        "zap" => "ϟ",
        "sun" => "☀",
        "compass" => "✦",
        _ => "•",
    }
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(screen = ?state.screen(), "render: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match state.screen() {
        Screen::Home => render_home(state, frame, chunks[1]),
        Screen::Builder => match state.session.intro().phase() {
            FormPhase::Editing => render_builder(state, frame, chunks[1]),
            FormPhase::ResultShown { bio } => render_result(state, bio, frame, chunks[1]),
        },
        Screen::Affirmation => match state.session.mood().phase() {
            MoodPhase::Choosing => render_feelings(state, frame, chunks[1]),
            MoodPhase::Showing { feeling, message } => render_affirmation(state, feeling, message, frame, chunks[1]),
        },
    }

    render_footer(state, frame, chunks[2]);

    if state.interaction_mode == InteractionMode::Help {
        render_help_overlay(frame, frame.area());
    }
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let tabs: Vec<Span> = Screen::ALL
        .iter()
        .flat_map(|screen| {
            let style = if *screen == state.screen() {
                Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::DIM)
            };
            [Span::styled(screen.title(), style), Span::raw("  ")]
        })
        .collect();

    let header = Paragraph::new(Line::from(tabs)).block(Block::default().borders(Borders::ALL).title(" First Line "));
    frame.render_widget(header, area);
}

/// Style for a highlighted or plain selectable entry
fn entry_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(colors::SELECTED_BG)
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// A row of buttons with one highlighted
fn button_line<'a>(labels: &[&'a str], selected: usize) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("[ {} ]", label), entry_style(i == selected)));
    }
    Line::from(spans)
}

fn render_home(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            HOME_GREETING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Take a moment to connect with yourself and find the inspiration you need."),
        Line::from(""),
    ];
    for (i, action) in HOME_ACTIONS.iter().enumerate() {
        let marker = if i == state.home_cursor { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, action),
            entry_style(i == state.home_cursor),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        HOME_FOOTER,
        Style::default().fg(colors::DIM).add_modifier(Modifier::ITALIC),
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn render_builder(state: &AppState, frame: &mut Frame, area: Rect) {
    let selection = state.session.intro().selection();
    let mut lines = Vec::new();

    for (row, field) in Field::ALL.iter().enumerate() {
        let focused = state.builder_row == row;
        let title_style = if focused {
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(field.prompt(), title_style)));

        if *field == Field::Description {
            let typing = state.interaction_mode == InteractionMode::Typing(TextTarget::Description);
            lines.push(text_entry_line(&selection.description, typing, "e.g. bold, curious, a late bloomer"));
        } else {
            let mut spans = vec![Span::raw("  ")];
            for (i, option) in option_rows(selection, *field).iter().enumerate() {
                let mark = if option.ticked { "[x]" } else { "[ ]" };
                let mut style = if option.ticked {
                    Style::default().fg(colors::TICKED)
                } else {
                    Style::default()
                };
                if focused && i == state.option_cursor {
                    style = style.bg(colors::SELECTED_BG).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("{} {}", mark, option.label), style));
                spans.push(Span::raw("  "));
            }
            lines.push(Line::from(spans));

            if super::state::has_other(selection, *field) {
                let typing = state.interaction_mode == InteractionMode::Typing(TextTarget::Override(*field));
                lines.push(text_entry_line(
                    override_text(selection, *field),
                    typing,
                    "describe your own (e to edit)",
                ));
            }
        }
        lines.push(Line::from(""));
    }

    let submit_focused = state.on_submit_row();
    let submit_style = if !state.session.intro().is_complete() {
        Style::default().fg(colors::DIM)
    } else {
        entry_style(submit_focused)
    };
    let marker = if submit_focused { "> " } else { "  " };
    lines.push(Line::from(Span::styled(format!("{}[ {} ]", marker, SUBMIT_LABEL), submit_style)));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Build your creative intro "));
    frame.render_widget(body, area);
}

/// Indented text field with a cursor while typing, or a placeholder when empty
fn text_entry_line<'a>(text: &'a str, typing: bool, placeholder: &'a str) -> Line<'a> {
    let mut spans = vec![Span::raw("  > ")];
    if text.is_empty() && !typing {
        spans.push(Span::styled(placeholder, Style::default().fg(colors::DIM)));
    } else {
        spans.push(Span::raw(text));
    }
    if typing {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

fn render_result(state: &AppState, bio: &str, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Your creative intro",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(bio),
        Line::from(""),
        button_line(&RESULT_BUTTONS, state.button_cursor),
    ];
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn render_feelings(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "How are you feeling today?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, feeling) in Feeling::ALL.iter().enumerate() {
        let color = feeling_color(feeling.color());
        let highlighted = i == state.feeling_cursor;
        let mut label_style = Style::default().fg(color);
        if highlighted {
            label_style = label_style.bg(colors::SELECTED_BG).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::raw(if highlighted { "> " } else { "  " }),
            Span::styled(format!("{} {}", feeling_glyph(feeling.icon()), feeling.label()), label_style),
            Span::styled(format!("  {}", feeling.caption()), Style::default().fg(colors::DIM)),
        ]));
    }

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Motivation Space "));
    frame.render_widget(body, area);
}

fn render_affirmation(state: &AppState, feeling: Feeling, message: &str, frame: &mut Frame, area: Rect) {
    let color = feeling_color(feeling.color());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  {}", feeling_glyph(feeling.icon()), feeling.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            AFFIRMATION_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", message),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(AFFIRMATION_CLOSER, Style::default().fg(colors::DIM))),
        Line::from(""),
        button_line(&AFFIRMATION_BUTTONS, state.button_cursor),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Motivation Space "));
    frame.render_widget(body, area);
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let content = if let Some(hint) = &state.hint {
        Line::from(Span::styled(format!(" {}", hint), Style::default().fg(colors::HINT)))
    } else {
        let keybinds: Vec<(&str, &str)> = match (state.interaction_mode, state.screen()) {
            (InteractionMode::Typing(_), _) => vec![("[type]", "Edit"), ("[Enter]", "Done")],
            (_, Screen::Home) => vec![("[↑↓]", "Move"), ("[Enter]", "Open")],
            (_, Screen::Builder) if state.session.intro().is_editing() => vec![
                ("[↑↓]", "Field"),
                ("[←→]", "Option"),
                ("[Space]", "Toggle"),
                ("[e]", "Edit text"),
                ("[s]", "Generate"),
            ],
            (_, Screen::Builder) => vec![("[←→]", "Choose"), ("[Enter]", "Confirm"), ("[r]", "Another")],
            (_, Screen::Affirmation) => vec![("[↑↓]", "Move"), ("[1-4]", "Pick"), ("[Enter]", "Select")],
        };

        let mut spans: Vec<Span> = Vec::new();
        for (key, desc) in keybinds {
            spans.push(Span::styled(key, Style::default().fg(colors::KEYBIND)));
            spans.push(Span::raw(format!(" {}  ", desc)));
        }
        spans.push(Span::styled("[Esc]", Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(" Home  "));
        spans.push(Span::styled("[?]", Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(" Help"));
        Line::from(spans)
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                .fg(colors::HEADER),
        )),
        Line::from(""),
        section("Global"),
        key_line("?", "Toggle help"),
        key_line("q", "Quit (outside text entry)"),
        key_line("Ctrl+C", "Quit"),
        key_line("Esc", "Back to Home (finishes text entry first)"),
        Line::from(""),
        section("Intro Builder"),
        key_line("j/k ↑/↓", "Move between fields"),
        key_line("h/l ←/→", "Move between options"),
        key_line("Space", "Tick or untick option"),
        key_line("e", "Edit description or Other text"),
        key_line("s", "Generate intro"),
        key_line("r", "Create another intro"),
        Line::from(""),
        section("Motivation Space"),
        key_line("1-4", "Check in with a feeling"),
        key_line("a", "Check in again"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (? to close) ")
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Helper to create a key binding line
fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<12}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw(desc),
    ])
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::App;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(app.state(), frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_home_shows_both_actions() {
        let app = App::new(&Config::default());
        let text = screen_text(&app);
        assert!(text.contains("Start My Intro"));
        assert!(text.contains("I Need Motivation"));
    }

    #[test]
    fn test_builder_shows_prompts_and_other() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        let text = screen_text(&app);
        assert!(text.contains("What kind of creative are you?"));
        assert!(text.contains("Soft-Spoken"));
        assert!(text.contains("Other"));
    }

    #[test]
    fn test_home_greeting_and_footer() {
        let text = screen_text(&App::new(&Config::default()));
        assert!(text.contains("Hi there, creative soul."));
        assert!(text.contains("Your creativity matters. Your voice has value."));
    }

    #[test]
    fn test_builder_submit_label() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        assert!(screen_text(&app).contains("Create My Intro"));
    }

    #[test]
    fn test_affirmation_heading_and_closer() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyEvent::from(KeyCode::Char('2')));
        app.handle_key(KeyEvent::from(KeyCode::Char('4')));
        let text = screen_text(&app);
        assert!(text.contains("For you, right now"));
        assert!(text.contains("Take a deep breath. You've got this."));
        assert!(text.contains("Hopeful"));
    }

    #[test]
    fn test_feelings_listed() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyEvent::from(KeyCode::Char('2')));
        let text = screen_text(&app);
        for feeling in Feeling::ALL {
            assert!(text.contains(feeling.label()));
        }
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyEvent::from(KeyCode::Char('?')));
        assert!(screen_text(&app).contains("Keyboard Shortcuts"));
    }
}
