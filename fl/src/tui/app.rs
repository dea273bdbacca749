//! TUI application logic
//!
//! Key handling per interaction mode and screen. Never draws.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use firstwords::{
    CreativeTypes, Feeling, Field, FieldKey, Inspirations, IntroForm, MoodPhase, Pick, Screen, Session, Tones,
};
use tracing::{debug, trace};

use super::state::{AppState, HOME_ACTIONS, InteractionMode, TextTarget, wrap};
use crate::config::Config;

/// Main application
#[derive(Debug)]
pub struct App {
    state: AppState,
}

/// Tick or untick the option at `index`; true when that ticked "Other"
fn toggle_at<K: FieldKey>(form: &mut IntroForm, key: K, index: usize) -> bool {
    let Some(pick) = Pick::<K::Value>::options().get(index).copied() else {
        return false;
    };
    let included = !K::get(form.selection()).contains(pick);
    form.toggle_multi(key, pick, included);
    included && pick.is_other()
}

fn toggle_option(form: &mut IntroForm, field: Field, index: usize) -> bool {
    match field {
        Field::CreativeTypes => toggle_at(form, CreativeTypes, index),
        Field::Inspirations => toggle_at(form, Inspirations, index),
        Field::Tones => toggle_at(form, Tones, index),
        Field::Description => false,
    }
}

/// Replace the text behind a typing target
fn write_text(form: &mut IntroForm, target: TextTarget, text: String) {
    match target {
        TextTarget::Description => form.set_description(text),
        TextTarget::Override(Field::CreativeTypes) => form.set_override(CreativeTypes, text),
        TextTarget::Override(Field::Inspirations) => form.set_override(Inspirations, text),
        TextTarget::Override(Field::Tones) => form.set_override(Tones, text),
        TextTarget::Override(Field::Description) => form.set_description(text),
    }
}

fn read_text(form: &IntroForm, target: TextTarget) -> String {
    let field = match target {
        TextTarget::Description => Field::Description,
        TextTarget::Override(field) => field,
    };
    super::state::override_text(form.selection(), field).to_string()
}

impl App {
    /// Create the app from configuration, opening on the configured screen
    pub fn new(config: &Config) -> Self {
        let mut session = Session::new(&config.words);
        session.navigate(config.start_screen);
        Self::with_session(session)
    }

    pub fn with_session(session: Session) -> Self {
        debug!(screen = ?session.screen(), "App::with_session: called");
        Self {
            state: AppState::new(session),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        trace!("App::state: called");
        &self.state
    }

    /// Handle a key event
    ///
    /// Returns true when the app should exit immediately.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        self.state.clear_hint();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("App::handle_key: Ctrl+C force quit");
            return true;
        }

        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Typing(target) => self.handle_typing_key(key, target),
            InteractionMode::Help => self.handle_help_key(key),
        }
        false
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_help_key: called");
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1)) {
            self.state.interaction_mode = InteractionMode::Normal;
        }
    }

    fn handle_typing_key(&mut self, key: KeyEvent, target: TextTarget) {
        debug!(?key, ?target, "App::handle_typing_key: called");
        let form = self.state.session.intro_mut();
        match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                let mut text = read_text(form, target);
                text.push(c);
                write_text(form, target, text);
            }
            KeyCode::Backspace => {
                let mut text = read_text(form, target);
                text.pop();
                write_text(form, target, text);
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_normal_key: called");
        match key.code {
            KeyCode::Char('q') => {
                debug!("App::handle_normal_key: quit requested");
                self.state.should_quit = true;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.state.interaction_mode = InteractionMode::Help;
            }
            KeyCode::Esc => self.go_home(),
            _ => match self.state.screen() {
                Screen::Home => self.handle_home_key(key),
                Screen::Builder => {
                    if self.state.session.intro().is_editing() {
                        self.handle_builder_key(key)
                    } else {
                        self.handle_result_key(key)
                    }
                }
                Screen::Affirmation => match self.state.session.mood().phase() {
                    MoodPhase::Choosing => self.handle_feelings_key(key),
                    MoodPhase::Showing { .. } => self.handle_affirmation_key(key),
                },
            },
        }
    }

    fn go_home(&mut self) {
        debug!("App::go_home: called");
        self.state.session.go_home();
        self.state.reset_cursors();
    }

    fn open(&mut self, screen: Screen) {
        self.state.session.navigate(screen);
        self.state.reset_cursors();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.home_cursor = wrap(self.state.home_cursor, -1, HOME_ACTIONS.len());
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.state.home_cursor = wrap(self.state.home_cursor, 1, HOME_ACTIONS.len());
            }
            KeyCode::Char('1') => self.open(Screen::Builder),
            KeyCode::Char('2') => self.open(Screen::Affirmation),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.home_cursor == 0 {
                    self.open(Screen::Builder);
                } else {
                    self.open(Screen::Affirmation);
                }
            }
            _ => {}
        }
    }

    fn handle_builder_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.move_row(-1),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.move_row(1),
            KeyCode::Left | KeyCode::Char('h') => self.state.move_option(-1),
            KeyCode::Right | KeyCode::Char('l') => self.state.move_option(1),
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('e') => self.start_typing(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.focused_field() {
                Some(Field::Description) => {
                    self.state.interaction_mode = InteractionMode::Typing(TextTarget::Description);
                }
                Some(field) => {
                    let index = self.state.option_cursor;
                    if toggle_option(self.state.session.intro_mut(), field, index) {
                        self.state.interaction_mode = InteractionMode::Typing(TextTarget::Override(field));
                    }
                }
                None => self.submit(),
            },
            _ => {}
        }
    }

    /// Edit the text of the focused row, when it has any
    fn start_typing(&mut self) {
        match self.state.focused_field() {
            Some(Field::Description) => {
                self.state.interaction_mode = InteractionMode::Typing(TextTarget::Description);
            }
            Some(field) if super::state::has_other(self.state.session.intro().selection(), field) => {
                self.state.interaction_mode = InteractionMode::Typing(TextTarget::Override(field));
            }
            Some(_) => self.state.set_hint("Tick Other to describe your own"),
            None => {}
        }
    }

    fn submit(&mut self) {
        if self.state.session.intro_mut().submit() {
            self.state.button_cursor = 0;
        } else if let Some(missing) = self.state.session.intro().missing() {
            self.state.set_hint(missing.to_string());
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.button_cursor = wrap(self.state.button_cursor, 1, 2);
            }
            KeyCode::Char('r') => self.create_another(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.button_cursor == 0 {
                    self.create_another();
                } else {
                    self.go_home();
                }
            }
            _ => {}
        }
    }

    fn create_another(&mut self) {
        debug!("App::create_another: called");
        self.state.session.intro_mut().reset();
        self.state.reset_cursors();
    }

    fn handle_feelings_key(&mut self, key: KeyEvent) {
        let count = Feeling::ALL.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                self.state.feeling_cursor = wrap(self.state.feeling_cursor, -1, count);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.feeling_cursor = wrap(self.state.feeling_cursor, 1, count);
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.state.feeling_cursor = (c as usize) - ('1' as usize);
                self.check_in();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.check_in(),
            _ => {}
        }
    }

    fn check_in(&mut self) {
        let Some(feeling) = Feeling::ALL.get(self.state.feeling_cursor).copied() else {
            return;
        };
        self.state.session.check_in(feeling);
        self.state.button_cursor = 0;
    }

    fn handle_affirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.button_cursor = wrap(self.state.button_cursor, 1, 2);
            }
            KeyCode::Char('a') => self.state.session.check_in_again(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.button_cursor == 0 {
                    self.state.session.check_in_again();
                } else {
                    self.go_home();
                }
            }
            _ => {}
        }
    }
}
