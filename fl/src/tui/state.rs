//! TUI application state
//!
//! Pure data for the TUI. No rendering logic here. The intro form and the
//! mood check-in live in the [`Session`]; this adds cursors and input modes.

use firstwords::{
    Choice, CreativeTypes, Field, FieldKey, Inspirations, Pick, Screen, Selection, Session, Tones,
};
use tracing::debug;

/// Rows on the builder screen: the four fields, then submit
pub const BUILDER_ROWS: usize = Field::ALL.len() + 1;

/// Entries on the home screen
pub const HOME_ACTIONS: [&str; 2] = ["Start My Intro", "I Need Motivation"];

/// Buttons under the generated bio
pub const RESULT_BUTTONS: [&str; 2] = ["Create Another Intro", "Back to Home"];

/// Buttons under an affirmation
pub const AFFIRMATION_BUTTONS: [&str; 2] = ["Check In Again", "Back to Home"];

/// Which text the keyboard is writing into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    Description,
    /// The "Other" override of a categorical field
    Override(Field),
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Keys are typed into a text field
    Typing(TextTarget),
    /// Help overlay
    Help,
}

impl InteractionMode {
    pub fn is_typing(&self) -> bool {
        matches!(self, Self::Typing(_))
    }
}

/// One option line in a categorical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow {
    pub label: &'static str,
    pub ticked: bool,
    pub is_other: bool,
}

fn rows_of<K: FieldKey>(selection: &Selection) -> Vec<OptionRow> {
    let field = K::get(selection);
    Pick::<K::Value>::options()
        .into_iter()
        .map(|pick| OptionRow {
            label: pick.label(),
            ticked: field.contains(pick),
            is_other: pick.is_other(),
        })
        .collect()
}

/// Options of a categorical field with their ticked state; empty for the description
pub fn option_rows(selection: &Selection, field: Field) -> Vec<OptionRow> {
    match field {
        Field::CreativeTypes => rows_of::<CreativeTypes>(selection),
        Field::Inspirations => rows_of::<Inspirations>(selection),
        Field::Tones => rows_of::<Tones>(selection),
        Field::Description => Vec::new(),
    }
}

/// Number of options a field offers, "Other" included
pub fn option_count(field: Field) -> usize {
    fn count<T: Choice>() -> usize {
        T::ALL.len() + 1
    }
    match field {
        Field::CreativeTypes => count::<<CreativeTypes as FieldKey>::Value>(),
        Field::Inspirations => count::<<Inspirations as FieldKey>::Value>(),
        Field::Tones => count::<<Tones as FieldKey>::Value>(),
        Field::Description => 0,
    }
}

/// Override text bound to "Other" for a categorical field
pub fn override_text(selection: &Selection, field: Field) -> &str {
    match field {
        Field::CreativeTypes => CreativeTypes::get(selection).custom(),
        Field::Inspirations => Inspirations::get(selection).custom(),
        Field::Tones => Tones::get(selection).custom(),
        Field::Description => &selection.description,
    }
}

/// Whether "Other" is ticked for a field
pub fn has_other(selection: &Selection, field: Field) -> bool {
    match field {
        Field::CreativeTypes => CreativeTypes::get(selection).has_other(),
        Field::Inspirations => Inspirations::get(selection).has_other(),
        Field::Tones => Tones::get(selection).has_other(),
        Field::Description => false,
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Form, check-in and navigation
    pub session: Session,
    pub interaction_mode: InteractionMode,
    /// Highlighted action on Home
    pub home_cursor: usize,
    /// Focused builder row (`Field::ALL` index, or the submit row)
    pub builder_row: usize,
    /// Highlighted option within the focused field
    pub option_cursor: usize,
    /// Highlighted feeling in the Motivation Space
    pub feeling_cursor: usize,
    /// Highlighted button under a result or affirmation
    pub button_cursor: usize,
    /// One-line hint shown in the footer until the next key
    pub hint: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            interaction_mode: InteractionMode::Normal,
            home_cursor: 0,
            builder_row: 0,
            option_cursor: 0,
            feeling_cursor: 0,
            button_cursor: 0,
            hint: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Field under the builder cursor; `None` on the submit row
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.builder_row).copied()
    }

    pub fn on_submit_row(&self) -> bool {
        self.builder_row == BUILDER_ROWS - 1
    }

    /// Move the builder focus by `delta` rows, wrapping
    pub fn move_row(&mut self, delta: isize) {
        self.builder_row = wrap(self.builder_row, delta, BUILDER_ROWS);
        self.option_cursor = 0;
        debug!(row = self.builder_row, "AppState::move_row: focus moved");
    }

    /// Move the option cursor within the focused field, wrapping
    pub fn move_option(&mut self, delta: isize) {
        if let Some(field) = self.focused_field() {
            self.option_cursor = wrap(self.option_cursor, delta, option_count(field));
        }
    }

    /// Clear every cursor and mode, as on a fresh visit to a screen
    pub fn reset_cursors(&mut self) {
        self.interaction_mode = InteractionMode::Normal;
        self.home_cursor = 0;
        self.builder_row = 0;
        self.option_cursor = 0;
        self.feeling_cursor = 0;
        self.button_cursor = 0;
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = Some(hint.into());
    }

    pub fn clear_hint(&mut self) {
        self.hint = None;
    }
}

/// Add `delta` to `index` modulo `len`; zero-length ranges stay at 0
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstwords::{Config, IntroForm, Tone};

    fn state() -> AppState {
        AppState::new(Session::new(&Config {
            seed: Some(1),
            ..Default::default()
        }))
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 1, 5), 3);
        assert_eq!(wrap(3, 1, 0), 0);
    }

    #[test]
    fn test_option_rows_mark_ticked_and_other() {
        let mut form = IntroForm::new();
        form.toggle_multi(Tones, Pick::Known(Tone::Honest), true);
        form.toggle_multi(Tones, Pick::Other, true);

        let rows = option_rows(form.selection(), Field::Tones);
        assert_eq!(rows.len(), option_count(Field::Tones));
        assert!(rows[1].ticked);
        assert!(!rows[0].ticked);
        let last = rows[rows.len() - 1];
        assert!(last.is_other && last.ticked);
        assert!(has_other(form.selection(), Field::Tones));
    }

    #[test]
    fn test_description_has_no_options() {
        assert!(option_rows(&Selection::default(), Field::Description).is_empty());
        assert_eq!(option_count(Field::Description), 0);
    }

    #[test]
    fn test_move_row_wraps_to_submit() {
        let mut state = state();
        state.move_row(-1);
        assert!(state.on_submit_row());
        assert_eq!(state.focused_field(), None);
        state.move_row(1);
        assert_eq!(state.focused_field(), Some(Field::CreativeTypes));
    }

    #[test]
    fn test_move_option_stays_in_field() {
        let mut state = state();
        state.move_option(-1);
        assert_eq!(state.option_cursor, option_count(Field::CreativeTypes) - 1);
        state.move_row(1);
        assert_eq!(state.option_cursor, 0);
    }
}
