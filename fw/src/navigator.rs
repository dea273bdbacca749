//! Which screen is on display
//!
//! Three screens, no history: going back always lands on Home.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Landing screen
    #[default]
    Home,
    /// Intro builder form
    Builder,
    /// Mood check-in and affirmations
    Affirmation,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Self::Home, Self::Builder, Self::Affirmation];

    /// Title shown in the header
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "First Line",
            Self::Builder => "Intro Builder",
            Self::Affirmation => "Motivation Space",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Holds the active screen
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `target`, unconditionally
    pub fn navigate(&mut self, target: Screen) {
        debug!(from = ?self.current, to = ?target, "Navigator::navigate: called");
        self.current = target;
    }

    /// Back always means Home
    pub fn back(&mut self) {
        self.navigate(Screen::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Builder);
        assert_eq!(nav.current(), Screen::Builder);
        nav.navigate(Screen::Affirmation);
        nav.back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_to_same_screen() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
    }
}
