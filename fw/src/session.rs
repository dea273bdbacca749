//! Session state owned outside the presentation layer
//!
//! A [`Session`] bundles the navigator, the intro form, the mood check-in
//! and the random source used for affirmations. Front ends hold one and call
//! into it on every user action; rendering only reads it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::affirmation::{AffirmationStyle, Feeling, MoodCheckIn};
use crate::config::Config;
use crate::form::IntroForm;
use crate::navigator::{Navigator, Screen};

/// One user's session across all three screens
#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    intro: IntroForm,
    mood: MoodCheckIn,
    style: AffirmationStyle,
    rng: StdRng,
}

impl Session {
    /// Build a session from configuration; a configured seed makes picks reproducible
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config.affirmations, rng)
    }

    pub fn with_rng(style: AffirmationStyle, rng: StdRng) -> Self {
        Self {
            navigator: Navigator::new(),
            intro: IntroForm::new(),
            mood: MoodCheckIn::new(),
            style,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Switch screens; arriving Home clears the form and the check-in
    pub fn navigate(&mut self, target: Screen) {
        info!(from = ?self.screen(), to = ?target, "Session::navigate: called");
        if target == Screen::Home {
            self.intro.reset();
            self.mood.check_in_again();
        }
        self.navigator.navigate(target);
    }

    pub fn go_home(&mut self) {
        self.navigate(Screen::Home);
    }

    pub fn intro(&self) -> &IntroForm {
        &self.intro
    }

    pub fn intro_mut(&mut self) -> &mut IntroForm {
        &mut self.intro
    }

    pub fn mood(&self) -> &MoodCheckIn {
        &self.mood
    }

    pub fn style(&self) -> AffirmationStyle {
        self.style
    }

    /// Show an affirmation for `feeling`
    pub fn check_in(&mut self, feeling: Feeling) -> &'static str {
        self.mood.select(feeling, self.style, &mut self.rng)
    }

    pub fn check_in_again(&mut self) {
        self.mood.check_in_again();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affirmation::MoodPhase;
    use crate::category::{CreativeType, Pick};
    use crate::form::{CreativeTypes, Selection};

    fn seeded() -> Session {
        Session::new(&Config {
            seed: Some(3),
            ..Default::default()
        })
    }

    #[test]
    fn test_builder_then_home_resets_form() {
        let mut session = seeded();
        session.navigate(Screen::Builder);
        session
            .intro_mut()
            .set_single(CreativeTypes, Pick::Known(CreativeType::Dancer));
        session.intro_mut().set_description("restless");

        session.navigate(Screen::Home);
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.intro().selection(), &Selection::default());
    }

    #[test]
    fn test_home_clears_affirmation() {
        let mut session = seeded();
        session.navigate(Screen::Affirmation);
        let message = session.check_in(Feeling::Anxious);
        assert!(Feeling::Anxious.pool(session.style()).contains(&message));
        assert!(matches!(session.mood().phase(), MoodPhase::Showing { .. }));

        session.go_home();
        assert_eq!(session.mood().phase(), MoodPhase::Choosing);
    }

    #[test]
    fn test_same_seed_same_affirmations() {
        let mut a = seeded();
        let mut b = seeded();
        for feeling in Feeling::ALL {
            assert_eq!(a.check_in(feeling), b.check_in(feeling));
        }
    }
}
