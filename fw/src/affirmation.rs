//! Mood check-in and affirmation pools
//!
//! Each [`Feeling`] carries presentation metadata (icon, caption, color tag)
//! and a fixed pool of affirmations. Picks draw from an injected random
//! source so a seeded generator reproduces them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Feeling key outside the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown feeling: '{0}' (expected one of: discouraged, anxious, excited, hopeful)")]
pub struct UnknownFeeling(pub String);

/// Which pool each feeling draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffirmationStyle {
    /// Three messages per feeling
    #[default]
    Rich,
    /// One message per feeling
    Simple,
}

/// Mood label offered on the check-in screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feeling {
    Discouraged,
    Anxious,
    Excited,
    Hopeful,
}

const DISCOURAGED: [&str; 3] = [
    "Even the best stories have quiet chapters. This is one of yours.",
    "A slow season is still a season of growth.",
    "Your voice mattered before today, and it still does.",
];

const ANXIOUS: [&str; 3] = [
    "You are more than one moment.",
    "Breathe. You have handled hard things before.",
    "You don't have to have it all figured out to begin.",
];

const EXCITED: [&str; 3] = [
    "Your energy is your gift. Share it.",
    "Ride this wave and make something bold.",
    "The world needs what you're about to create.",
];

const HOPEFUL: [&str; 3] = [
    "You're already growing. Keep going.",
    "Every small step is part of your story.",
    "The best of your work is still ahead of you.",
];

impl Feeling {
    pub const ALL: [Feeling; 4] = [Self::Discouraged, Self::Anxious, Self::Excited, Self::Hopeful];

    /// Stable lowercase key
    pub fn key(self) -> &'static str {
        match self {
            Self::Discouraged => "discouraged",
            Self::Anxious => "anxious",
            Self::Excited => "excited",
            Self::Hopeful => "hopeful",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Discouraged => "Discouraged",
            Self::Anxious => "Anxious",
            Self::Excited => "Excited",
            Self::Hopeful => "Hopeful",
        }
    }

    /// Icon identifier for the presentation layer
    pub fn icon(self) -> &'static str {
        match self {
            Self::Discouraged => "heart",
            Self::Anxious => "zap",
            Self::Excited => "sun",
            Self::Hopeful => "compass",
        }
    }

    /// Short line shown under the icon
    pub fn caption(self) -> &'static str {
        match self {
            Self::Discouraged => "It's okay to rest in the quiet parts.",
            Self::Anxious => "One breath at a time.",
            Self::Excited => "Let that spark lead the way.",
            Self::Hopeful => "Hold on to that light.",
        }
    }

    /// Color tag for the presentation layer
    pub fn color(self) -> &'static str {
        match self {
            Self::Discouraged => "rose",
            Self::Anxious => "blue",
            Self::Excited => "yellow",
            Self::Hopeful => "green",
        }
    }

    fn messages(self) -> &'static [&'static str; 3] {
        match self {
            Self::Discouraged => &DISCOURAGED,
            Self::Anxious => &ANXIOUS,
            Self::Excited => &EXCITED,
            Self::Hopeful => &HOPEFUL,
        }
    }

    /// The fixed pool of affirmations for this feeling
    pub fn pool(self, style: AffirmationStyle) -> &'static [&'static str] {
        let messages = self.messages();
        match style {
            AffirmationStyle::Rich => &messages[..],
            AffirmationStyle::Simple => &messages[..1],
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Feeling {
    type Err = UnknownFeeling;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.key() == wanted)
            .ok_or_else(|| UnknownFeeling(s.to_string()))
    }
}

/// Choose an affirmation for `feeling`, uniformly at random from its pool
///
/// Every call is independent; repeats are allowed.
pub fn pick_affirmation<R: Rng + ?Sized>(feeling: Feeling, style: AffirmationStyle, rng: &mut R) -> &'static str {
    let pool = feeling.pool(style);
    let message = pool.choose(rng).copied().unwrap_or(feeling.messages()[0]);
    debug!(feeling = feeling.key(), ?style, %message, "pick_affirmation: picked");
    message
}

/// Where the mood check-in is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodPhase {
    /// Waiting for the user to say how they feel
    #[default]
    Choosing,
    /// An affirmation is on screen
    Showing { feeling: Feeling, message: &'static str },
}

/// State of the mood check-in screen
#[derive(Debug, Clone, Default)]
pub struct MoodCheckIn {
    phase: MoodPhase,
}

impl MoodCheckIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MoodPhase {
        self.phase
    }

    /// Record how the user feels and show them an affirmation
    pub fn select<R: Rng + ?Sized>(&mut self, feeling: Feeling, style: AffirmationStyle, rng: &mut R) -> &'static str {
        let message = pick_affirmation(feeling, style, rng);
        info!(feeling = feeling.key(), "MoodCheckIn::select: showing affirmation");
        self.phase = MoodPhase::Showing { feeling, message };
        message
    }

    /// Go back to choosing a feeling
    pub fn check_in_again(&mut self) {
        debug!("MoodCheckIn::check_in_again: called");
        self.phase = MoodPhase::Choosing;
    }
}
