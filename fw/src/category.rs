//! Option sets and the "Other" escape hatch
//!
//! Every categorical field offers a fixed list of options plus "Other".
//! Ticking "Other" unlocks a free-text override; resolution swaps the
//! sentinel for that text so rendered lists never contain "Other".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

/// Label shown for the escape-hatch option
pub const OTHER_LABEL: &str = "Other";

/// Error parsing an option label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} option: '{value}'")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

/// A fixed, enumerated option set
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Human name of the option set, used in messages
    const KIND: &'static str;

    /// Every option, in display order
    const ALL: &'static [Self];

    /// Display label
    fn label(self) -> &'static str;

    /// Find the option whose label matches, ignoring case and punctuation
    fn from_label(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        Self::ALL.iter().copied().find(|c| normalize(c.label()) == wanted)
    }
}

/// Lowercase and keep only alphanumerics, so "soft spoken" == "Soft-Spoken"
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// What kind of creative the user is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreativeType {
    Singer,
    Actor,
    Writer,
    Dancer,
    Painter,
}

impl Choice for CreativeType {
    const KIND: &'static str = "creative type";
    const ALL: &'static [Self] = &[Self::Singer, Self::Actor, Self::Writer, Self::Dancer, Self::Painter];

    fn label(self) -> &'static str {
        match self {
            Self::Singer => "Singer",
            Self::Actor => "Actor",
            Self::Writer => "Writer",
            Self::Dancer => "Dancer",
            Self::Painter => "Painter",
        }
    }
}

/// What inspires the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inspiration {
    Emotions,
    Nature,
    Culture,
    Stories,
}

impl Choice for Inspiration {
    const KIND: &'static str = "inspiration";
    const ALL: &'static [Self] = &[Self::Emotions, Self::Nature, Self::Culture, Self::Stories];

    fn label(self) -> &'static str {
        match self {
            Self::Emotions => "Emotions",
            Self::Nature => "Nature",
            Self::Culture => "Culture",
            Self::Stories => "Stories",
        }
    }
}

/// Tone of voice for the introduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Bold,
    Honest,
    Poetic,
    SoftSpoken,
}

impl Choice for Tone {
    const KIND: &'static str = "tone";
    const ALL: &'static [Self] = &[Self::Bold, Self::Honest, Self::Poetic, Self::SoftSpoken];

    fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Honest => "Honest",
            Self::Poetic => "Poetic",
            Self::SoftSpoken => "Soft-Spoken",
        }
    }
}

macro_rules! impl_label_traits {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ParseChoiceError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Choice>::from_label(s).ok_or_else(|| ParseChoiceError {
                        kind: <$ty as Choice>::KIND,
                        value: s.to_string(),
                    })
                }
            }
        )*
    };
}

impl_label_traits!(CreativeType, Inspiration, Tone);

/// An option the user can tick: one of the known values, or "Other"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pick<T> {
    Known(T),
    Other,
}

impl<T: Choice> Pick<T> {
    /// All pickable options in display order, "Other" last
    pub fn options() -> Vec<Self> {
        T::ALL.iter().copied().map(Self::Known).chain([Self::Other]).collect()
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Known(choice) => choice.label(),
            Self::Other => OTHER_LABEL,
        }
    }

    pub fn is_other(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl<T: Choice> FromStr for Pick<T> {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!(%s, kind = T::KIND, "Pick::from_str: called");
        if normalize(s) == normalize(OTHER_LABEL) {
            return Ok(Self::Other);
        }
        T::from_label(s).map(Self::Known).ok_or_else(|| ParseChoiceError {
            kind: T::KIND,
            value: s.to_string(),
        })
    }
}

/// A resolved value: a known option, or the user's own words in place of "Other"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category<T> {
    Known(T),
    Custom(String),
}

impl<T: Choice> Category<T> {
    /// Text used when rendering this value
    pub fn display(&self) -> &str {
        match self {
            Self::Known(choice) => choice.label(),
            Self::Custom(text) => text,
        }
    }
}
