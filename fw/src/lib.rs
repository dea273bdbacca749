//! firstwords: creative introductions and mood affirmations
//!
//! The core behind the First Line app, with no terminal or UI code:
//!
//! - [`category`]: option sets and the "Other" escape hatch
//! - [`form`]: the intro builder form and its submit/reset cycle
//! - [`bio`]: template selection and bio generation
//! - [`affirmation`]: feelings, affirmation pools and the mood check-in
//! - [`navigator`] and [`session`]: screen switching and per-user state

pub mod affirmation;
pub mod bio;
pub mod category;
pub mod cli;
pub mod config;
pub mod form;
pub mod format;
pub mod navigator;
pub mod session;

pub use affirmation::{AffirmationStyle, Feeling, MoodCheckIn, MoodPhase, UnknownFeeling, pick_affirmation};
pub use bio::{BioTemplate, ResolvedSelection, classify_tones, format_tone_description, generate_bio, select_template};
pub use category::{Category, Choice, CreativeType, Inspiration, OTHER_LABEL, ParseChoiceError, Pick, Tone};
pub use config::Config;
pub use form::{
    CreativeTypes, Field, FieldKey, FormPhase, Inspirations, IntroForm, MultiSelect, Selection, SelectionError, Tones,
};
pub use format::{format_description, format_list};
pub use navigator::{Navigator, Screen};
pub use session::Session;
