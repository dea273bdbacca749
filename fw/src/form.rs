//! Intro builder form state
//!
//! [`Selection`] holds what the user has ticked and typed so far.
//! [`IntroForm`] wraps it in the `Editing -> ResultShown -> Editing` cycle:
//! submit only moves forward when every field resolves, and reset clears
//! everything.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::bio::{ResolvedSelection, generate_bio};
use crate::category::{Category, Choice, CreativeType, Inspiration, Pick, Tone};

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CreativeTypes,
    Inspirations,
    Description,
    Tones,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Self::CreativeTypes,
        Self::Inspirations,
        Self::Description,
        Self::Tones,
    ];

    /// Short name used in messages
    pub fn name(self) -> &'static str {
        match self {
            Self::CreativeTypes => "creative type",
            Self::Inspirations => "inspiration",
            Self::Description => "description",
            Self::Tones => "tone",
        }
    }

    /// Question shown above the field
    pub fn prompt(self) -> &'static str {
        match self {
            Self::CreativeTypes => "What kind of creative are you?",
            Self::Inspirations => "What inspires you?",
            Self::Description => "How would you describe yourself?",
            Self::Tones => "What tone best fits your voice or personality?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a selection cannot be turned into a bio yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Choose at least one {0}")]
    MissingField(Field),

    #[error("Describe your own {0} or untick Other")]
    MissingOverride(Field),

    #[error("Tell us how you would describe yourself")]
    MissingDescription,
}

/// Ticked options for one categorical field, plus its "Other" override text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelect<T> {
    picks: Vec<Pick<T>>,
    custom: String,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self {
            picks: Vec::new(),
            custom: String::new(),
        }
    }
}

impl<T: Choice> MultiSelect<T> {
    /// Ticked options in the order they were ticked
    pub fn picks(&self) -> &[Pick<T>] {
        &self.picks
    }

    /// Override text bound to "Other"
    pub fn custom(&self) -> &str {
        &self.custom
    }

    pub fn contains(&self, pick: Pick<T>) -> bool {
        self.picks.contains(&pick)
    }

    pub fn has_other(&self) -> bool {
        self.contains(Pick::Other)
    }

    /// Replace the ticked options with exactly one
    pub fn set_single(&mut self, pick: Pick<T>) {
        self.picks = vec![pick];
    }

    /// Add (append) or remove one option, leaving the others in order
    pub fn toggle(&mut self, pick: Pick<T>, included: bool) {
        if included {
            if !self.contains(pick) {
                self.picks.push(pick);
            }
        } else {
            self.picks.retain(|p| *p != pick);
        }
    }

    pub fn set_override(&mut self, text: impl Into<String>) {
        self.custom = text.into();
    }

    /// Swap "Other" for its override text
    pub fn resolve(&self, field: Field) -> Result<Vec<Category<T>>, SelectionError> {
        let custom = self.custom.trim();
        if self.has_other() && custom.is_empty() {
            return Err(SelectionError::MissingOverride(field));
        }

        let resolved: Vec<Category<T>> = self
            .picks
            .iter()
            .map(|pick| match pick {
                Pick::Known(choice) => Category::Known(*choice),
                Pick::Other => Category::Custom(custom.to_string()),
            })
            .collect();

        if resolved.is_empty() {
            return Err(SelectionError::MissingField(field));
        }
        Ok(resolved)
    }
}

/// Everything the user has entered in one form session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub creative_types: MultiSelect<CreativeType>,
    pub inspirations: MultiSelect<Inspiration>,
    pub tones: MultiSelect<Tone>,
    pub description: String,
}

impl Selection {
    /// Resolve every field, or report the first one that is not ready
    pub fn resolve(&self) -> Result<ResolvedSelection, SelectionError> {
        let creative_types = display_all(self.creative_types.resolve(Field::CreativeTypes)?);
        let inspirations = display_all(self.inspirations.resolve(Field::Inspirations)?);
        if self.description.trim().is_empty() {
            return Err(SelectionError::MissingDescription);
        }
        let tones = display_all(self.tones.resolve(Field::Tones)?);

        Ok(ResolvedSelection {
            creative_types,
            inspirations,
            tones,
            description: self.description.clone(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.resolve().is_ok()
    }
}

fn display_all<T: Choice>(values: Vec<Category<T>>) -> Vec<String> {
    values.iter().map(|v| v.display().to_string()).collect()
}

/// Typed handle naming one categorical field of a [`Selection`]
pub trait FieldKey: Copy {
    type Value: Choice;

    const FIELD: Field;

    fn get(selection: &Selection) -> &MultiSelect<Self::Value>;

    fn get_mut(selection: &mut Selection) -> &mut MultiSelect<Self::Value>;
}

/// The creative type field
#[derive(Debug, Clone, Copy)]
pub struct CreativeTypes;

/// The inspiration field
#[derive(Debug, Clone, Copy)]
pub struct Inspirations;

/// The tone field
#[derive(Debug, Clone, Copy)]
pub struct Tones;

impl FieldKey for CreativeTypes {
    type Value = CreativeType;
    const FIELD: Field = Field::CreativeTypes;

    fn get(selection: &Selection) -> &MultiSelect<CreativeType> {
        &selection.creative_types
    }

    fn get_mut(selection: &mut Selection) -> &mut MultiSelect<CreativeType> {
        &mut selection.creative_types
    }
}

impl FieldKey for Inspirations {
    type Value = Inspiration;
    const FIELD: Field = Field::Inspirations;

    fn get(selection: &Selection) -> &MultiSelect<Inspiration> {
        &selection.inspirations
    }

    fn get_mut(selection: &mut Selection) -> &mut MultiSelect<Inspiration> {
        &mut selection.inspirations
    }
}

impl FieldKey for Tones {
    type Value = Tone;
    const FIELD: Field = Field::Tones;

    fn get(selection: &Selection) -> &MultiSelect<Tone> {
        &selection.tones
    }

    fn get_mut(selection: &mut Selection) -> &mut MultiSelect<Tone> {
        &mut selection.tones
    }
}

/// Where the intro builder is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    ResultShown { bio: String },
}

/// The intro builder: a selection plus the submit/reset state machine
#[derive(Debug, Clone, Default)]
pub struct IntroForm {
    selection: Selection,
    phase: FormPhase,
}

impl IntroForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, FormPhase::Editing)
    }

    /// The generated bio, once submitted
    pub fn result(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::ResultShown { bio } => Some(bio),
            FormPhase::Editing => None,
        }
    }

    /// Selection to edit; `None` while a result is shown
    fn editable(&mut self) -> Option<&mut Selection> {
        match self.phase {
            FormPhase::Editing => Some(&mut self.selection),
            FormPhase::ResultShown { .. } => {
                debug!("IntroForm: ignoring edit while result is shown");
                None
            }
        }
    }

    pub fn set_single<K: FieldKey>(&mut self, _field: K, pick: Pick<K::Value>) {
        debug!(field = K::FIELD.name(), pick = pick.label(), "IntroForm::set_single: called");
        if let Some(selection) = self.editable() {
            K::get_mut(selection).set_single(pick);
        }
    }

    pub fn toggle_multi<K: FieldKey>(&mut self, _field: K, pick: Pick<K::Value>, included: bool) {
        debug!(field = K::FIELD.name(), pick = pick.label(), included, "IntroForm::toggle_multi: called");
        if let Some(selection) = self.editable() {
            K::get_mut(selection).toggle(pick, included);
        }
    }

    pub fn set_override<K: FieldKey>(&mut self, _field: K, text: impl Into<String>) {
        debug!(field = K::FIELD.name(), "IntroForm::set_override: called");
        if let Some(selection) = self.editable() {
            K::get_mut(selection).set_override(text);
        }
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        debug!("IntroForm::set_description: called");
        if let Some(selection) = self.editable() {
            selection.description = text.into();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    /// First thing still missing, if any
    pub fn missing(&self) -> Option<SelectionError> {
        self.selection.resolve().err()
    }

    /// Generate the bio if the form is complete
    ///
    /// Returns true when the form moved to `ResultShown`. An incomplete form
    /// stays open and nothing else happens.
    pub fn submit(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        match self.selection.resolve() {
            Ok(resolved) => {
                let bio = generate_bio(&resolved);
                info!(len = bio.len(), "IntroForm::submit: bio generated");
                self.phase = FormPhase::ResultShown { bio };
                true
            }
            Err(e) => {
                debug!(reason = %e, "IntroForm::submit: form incomplete");
                false
            }
        }
    }

    /// Clear every field and start editing again
    pub fn reset(&mut self) {
        debug!("IntroForm::reset: called");
        self.selection = Selection::default();
        self.phase = FormPhase::Editing;
    }
}
