//! Creative introduction templates
//!
//! A bio is three sentences: an opening that names the creative type(s) and
//! inspiration(s), the formatted self description, and a closing led by the
//! tone clause. The opening and closing come from a template picked by the
//! canonical tones found in the selected tones.
//!
//! Generation is pure and total: the same [`ResolvedSelection`] always yields
//! the same text.

use std::fmt;

use tracing::debug;

use crate::category::{Choice, Tone};
use crate::format::{capitalize_first, format_description, format_list, sentence, with_article};

/// Selection with every "Other" already replaced by its override text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub creative_types: Vec<String>,
    pub inspirations: Vec<String>,
    pub tones: Vec<String>,
    pub description: String,
}

/// Sentence skeleton chosen from the selected tones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioTemplate {
    /// Both poetic and bold were selected
    PoeticBold,
    Poetic,
    Bold,
    Honest,
    SoftSpoken,
    /// No canonical tone, custom tones only, or an unlisted combination
    Default,
}

impl BioTemplate {
    pub fn name(self) -> &'static str {
        match self {
            Self::PoeticBold => "poetic + bold",
            Self::Poetic => "poetic",
            Self::Bold => "bold",
            Self::Honest => "honest",
            Self::SoftSpoken => "soft-spoken",
            Self::Default => "default",
        }
    }

    fn opening(self, types: &str, inspirations: &str) -> String {
        match self {
            Self::PoeticBold => format!("There's a fire in {} that drives me as {}.", inspirations, types),
            Self::Poetic => format!("There's a rhythm in {} that fuels me as {}.", inspirations, types),
            Self::Bold => format!("I'm {} inspired by {}.", types, inspirations),
            Self::Honest => format!("As {}, my path has been shaped by {}.", types, inspirations),
            Self::SoftSpoken => format!("I'm {} quietly inspired by {}.", types, inspirations),
            Self::Default => format!("Driven by {}, I create as {}.", inspirations, types),
        }
    }

    fn closing(self, tone: &str) -> String {
        match self {
            Self::PoeticBold => format!(
                "{}, I turn what moves me into work that is fearless and lyrical at once.",
                tone
            ),
            Self::Poetic => format!("{}, I connect with others while staying rooted in who I am.", tone),
            Self::Bold => format!("{}, I create work that's honest and alive.", tone),
            Self::Honest => format!("{}, I bring authenticity to every piece of work I make.", tone),
            Self::SoftSpoken => format!(
                "{}, I let my work speak softly and stay with people long after.",
                tone
            ),
            Self::Default => format!(
                "{}, I tell my story raw and real, and that is what makes my voice mine.",
                tone
            ),
        }
    }
}

impl fmt::Display for BioTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical tones contained (case-insensitively) in any selected tone
///
/// One tone string may match several canonical tones, e.g. "bold and poetic".
/// The result follows [`Tone::ALL`] order and has no duplicates.
pub fn classify_tones<S: AsRef<str>>(tones: &[S]) -> Vec<Tone> {
    let lowered: Vec<String> = tones.iter().map(|t| t.as_ref().to_lowercase()).collect();
    Tone::ALL
        .iter()
        .copied()
        .filter(|canonical| {
            let needle = canonical.label().to_lowercase();
            lowered.iter().any(|t| t.contains(&needle))
        })
        .collect()
}

/// Pick the template for a set of matched canonical tones
///
/// Precedence: poetic+bold, then each tone when it is the only match, then
/// the default.
pub fn select_template(matched: &[Tone]) -> BioTemplate {
    if matched.contains(&Tone::Poetic) && matched.contains(&Tone::Bold) {
        return BioTemplate::PoeticBold;
    }
    match matched {
        [Tone::Poetic] => BioTemplate::Poetic,
        [Tone::Bold] => BioTemplate::Bold,
        [Tone::Honest] => BioTemplate::Honest,
        [Tone::SoftSpoken] => BioTemplate::SoftSpoken,
        _ => BioTemplate::Default,
    }
}

/// Describe how the selected tones color the voice
///
/// Lowercase; callers capitalize it when it opens a sentence.
pub fn format_tone_description<S: AsRef<str>>(tones: &[S]) -> String {
    match tones {
        [] => "in my own voice".to_string(),
        [single] => {
            let tone = single.as_ref().trim().to_lowercase();
            if tone.contains("humor") || tone.contains("funny") {
                "with humor guiding my perspective".to_string()
            } else if tone.contains("gentle") || tone.contains("calm") {
                "in a gentle, thoughtful way".to_string()
            } else if Tone::ALL.iter().any(|c| c.label().to_lowercase() == tone) {
                format!("through {} lens", with_article(&tone))
            } else {
                format!("with {} shaping my expression", tone)
            }
        }
        _ => format!("blending {} perspectives", format_list(tones)),
    }
}

/// Generate a creative introduction
pub fn generate_bio(selection: &ResolvedSelection) -> String {
    let template = select_template(&classify_tones(&selection.tones));
    debug!(%template, "generate_bio: selected template");

    let types = with_article(&format_list(&selection.creative_types));
    let inspirations = format_list(&selection.inspirations);
    let description = sentence(&format_description(&selection.description));
    let tone = capitalize_first(&format_tone_description(&selection.tones));

    [template.opening(&types, &inspirations), description, template.closing(&tone)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(types: &[&str], inspirations: &[&str], description: &str, tones: &[&str]) -> ResolvedSelection {
        ResolvedSelection {
            creative_types: types.iter().map(|s| s.to_string()).collect(),
            inspirations: inspirations.iter().map(|s| s.to_string()).collect(),
            tones: tones.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_bold_bio_with_traits() {
        let bio = generate_bio(&selection(&["Singer"], &["Nature"], "bold, curious", &["Bold"]));
        assert!(bio.contains("Words like bold and curious capture how I move through the world"));
        assert_eq!(
            bio,
            "I'm a singer inspired by nature. Words like bold and curious capture how I move through \
             the world. Through a bold lens, I create work that's honest and alive."
        );
    }

    #[test]
    fn test_poetic_and_bold_blend() {
        let tones = ["Poetic", "Bold"];
        assert_eq!(select_template(&classify_tones(&tones)), BioTemplate::PoeticBold);

        let bio = generate_bio(&selection(&["Writer"], &["Stories"], "dreamy", &tones));
        assert!(bio.starts_with("There's a fire in stories that drives me as a writer."));
        assert!(bio.contains("Blending poetic and bold perspectives, I turn what moves me"));
        assert!(!bio.contains("There's a rhythm"));
        assert!(!bio.contains("I'm a writer inspired by"));
    }

    #[test]
    fn test_blend_wins_over_extra_tones() {
        let matched = classify_tones(&["Honest", "Poetic", "Bold"]);
        assert_eq!(select_template(&matched), BioTemplate::PoeticBold);
    }

    #[test]
    fn test_single_tone_templates() {
        assert_eq!(select_template(&[Tone::Poetic]), BioTemplate::Poetic);
        assert_eq!(select_template(&[Tone::Bold]), BioTemplate::Bold);
        assert_eq!(select_template(&[Tone::Honest]), BioTemplate::Honest);
        assert_eq!(select_template(&[Tone::SoftSpoken]), BioTemplate::SoftSpoken);
    }

    #[test]
    fn test_default_template_cases() {
        assert_eq!(select_template(&[]), BioTemplate::Default);
        assert_eq!(select_template(&[Tone::Honest, Tone::SoftSpoken]), BioTemplate::Default);
        assert_eq!(select_template(&classify_tones(&["Playful"])), BioTemplate::Default);
    }

    #[test]
    fn test_classify_tones_substring_and_multi_match() {
        assert_eq!(classify_tones(&["Soft-Spoken"]), vec![Tone::SoftSpoken]);
        assert_eq!(classify_tones(&["boldly poetic"]), vec![Tone::Bold, Tone::Poetic]);
        assert_eq!(classify_tones(&["HONEST", "honest"]), vec![Tone::Honest]);
        assert!(classify_tones(&["quiet"]).is_empty());
    }

    #[test]
    fn test_custom_tone_matching_canonical_uses_its_template() {
        let bio = generate_bio(&selection(&["Dancer"], &["Culture"], "restless", &["Brutally honest"]));
        assert!(bio.starts_with("As a dancer, my path has been shaped by culture."));
        assert!(bio.contains("With brutally honest shaping my expression, I bring authenticity"));
    }

    #[test]
    fn test_tone_description_rules() {
        assert_eq!(format_tone_description(&["Funny"]), "with humor guiding my perspective");
        assert_eq!(format_tone_description(&["dry humor"]), "with humor guiding my perspective");
        assert_eq!(format_tone_description(&["Calm"]), "in a gentle, thoughtful way");
        assert_eq!(format_tone_description(&["Bold"]), "through a bold lens");
        assert_eq!(format_tone_description(&["Honest"]), "through an honest lens");
        assert_eq!(format_tone_description(&["Soft-Spoken"]), "through a soft-spoken lens");
        assert_eq!(format_tone_description(&["Playful"]), "with playful shaping my expression");
        assert_eq!(
            format_tone_description(&["Bold", "Honest", "Playful"]),
            "blending bold, honest, and playful perspectives"
        );
    }

    #[test]
    fn test_multi_value_lists_and_articles() {
        let bio = generate_bio(&selection(
            &["Actor", "Singer", "Dancer"],
            &["Emotions", "Nature"],
            "a night owl",
            &["Playful"],
        ));
        assert_eq!(
            bio,
            "Driven by emotions and nature, I create as an actor, singer, and dancer. A night owl. \
             With playful shaping my expression, I tell my story raw and real, and that is what makes \
             my voice mine."
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let s = selection(&["Painter"], &["Nature"], "quiet, observant", &["Soft-Spoken"]);
        assert_eq!(generate_bio(&s), generate_bio(&s));
    }

    #[test]
    fn test_single_trait_with_trailing_comma() {
        let bio = generate_bio(&selection(&["Singer"], &["Nature"], "curious,", &["Honest"]));
        assert_eq!(
            bio,
            "As a singer, my path has been shaped by nature. Curious. Through an honest lens, I bring \
             authenticity to every piece of work I make."
        );
        assert!(!bio.contains(",."));
    }

    #[test]
    fn test_custom_type_article_by_sound() {
        let bio = generate_bio(&selection(&["Uke player"], &["Stories"], "loud", &["Bold"]));
        assert!(bio.starts_with("I'm a uke player inspired by stories."));
    }

    #[test]
    fn test_sentinel_never_rendered_for_resolved_input() {
        let bio = generate_bio(&selection(&["Puppeteer"], &["Old films"], "odd", &["Poetic"]));
        assert!(!bio.contains("Other"));
        assert!(bio.contains("a puppeteer"));
        assert!(bio.contains("old films"));
    }
}
