//! Small text helpers shared by the templates

use tracing::trace;

/// Join items into an English list, lowercased
///
/// - `["Singer"]` -> `"singer"`
/// - `["Singer", "Actor"]` -> `"singer and actor"`
/// - `["Singer", "Actor", "Writer"]` -> `"singer, actor, and writer"`
///
/// An empty list renders as the empty string.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    trace!(count = items.len(), "format_list: called");
    let items: Vec<String> = items.iter().map(|s| s.as_ref().to_lowercase()).collect();
    match items.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Turn a comma-separated self description into a sentence about traits
///
/// "bold, curious" becomes "Words like bold and curious capture how I move
/// through the world". Text without at least two comma-separated traits is
/// returned unchanged.
pub fn format_description(text: &str) -> String {
    trace!(len = text.len(), "format_description: called");
    if text.contains(',') {
        let traits: Vec<&str> = text.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        if traits.len() > 1 {
            return format!(
                "Words like {} capture how I move through the world",
                format_list(&traits)
            );
        }
    }
    text.to_string()
}

/// Uppercase the first character
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Make a standalone sentence: capitalized, with terminal punctuation
///
/// Trailing `,`, `;` or `:` is dropped before the period goes on.
pub fn sentence(text: &str) -> String {
    let text = text.trim().trim_end_matches([',', ';', ':']).trim_end();
    if text.is_empty() {
        return String::new();
    }
    let mut out = capitalize_first(text);
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

/// Words starting with a silent "h": "an honest", "an hour"
const VOWEL_SOUND_PREFIXES: &[&str] = &["honest", "honor", "honour", "hour", "heir"];

/// Words starting with a "yoo" or "wuh" sound: "a uke", "a one-woman show"
const CONSONANT_SOUND_PREFIXES: &[&str] = &[
    "uke", "uni", "use", "usu", "uti", "uto", "eu", "ewe", "one", "once", "ubiq", "ure",
];

/// Prefix a noun phrase with "a" or "an", by how its first word sounds
pub fn with_article(phrase: &str) -> String {
    let phrase = phrase.trim();
    let Some(first) = phrase.chars().next() else {
        return String::new();
    };
    let lowered = phrase.to_lowercase();
    let vowel_sound = if VOWEL_SOUND_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        true
    } else if CONSONANT_SOUND_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        false
    } else {
        "aeiouAEIOU".contains(first)
    };
    if vowel_sound {
        format!("an {}", phrase)
    } else {
        format!("a {}", phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_list_shapes() {
        assert_eq!(format_list(&["Singer"]), "singer");
        assert_eq!(format_list(&["Singer", "Actor"]), "singer and actor");
        assert_eq!(format_list(&["Singer", "Actor", "Writer"]), "singer, actor, and writer");
        assert_eq!(
            format_list(&["Emotions", "Nature", "Culture", "Stories"]),
            "emotions, nature, culture, and stories"
        );
    }

    #[test]
    fn test_format_list_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(format_list(&empty), "");
    }

    #[test]
    fn test_format_description_splits_traits() {
        assert_eq!(
            format_description("bold, curious"),
            "Words like bold and curious capture how I move through the world"
        );
        assert_eq!(
            format_description("Passionate,  always curious , deeply empathetic"),
            "Words like passionate, always curious, and deeply empathetic capture how I move through the world"
        );
    }

    #[test]
    fn test_format_description_single_trait_is_verbatim() {
        assert_eq!(format_description("a late bloomer"), "a late bloomer");
        assert_eq!(format_description("curious,"), "curious,");
        assert_eq!(format_description(" , dreamy"), " , dreamy");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(sentence("always curious"), "Always curious.");
        assert_eq!(sentence("Loud and proud!"), "Loud and proud!");
        assert_eq!(sentence("  "), "");
    }

    #[test]
    fn test_sentence_drops_trailing_separator() {
        assert_eq!(sentence("curious,"), "Curious.");
        assert_eq!(sentence("always dreaming;"), "Always dreaming.");
        assert_eq!(sentence("note: "), "Note.");
        assert_eq!(sentence(","), "");
    }

    #[test]
    fn test_with_article() {
        assert_eq!(with_article("actor"), "an actor");
        assert_eq!(with_article("singer and dancer"), "a singer and dancer");
        assert_eq!(with_article(""), "");
    }

    #[test]
    fn test_with_article_goes_by_sound() {
        assert_eq!(with_article("honest"), "an honest");
        assert_eq!(with_article("Hour-long improviser"), "an Hour-long improviser");
        assert_eq!(with_article("uke player"), "a uke player");
        assert_eq!(with_article("unicyclist"), "a unicyclist");
        assert_eq!(with_article("umbrella maker"), "an umbrella maker");
        assert_eq!(with_article("hip-hop dancer"), "a hip-hop dancer");
    }

    proptest! {
        #[test]
        fn prop_format_list_keeps_every_item(items in prop::collection::vec("[A-Za-z]{1,8}", 1..6)) {
            let out = format_list(&items);
            for item in &items {
                prop_assert!(out.contains(&item.to_lowercase()));
            }
            prop_assert_eq!(out.to_lowercase(), out.clone());
        }

        #[test]
        fn prop_format_list_uses_oxford_comma(items in prop::collection::vec("[a-z]{1,8}", 3..6)) {
            let out = format_list(&items);
            let expected_tail = format!(", and {}", items[items.len() - 1]);
            prop_assert!(out.ends_with(&expected_tail));
        }
    }
}
