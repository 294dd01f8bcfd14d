use crate::core::rules::dynamic::strip_interpolations;

/// Maximum number of words kept in a suggested key path.
const MAX_KEY_WORDS: usize = 5;

/// Fallback key when the text has no ASCII words.
const FALLBACK_KEY: &str = "text";

/// Suggest a snake_case key path for hard-coded `text`.
///
/// Interpolations are dropped and only the first few ASCII words are kept:
/// `"Are you sure?"` becomes `are_you_sure`.
pub fn suggest_keypath(text: &str) -> String {
    let words: Vec<String> = strip_interpolations(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(MAX_KEY_WORDS)
        .map(|w| w.to_ascii_lowercase())
        .collect();

    if words.is_empty() {
        FALLBACK_KEY.to_string()
    } else {
        words.join("_")
    }
}
