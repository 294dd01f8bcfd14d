use std::sync::LazyLock;

use regex::Regex;

use crate::utils::floor_char_boundary;

/// Suffixes marking a literal as already passed to GetX translation.
static LOCALIZED_SUFFIX_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 'key'.tr
        r"\.tr\b",
        // 'key'.trParams({...})
        r"\.trParams\s*\(",
        // 'key'.trPlural(count)
        r"\.trPlural\s*\(",
        // 'key'.trPluralParams(count, {...})
        r"\.trPluralParams\s*\(",
        // LocaleKeys.someKey
        r"LocaleKeys\.\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Content that is not prose: paths, URLs, identifiers, colors, formats.
static NON_USER_FACING_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Import URIs
        r"^(?:package|dart):",
        // Asset paths
        r"^assets/",
        // Routes
        r"(?i)^/[a-z]",
        // URLs
        r"^https?://",
        // Bare file extensions
        r"^\.\w{2,4}$",
        // Pure numbers
        r"^\d+$",
        // Single character
        r"^.$",
        // Blank
        r"^\s*$",
        // camelCase / snake_case identifiers
        r"^[a-z][a-zA-Z0-9]*$",
        r"^[a-z][a-z0-9_]*$",
        // Colors
        r"^#[0-9a-fA-F]{3,8}$",
        r"^0x[0-9a-fA-F]+$",
        // Date/time formats
        r"^[yMdHhms\-/:\s]+$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Whether the text right after a literal ending at `end` holds a
/// localization call.
///
/// Only the next `lookahead` characters are inspected.
pub fn is_already_localized(code: &str, end: usize, lookahead: usize) -> bool {
    let start = floor_char_boundary(code, end);
    let rest = &code[start..];
    let window_end = rest
        .char_indices()
        .nth(lookahead)
        .map_or(rest.len(), |(i, _)| i);
    let window = &rest[..window_end];

    LOCALIZED_SUFFIX_REGEXES.iter().any(|re| re.is_match(window))
}

/// Whether a literal's content looks like code rather than user-facing text.
pub fn is_non_user_facing_content(text: &str) -> bool {
    NON_USER_FACING_REGEXES.iter().any(|re| re.is_match(text))
}
