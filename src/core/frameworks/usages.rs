use regex::Regex;
use serde::Serialize;

/// An existing localized usage of a translation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    /// The captured key path.
    pub key: String,
    /// Byte range of the whole usage (`'home.title'.tr`).
    pub start: usize,
    pub end: usize,
    /// Index of the usage template that matched.
    pub matcher_index: usize,
}

/// Find localized usages in `source` with compiled usage matchers.
///
/// Matchers run in precedence order. A match overlapping text already claimed
/// by an earlier matcher is dropped, so a bare-form pattern never re-reports
/// the key of a parameterized call. Results are sorted by start offset.
pub fn find_key_usages(source: &str, matchers: &[Regex]) -> Vec<KeyUsage> {
    let mut usages: Vec<KeyUsage> = Vec::new();

    for (matcher_index, matcher) in matchers.iter().enumerate() {
        for caps in matcher.captures_iter(source) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let overlaps = usages
                .iter()
                .any(|u| whole.start() < u.end && u.start < whole.end());
            if overlaps {
                continue;
            }
            usages.push(KeyUsage {
                key: key.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
                matcher_index,
            });
        }
    }

    usages.sort_by_key(|u| u.start);
    usages
}
