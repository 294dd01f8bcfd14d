//! Flutter GetX localization.
//!
//! GetX translates through string extensions:
//! - `'key'.tr`
//! - `'key'.trParams({...})`
//! - `'key'.trPlural(count)`
//! - `'key'.trPluralParams(count, {...})`
//! - `LocaleKeys.key.tr` (generated key registry)

use super::{FrameworkDetection, FrameworkUsageModel};

pub const FLUTTER_GETX: FrameworkUsageModel = FrameworkUsageModel {
    id: "flutter-getx",
    display: "Flutter (GetX)",
    detection: FrameworkDetection {
        pubspec_dependencies: &["get", "get_storage"],
    },
    language_ids: &["dart"],
    // Most specific first: parameterized and plural calls before bare `.tr`.
    usage_match_templates: &[
        r#"['"`]({key})['"`]\.trPluralParams\s*\("#,
        r#"['"`]({key})['"`]\.trPlural\s*\("#,
        r#"['"`]({key})['"`]\.trParams\s*\("#,
        r"LocaleKeys\.({key})\.tr\b",
        r#"['"`]({key})['"`]\.tr\b"#,
    ],
    refactor_templates_fn: refactor_templates,
    auto_extraction_language_ids: &["dart"],
};

fn refactor_templates(keypath: &str) -> Vec<String> {
    vec![
        format!("'{}'.tr", keypath),
        format!("\"{}\".tr", keypath),
        format!("'{}'.trParams({{}})", keypath),
        format!("LocaleKeys.{}.tr", keypath),
        keypath.to_string(),
    ]
}
