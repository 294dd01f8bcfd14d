use serde::Serialize;

/// A quoted string literal located in source text.
///
/// Offsets are byte offsets into the scanned source, half-open, and cover
/// `full_text` (quotes included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSpan {
    /// Literal content with the quotes stripped. Escape sequences are kept verbatim.
    pub text: String,
    /// Literal including its surrounding quote characters.
    pub full_text: String,
    pub start: usize,
    pub end: usize,
}

impl StringSpan {
    pub fn new(full_text: &str, start: usize) -> Self {
        // Both quote kinds are single-byte, so slicing one byte off each side is safe.
        let text = full_text[1..full_text.len() - 1].to_string();
        Self {
            text,
            full_text: full_text.to_string(),
            start,
            end: start + full_text.len(),
        }
    }
}

/// A candidate literal accepted by a language scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub text: String,
    pub full_text: String,
    pub start: usize,
    pub end: usize,
    /// Start of the enclosing syntactic unit. Scanners that expand a detection
    /// to a wrapping call report it here; the Dart scanner does not expand.
    pub full_start: usize,
    pub full_end: usize,
    /// Tag of the scanner that produced this result (e.g. `dart-string`).
    pub source: &'static str,
}

impl DetectionResult {
    /// Build a result covering exactly the literal span.
    pub fn from_span(span: StringSpan, source: &'static str) -> Self {
        Self {
            full_start: span.start,
            full_end: span.end,
            text: span.text,
            full_text: span.full_text,
            start: span.start,
            end: span.end,
            source,
        }
    }
}
