//! Line-local context checks for a literal's position.
//!
//! These are textual approximations, not a lexer. Known limits:
//! - import detection only looks at the literal's own line, so a directive
//!   split across lines is not recognized after its first line;
//! - block comments are judged by the last `/*` and last `*/` anywhere
//!   before the offset, so nesting is not tracked and comment markers inside
//!   strings or `//` comments can flip the result.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::floor_char_boundary;

// `export` and `part` are valid identifiers, so a directive needs its URI.
static DIRECTIVE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:import|export|part(?:\s+of)?)\s+['"]"#).unwrap()
});

/// Start offset of the line containing `offset`.
fn line_start(code: &str, offset: usize) -> usize {
    code[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Whether `offset` sits on an `import`/`export`/`part` directive line.
pub fn is_in_import_statement(code: &str, offset: usize) -> bool {
    let offset = floor_char_boundary(code, offset);
    let start = line_start(code, offset);
    let end = code[offset..].find('\n').map_or(code.len(), |i| offset + i);
    DIRECTIVE_LINE_REGEX.is_match(&code[start..end])
}

/// Whether `offset` is inside a `//` line comment or a `/* */` block comment.
pub fn is_in_comment(code: &str, offset: usize) -> bool {
    let offset = floor_char_boundary(code, offset);
    let bytes = code.as_bytes();

    // Walk back to the start of the line, including the first byte of the text.
    let mut i = offset;
    loop {
        if i < bytes.len() {
            if bytes[i] == b'\n' {
                break;
            }
            if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'/') {
                return true;
            }
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let before = &code[..offset];
    match (before.rfind("/*"), before.rfind("*/")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}
