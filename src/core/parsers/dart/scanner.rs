use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::core::data::StringSpan;

// A quote, then any run of non-quote/non-backslash chars or escape pairs,
// then the same quote. Escaped quotes (`\'`, `\"`) never terminate.
static SINGLE_QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?:[^'\\]|\\.)*'").unwrap());

static DOUBLE_QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap());

/// Find every quoted string literal in `code`, sorted by start offset.
///
/// Single- and double-quoted literals are matched in two independent passes.
/// Unterminated literals produce nothing. A span from one pass that starts
/// inside a literal found by the other (e.g. the `'` in `"it's"`) is dropped,
/// so the returned spans never overlap.
pub fn find_string_literals(code: &str) -> Vec<StringSpan> {
    let mut spans = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for pattern in [&*SINGLE_QUOTED_REGEX, &*DOUBLE_QUOTED_REGEX] {
        for m in pattern.find_iter(code) {
            if !seen.insert(m.start()) {
                continue;
            }
            spans.push(StringSpan::new(m.as_str(), m.start()));
        }
    }

    spans.sort_by_key(|span| span.start);

    let mut last_end = 0;
    spans.retain(|span| {
        if span.start < last_end {
            return false;
        }
        last_end = span.end;
        true
    });

    spans
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::dart::scanner::*;

    fn texts(code: &str) -> Vec<String> {
        find_string_literals(code)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_finds_both_quote_kinds_in_order() {
        let code = r#"print("first"); print('second');"#;
        assert_eq!(texts(code), vec!["first", "second"]);
    }

    #[test]
    fn test_escaped_quote_stays_inside_literal() {
        let code = r"final s = 'it\'s';";
        let spans = find_string_literals(code);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, r"it\'s");
        assert_eq!(&code[spans[0].start..spans[0].end], r"'it\'s'");
        assert_eq!(spans[0].end, code.len() - 1);
    }

    #[test]
    fn test_other_quote_kind_kept_verbatim() {
        assert_eq!(texts(r#"Text("Don't panic")"#), vec!["Don't panic"]);
        assert_eq!(texts(r#"Text('Say "hi"')"#), vec![r#"Say "hi""#]);
    }

    #[test]
    fn test_unterminated_literal_is_ignored() {
        assert!(find_string_literals("final s = 'never closed").is_empty());
        assert_eq!(texts("a('ok'); b(\"open"), vec!["ok"]);
    }

    #[test]
    fn test_empty_literals() {
        assert_eq!(texts(r#"f('', "")"#), vec!["", ""]);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let code = r#"a("it's", 'x', "y")"#;
        let spans = find_string_literals(code);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap: {:?}", pair);
        }
        assert_eq!(spans[0].text, "it's");
    }

    #[test]
    fn test_offsets_match_source() {
        let code = "Text('你好');\nText(\"Hello\");";
        for span in find_string_literals(code) {
            assert_eq!(&code[span.start..span.end], span.full_text);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(find_string_literals("").is_empty());
    }
}
