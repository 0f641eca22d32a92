use crate::model::PlaceholderSpan;

/// Finds every `{...}` span in `template`, left to right.
///
/// A span runs from a `{` to the first `}` after it and must contain at least
/// one character. A `{` met inside an open span is part of its content, so
/// spans never nest or overlap. `{}` is not a span.
pub fn scan(template: &str) -> Vec<PlaceholderSpan> {
    let bytes = template.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }

        match template[i + 1..].find('}') {
            // Nothing after this brace can close a span.
            None => break,
            Some(0) => i += 1,
            Some(rel) => {
                let close = i + 1 + rel;
                spans.push(PlaceholderSpan {
                    start: i,
                    end: close + 1,
                    content: template[i + 1..close].to_string(),
                });
                i = close + 1;
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(template: &str) -> Vec<String> {
        scan(template).into_iter().map(|s| s.content).collect()
    }

    #[test]
    fn test_scan_no_placeholders() {
        assert!(scan("https://example.com").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_positions() {
        let spans = scan("a{clipboard}b{date}");
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (1, 12));
        assert_eq!(spans[0].content, "clipboard");
        assert_eq!((spans[1].start, spans[1].end), (13, 19));
        assert_eq!(spans[1].content, "date");
    }

    #[test]
    fn test_scan_stops_at_first_closing_brace() {
        assert_eq!(contents("{{clipboard}}"), vec!["{clipboard"]);
    }

    #[test]
    fn test_scan_skips_empty_braces() {
        assert_eq!(contents("{}{time}"), vec!["time"]);
        assert_eq!(contents("{{}"), vec!["{"]);
    }

    #[test]
    fn test_scan_unclosed_brace() {
        assert!(scan("a{b").is_empty());
        assert_eq!(contents("{a}{b"), vec!["a"]);
    }

    #[test]
    fn test_scan_multibyte_text() {
        let spans = scan("héllo {selection} wörld");
        assert_eq!(spans.len(), 1);
        assert_eq!(&"héllo {selection} wörld"[spans[0].start..spans[0].end], "{selection}");
    }
}
