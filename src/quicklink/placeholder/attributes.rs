//! Attribute extraction for placeholder bodies such as
//! `argument name="Query" default=rust`.
//!
//! The quoted form `key="..."` is tried first and its value is returned
//! verbatim (spaces, `|` and `=` included). Only when no quoted value exists is
//! the unquoted form `key=token` tried, where the token ends at whitespace.
//! In both forms the first match wins.

/// Returns the value of `key` in `content`, if any.
pub fn extract(content: &str, key: &str) -> Option<String> {
    extract_quoted(content, key).or_else(|| extract_unquoted(content, key))
}

fn extract_quoted(content: &str, key: &str) -> Option<String> {
    value_starts(content, key).find_map(|start| {
        let rest = content[start..].strip_prefix('"')?;
        let close = rest.find('"')?;
        Some(rest[..close].to_string())
    })
}

fn extract_unquoted(content: &str, key: &str) -> Option<String> {
    value_starts(content, key).find_map(|start| {
        let token = content[start..].split(char::is_whitespace).next()?;
        (!token.is_empty()).then(|| token.to_string())
    })
}

/// Byte offsets just past each `key=` in `content`.
///
/// `key` must not be the tail of a longer word, so `name` does not match
/// inside `username=`.
fn value_starts<'a>(content: &'a str, key: &'a str) -> impl Iterator<Item = usize> + 'a {
    content.match_indices(key).filter_map(move |(at, _)| {
        let after = at + key.len();
        let at_boundary = content[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !is_key_char(c));
        (at_boundary && content[after..].starts_with('=')).then_some(after + 1)
    })
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Byte ranges of every well-formed `key="..."` pair, quotes included.
pub(crate) fn quoted_pairs(content: &str) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut search_from = 0;

    while let Some(rel) = content[search_from..].find("=\"") {
        let eq = search_from + rel;
        let has_key = content[..eq].chars().next_back().is_some_and(is_key_char);
        let value_start = eq + 2;

        match content[value_start..].find('"') {
            Some(close) if has_key => {
                let end = value_start + close + 1;
                pairs.push((eq + 1, end));
                search_from = end;
            }
            _ => search_from = value_start,
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_value() {
        let content = r#"argument name="Search Term" default="a b""#;
        assert_eq!(extract(content, "name"), Some("Search Term".to_string()));
        assert_eq!(extract(content, "default"), Some("a b".to_string()));
    }

    #[test]
    fn test_extract_quoted_keeps_pipes_and_equals() {
        let content = r#"argument name="x" options="A|a, B=b""#;
        assert_eq!(extract(content, "options"), Some("A|a, B=b".to_string()));
    }

    #[test]
    fn test_extract_unquoted_value_ends_at_whitespace() {
        let content = "argument name=query default=rust";
        assert_eq!(extract(content, "name"), Some("query".to_string()));
        assert_eq!(extract(content, "default"), Some("rust".to_string()));
    }

    #[test]
    fn test_extract_quoted_takes_precedence() {
        let content = r#"argument name=first name="second""#;
        assert_eq!(extract(content, "name"), Some("second".to_string()));
    }

    #[test]
    fn test_extract_first_match_wins() {
        let content = r#"argument name="a" name="b""#;
        assert_eq!(extract(content, "name"), Some("a".to_string()));
    }

    #[test]
    fn test_extract_missing_key() {
        assert_eq!(extract("argument", "name"), None);
        assert_eq!(extract("argument name=", "name"), None);
        assert_eq!(extract("argument name =x", "name"), None);
    }

    #[test]
    fn test_extract_empty_quoted_value() {
        assert_eq!(extract(r#"argument name="q" default="""#, "default"), Some(String::new()));
    }

    #[test]
    fn test_extract_ignores_longer_keys() {
        assert_eq!(extract("argument username=bob", "name"), None);
    }

    #[test]
    fn test_extract_unterminated_quote_falls_back_to_token() {
        assert_eq!(extract(r#"argument name="oops"#, "name"), Some("\"oops".to_string()));
    }

    #[test]
    fn test_quoted_pairs() {
        let content = r#"date format="yyyy" offset="+1d""#;
        let pairs = quoted_pairs(content);
        assert_eq!(pairs.len(), 2);
        assert_eq!(&content[pairs[0].0..pairs[0].1], "\"yyyy\"");
        assert_eq!(&content[pairs[1].0..pairs[1].1], "\"+1d\"");
    }
}
