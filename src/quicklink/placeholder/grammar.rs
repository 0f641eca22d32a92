use super::attributes::extract;
use super::options::parse_options;
use crate::error::PlaceholderError;
use crate::model::{DateSpec, ParsedPlaceholder, PlaceholderKind};
use log::trace;

/// Parses the text between a placeholder's braces.
///
/// Only an `argument` without a usable `name` is an error. Anything that is
/// not a known keyword parses as [`PlaceholderKind::Unknown`].
pub fn parse(content: &str) -> Result<ParsedPlaceholder, PlaceholderError> {
    let mut segments = split_segments(content).into_iter();
    let base = segments.next().unwrap_or_default();
    let modifiers: Vec<String> = segments.filter(|s| !s.is_empty()).collect();

    let kind = parse_base(&base, content)?;
    trace!(content, kind:?, modifiers:?; "Parsed placeholder");

    Ok(ParsedPlaceholder { kind, modifiers })
}

fn parse_base(base: &str, content: &str) -> Result<PlaceholderKind, PlaceholderError> {
    let kind = if base == "clipboard" {
        PlaceholderKind::Clipboard
    } else if base == "selection" {
        PlaceholderKind::Selection
    } else if let Some(attrs) = keyword(base, "time") {
        PlaceholderKind::Time(date_spec(attrs))
    } else if let Some(attrs) = keyword(base, "datetime") {
        PlaceholderKind::DateTime(date_spec(attrs))
    } else if base.starts_with("argument") {
        let name = extract(base, "name")
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PlaceholderError::MissingName(content.to_string()))?;
        PlaceholderKind::Argument {
            name,
            default: extract(base, "default"),
            options: extract(base, "options").map(|o| parse_options(&o)),
        }
    } else if let Some(attrs) = keyword(base, "date") {
        PlaceholderKind::Date(date_spec(attrs))
    } else {
        PlaceholderKind::Unknown {
            raw: base.to_string(),
        }
    };
    Ok(kind)
}

/// Matches `word` alone or followed by whitespace, returning the rest.
fn keyword<'a>(base: &'a str, word: &str) -> Option<&'a str> {
    let rest = base.strip_prefix(word)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

fn date_spec(attrs: &str) -> DateSpec {
    DateSpec {
        format: extract(attrs, "format"),
        offset: extract(attrs, "offset"),
    }
}

/// Splits on `|` outside double quotes, trimming every segment.
///
/// `\|` outside quotes is a literal pipe.
fn split_segments(content: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\\' if !in_quotes && chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' if !in_quotes => {
                segments.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    segments.push(current.trim().to_string());

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionItem;

    fn kind(content: &str) -> PlaceholderKind {
        parse(content).unwrap().kind
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(kind("clipboard"), PlaceholderKind::Clipboard);
        assert_eq!(kind("selection"), PlaceholderKind::Selection);
        assert_eq!(kind("time"), PlaceholderKind::Time(DateSpec::default()));
        assert_eq!(kind("datetime"), PlaceholderKind::DateTime(DateSpec::default()));
        assert_eq!(kind("date"), PlaceholderKind::Date(DateSpec::default()));
        assert_eq!(kind(" clipboard "), PlaceholderKind::Clipboard);
    }

    #[test]
    fn test_parse_date_attributes() {
        assert_eq!(
            kind(r#"date format="yyyy-MM-dd" offset="+7d""#),
            PlaceholderKind::Date(DateSpec {
                format: Some("yyyy-MM-dd".into()),
                offset: Some("+7d".into()),
            })
        );
        assert_eq!(
            kind(r#"time format="HH:mm""#),
            PlaceholderKind::Time(DateSpec {
                format: Some("HH:mm".into()),
                offset: None,
            })
        );
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        assert_eq!(
            kind("dates"),
            PlaceholderKind::Unknown {
                raw: "dates".into()
            }
        );
        assert_eq!(
            kind("clipboards"),
            PlaceholderKind::Unknown {
                raw: "clipboards".into()
            }
        );
    }

    #[test]
    fn test_parse_argument() {
        assert_eq!(
            kind(r#"argument name="q" default="rust" options="Rust|rust, go""#),
            PlaceholderKind::Argument {
                name: "q".into(),
                default: Some("rust".into()),
                options: Some(vec![OptionItem::new("Rust", "rust"), OptionItem::new("go", "go")]),
            }
        );
    }

    #[test]
    fn test_argument_without_name_is_an_error() {
        assert_eq!(
            parse(r#"argument default="x""#),
            Err(PlaceholderError::MissingName(r#"argument default="x""#.into()))
        );
        assert!(parse(r#"argument name="""#).is_err());
    }

    #[test]
    fn test_modifiers_in_order() {
        let parsed = parse("clipboard | trim | LowerCase || percent-encode ").unwrap();
        assert_eq!(parsed.kind, PlaceholderKind::Clipboard);
        assert_eq!(parsed.modifiers, vec!["trim", "LowerCase", "percent-encode"]);
    }

    #[test]
    fn test_pipes_inside_quotes_do_not_split() {
        let parsed = parse(r#"argument name="x" options="A|a, B|b" | uppercase"#).unwrap();
        assert_eq!(parsed.modifiers, vec!["uppercase"]);
        match parsed.kind {
            PlaceholderKind::Argument { options, .. } => assert_eq!(options.unwrap().len(), 2),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_escaped_pipe_is_literal() {
        let parsed = parse(r"foo\|bar | trim").unwrap();
        assert_eq!(parsed.kind, PlaceholderKind::Unknown { raw: "foo|bar".into() });
        assert_eq!(parsed.modifiers, vec!["trim"]);
    }

    #[test]
    fn test_unknown_keeps_base() {
        assert_eq!(
            kind("{clipboard"),
            PlaceholderKind::Unknown {
                raw: "{clipboard".into()
            }
        );
    }
}
