use crate::commands::CmdMessage;
use crate::error::PlaceholderError;
use crate::model::ValidationResult;
use crate::placeholder::attributes::quoted_pairs;
use crate::placeholder::{parse, scan};

/// Checks brace balance and the shape of every placeholder.
///
/// Positions are character offsets into the template. Unknown placeholder
/// kinds and unknown modifiers are accepted.
pub fn run(template: &str) -> ValidationResult {
    let mut errors = check_braces(template);

    for span in scan(template) {
        let position = template[..span.start].chars().count();
        for problem in check_placeholder(&span.content) {
            errors.push(format!("position {}: {}", position, problem));
        }
    }

    ValidationResult::from_errors(errors)
}

fn check_braces(template: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let mut open = Vec::new();

    for (position, c) in template.chars().enumerate() {
        match c {
            '{' => open.push(position),
            '}' => {
                if open.pop().is_none() {
                    errors.push(format!("unexpected closing brace at position {}", position));
                }
            }
            _ => {}
        }
    }

    if let Some(position) = open.last() {
        errors.push(format!("unclosed placeholder starting at position {}", position));
    }

    errors
}

fn check_placeholder(content: &str) -> Vec<PlaceholderError> {
    let mut problems = Vec::new();

    if has_stray_quote(content) {
        problems.push(PlaceholderError::UnterminatedQuote(content.to_string()));
    }
    if let Err(e) = parse(content) {
        problems.push(e);
    }

    problems
}

/// True when a `"` remains after removing every `key="..."` pair.
/// Backslash-escaped quotes are ignored.
fn has_stray_quote(content: &str) -> bool {
    let pairs = quoted_pairs(content);
    let mut prev = None;

    for (i, c) in content.char_indices() {
        let inside_pair = pairs.iter().any(|&(start, end)| i >= start && i < end);
        if c == '"' && !inside_pair && prev != Some('\\') {
            return true;
        }
        prev = Some(c);
    }

    false
}

pub fn messages(result: &ValidationResult) -> Vec<CmdMessage> {
    if result.is_valid {
        return vec![CmdMessage::success("Template is valid")];
    }
    result
        .errors
        .iter()
        .map(|e| CmdMessage::error(e.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_template_is_valid() {
        let result = run("a{b}c");
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unclosed_brace() {
        let result = run("a{b");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["unclosed placeholder starting at position 1"]);
    }

    #[test]
    fn test_unexpected_closing_brace() {
        let result = run("a}b");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["unexpected closing brace at position 1"]);
    }

    #[test]
    fn test_brace_scan_continues_after_error() {
        let result = run("}{a}}{");
        assert_eq!(
            result.errors,
            vec![
                "unexpected closing brace at position 0",
                "unexpected closing brace at position 4",
                "unclosed placeholder starting at position 5",
            ]
        );
    }

    #[test]
    fn test_unclosed_reports_most_recent_open_brace() {
        let result = run("{a {b");
        assert_eq!(result.errors, vec!["unclosed placeholder starting at position 3"]);
    }

    #[test]
    fn test_positions_count_characters() {
        let result = run("é}");
        assert_eq!(result.errors, vec!["unexpected closing brace at position 1"]);
    }

    #[test]
    fn test_nested_braces_are_balanced() {
        assert!(run("{{clipboard}}").is_valid);
    }

    #[test]
    fn test_argument_without_name() {
        let result = run(r#"q={argument default="x"}"#);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("position 2:"));
        assert!(result.errors[0].contains("missing a name"));
    }

    #[test]
    fn test_stray_quote() {
        let result = run(r#"{argument name="q" "oops}"#);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("unbalanced quote"));

        let result = run(r#"{argument name="q}"#);
        assert!(result.errors.iter().any(|e| e.contains("unbalanced quote")));
    }

    #[test]
    fn test_escaped_quote_is_allowed() {
        assert!(run(r#"{search \"x\"}"#).is_valid);
    }

    #[test]
    fn test_well_formed_placeholders() {
        let template = r#"https://x.com/{argument name="q" default="a b" options="A|a, B|b" | trim}/{date format="yyyy-MM-dd" offset="+1d"}/{clipboard | shout}"#;
        let result = run(template);
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn test_unknown_kinds_and_modifiers_accepted() {
        assert!(run("{whatever | frobnicate}").is_valid);
    }

    #[test]
    fn test_messages() {
        assert_eq!(messages(&run("ok"))[0].content, "Template is valid");
        assert_eq!(messages(&run("{a}}{")).len(), 2);
    }
}
