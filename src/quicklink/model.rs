use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A `{...}` occurrence in a template.
///
/// `start` and `end` are byte offsets into the template; `end` is exclusive
/// and points just past the closing brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpan {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl PlaceholderSpan {
    /// The placeholder exactly as it appears in the template.
    pub fn source_text(&self) -> String {
        format!("{{{}}}", self.content)
    }
}

/// One entry of an `options="..."` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub value: String,
}

impl OptionItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The `format`/`offset` attributes shared by `date`, `time` and `datetime`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSpec {
    pub format: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    Argument {
        name: String,
        default: Option<String>,
        options: Option<Vec<OptionItem>>,
    },
    Clipboard,
    Selection,
    Date(DateSpec),
    Time(DateSpec),
    DateTime(DateSpec),
    Unknown {
        raw: String,
    },
}

impl PlaceholderKind {
    /// Date, time and datetime all resolve against the reference instant.
    pub fn date_spec(&self) -> Option<&DateSpec> {
        match self {
            PlaceholderKind::Date(spec)
            | PlaceholderKind::Time(spec)
            | PlaceholderKind::DateTime(spec) => Some(spec),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlaceholder {
    pub kind: PlaceholderKind,
    /// Modifier names as written; matching is case-insensitive.
    pub modifiers: Vec<String>,
}

impl ParsedPlaceholder {
    /// An argument is required exactly when it declares no default.
    pub fn is_required(&self) -> bool {
        matches!(self.kind, PlaceholderKind::Argument { default: None, .. })
    }
}

/// Patterns used for `date`, `time` and `datetime` when no `format` is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStyles {
    pub date: String,
    pub time: String,
    pub datetime: String,
}

pub const MEDIUM_DATE_PATTERN: &str = "MMM d, yyyy";
pub const SHORT_TIME_PATTERN: &str = "h:mm a";
pub const MEDIUM_DATETIME_PATTERN: &str = "MMM d, yyyy, h:mm a";

impl Default for DateStyles {
    fn default() -> Self {
        Self {
            date: MEDIUM_DATE_PATTERN.to_string(),
            time: SHORT_TIME_PATTERN.to_string(),
            datetime: MEDIUM_DATETIME_PATTERN.to_string(),
        }
    }
}

/// Everything a template can be resolved against.
///
/// The clipboard, selection and clock are read by the caller; the resolver
/// only ever sees these plain values.
#[derive(Debug, Clone)]
pub struct ResolutionInputs {
    pub arguments: HashMap<String, String>,
    pub clipboard: Option<String>,
    pub selection: Option<String>,
    pub reference: DateTime<FixedOffset>,
    pub styles: DateStyles,
}

impl ResolutionInputs {
    pub fn new(reference: DateTime<FixedOffset>) -> Self {
        Self {
            arguments: HashMap::new(),
            clipboard: None,
            selection: None,
            reference,
            styles: DateStyles::default(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_arguments(mut self, arguments: HashMap<String, String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Option<String>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_selection(mut self, selection: Option<String>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_styles(mut self, styles: DateStyles) -> Self {
        self.styles = styles;
        self
    }
}

/// What became of a single placeholder during processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Resolved(String),
    /// Left as written: unknown kinds, or clipboard/selection with no input.
    Passthrough,
    MissingArgument(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub url: String,
    pub missing_arguments: Vec<String>,
    pub errors: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentInfo {
    pub name: String,
    pub default: Option<String>,
    pub options: Option<Vec<OptionItem>>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub arguments: Vec<ArgumentInfo>,
    pub uses_clipboard: bool,
    pub uses_selection: bool,
    pub uses_date: bool,
    pub date_formats: Vec<String>,
}

impl TemplateInfo {
    pub fn required_arguments(&self) -> impl Iterator<Item = &ArgumentInfo> {
        self.arguments.iter().filter(|arg| arg.required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_wraps_content_in_braces() {
        let span = PlaceholderSpan {
            start: 0,
            end: 11,
            content: "clipboard".to_string(),
        };
        assert_eq!(span.source_text(), "{clipboard}");
    }

    #[test]
    fn test_required_only_without_default() {
        let required = ParsedPlaceholder {
            kind: PlaceholderKind::Argument {
                name: "q".into(),
                default: None,
                options: None,
            },
            modifiers: vec![],
        };
        let optional = ParsedPlaceholder {
            kind: PlaceholderKind::Argument {
                name: "q".into(),
                default: Some("".into()),
                options: None,
            },
            modifiers: vec![],
        };
        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn test_validation_result_from_errors() {
        assert!(ValidationResult::from_errors(vec![]).is_valid);
        assert!(!ValidationResult::from_errors(vec!["x".into()]).is_valid);
    }
}
