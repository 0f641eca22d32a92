//! # Modifier Pipeline
//!
//! Modifiers are pure text transforms chained after a placeholder's base
//! value, applied left to right:
//!
//! ```text
//! {clipboard | trim | lowercase | percent-encode}
//! ```
//!
//! Names match case-insensitively. An unrecognized name leaves the value
//! untouched so templates written for newer vocabularies still expand.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Trim,
    Uppercase,
    Lowercase,
    PercentEncode,
    JsonStringify,
}

impl Modifier {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trim" => Some(Modifier::Trim),
            "uppercase" => Some(Modifier::Uppercase),
            "lowercase" => Some(Modifier::Lowercase),
            "percent-encode" => Some(Modifier::PercentEncode),
            "json-stringify" => Some(Modifier::JsonStringify),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Trim => "trim",
            Modifier::Uppercase => "uppercase",
            Modifier::Lowercase => "lowercase",
            Modifier::PercentEncode => "percent-encode",
            Modifier::JsonStringify => "json-stringify",
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            Modifier::Trim => value.trim().to_string(),
            Modifier::Uppercase => value.to_uppercase(),
            Modifier::Lowercase => value.to_lowercase(),
            Modifier::PercentEncode => percent_encode(value),
            Modifier::JsonStringify => json_stringify(value),
        }
    }
}

/// Runs `value` through the named modifiers in order.
pub fn apply<S: AsRef<str>>(value: &str, names: &[S]) -> String {
    names.iter().fold(value.to_string(), |acc, name| {
        match Modifier::from_name(name.as_ref()) {
            Some(modifier) => modifier.apply(&acc),
            None => {
                debug!(modifier = name.as_ref(); "Unknown modifier, skipping");
                acc
            }
        }
    })
}

/// Encodes every byte except ASCII letters, digits and `-._~`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escapes backslash, quote, newline, carriage return and tab, then wraps
/// the result in double quotes.
pub fn json_stringify(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}
