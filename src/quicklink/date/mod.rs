//! Date, time and datetime placeholder rendering.

pub mod format;
pub mod offset;

use crate::model::DateSpec;
use chrono::{DateTime, FixedOffset};

pub use format::format_pattern;
pub use offset::{apply_offset, parse_offset, DateOffset, OffsetUnit};

/// Renders `spec` against `reference`, using `default_pattern` when the
/// placeholder has no `format`.
pub fn render(spec: &DateSpec, default_pattern: &str, reference: DateTime<FixedOffset>) -> String {
    let instant = match &spec.offset {
        Some(token) => apply_offset(reference, token),
        None => reference,
    };
    let pattern = spec.format.as_deref().unwrap_or(default_pattern);
    format_pattern(&instant, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MEDIUM_DATETIME_PATTERN, MEDIUM_DATE_PATTERN, SHORT_TIME_PATTERN};

    fn reference() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-27T00:00:00Z").unwrap()
    }

    #[test]
    fn test_default_styles() {
        let spec = DateSpec::default();
        assert_eq!(render(&spec, MEDIUM_DATE_PATTERN, reference()), "Jan 27, 2024");
        assert_eq!(render(&spec, SHORT_TIME_PATTERN, reference()), "12:00 AM");
        assert_eq!(
            render(&spec, MEDIUM_DATETIME_PATTERN, reference()),
            "Jan 27, 2024, 12:00 AM"
        );
    }

    #[test]
    fn test_format_with_offset() {
        let spec = DateSpec {
            format: Some("yyyy-MM-dd".into()),
            offset: Some("+7d".into()),
        };
        assert_eq!(render(&spec, MEDIUM_DATE_PATTERN, reference()), "2024-02-03");

        let spec = DateSpec {
            format: Some("yyyy-MM-dd".into()),
            offset: Some("-1M".into()),
        };
        assert_eq!(render(&spec, MEDIUM_DATE_PATTERN, reference()), "2023-12-27");
    }

    #[test]
    fn test_offset_without_format_uses_default() {
        let spec = DateSpec {
            format: None,
            offset: Some("+1y".into()),
        };
        assert_eq!(render(&spec, MEDIUM_DATE_PATTERN, reference()), "Jan 27, 2025");
    }
}
