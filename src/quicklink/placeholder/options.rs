use crate::model::OptionItem;

/// Parses an `options` attribute value.
///
/// Entries are comma separated. `Label|value` splits on the first `|` only,
/// so the value may contain further pipes; a bare entry is its own label.
/// Empty entries are skipped, order and duplicates are kept.
pub fn parse_options(value: &str) -> Vec<OptionItem> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('|') {
            Some((label, value)) => OptionItem::new(label.trim(), value.trim()),
            None => OptionItem::new(part, part),
        })
        .collect()
}
