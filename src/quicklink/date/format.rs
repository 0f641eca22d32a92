//! Renders Unicode date-format patterns (`yyyy-MM-dd`, `EEEE 'at' HH:mm`)
//! with chrono.
//!
//! Runs of the same letter form a field. Text inside single quotes is
//! literal and `''` is an apostrophe. Other non-letters are copied as-is.
//! Letters with no supported meaning are echoed unchanged.

use chrono::{DateTime, FixedOffset, Timelike};
use log::debug;

pub fn format_pattern(instant: &DateTime<FixedOffset>, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            i = push_quoted(&chars, i, &mut out);
            continue;
        }

        if c.is_ascii_alphabetic() {
            let run = chars[i..].iter().take_while(|&&other| other == c).count();
            match field(instant, c, run) {
                Some(text) => out.push_str(&text),
                None => {
                    debug!(letter:? = c, run; "Unsupported date field, echoing as-is");
                    out.extend(std::iter::repeat(c).take(run));
                }
            }
            i += run;
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Copies the quoted literal starting at `chars[start]` and returns the
/// index after it. An unterminated quote runs to the end of the pattern.
fn push_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    if chars.get(start + 1) == Some(&'\'') {
        out.push('\'');
        return start + 2;
    }

    let mut i = start + 1;
    while i < chars.len() {
        if chars[i] == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            return i + 1;
        }
        out.push(chars[i]);
        i += 1;
    }
    i
}

fn field(instant: &DateTime<FixedOffset>, letter: char, count: usize) -> Option<String> {
    let spec = match (letter, count) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M' | 'L', 1) => "%-m",
        ('M' | 'L', 2) => "%m",
        ('M' | 'L', 3) => "%b",
        ('M' | 'L', 4) => "%B",
        ('M' | 'L', _) => return Some(first_char(instant, "%B")),
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', 1) => "%-j",
        ('D', _) => "%j",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('E', _) => return Some(first_char(instant, "%A")),
        ('a', _) => "%p",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('k', _) => {
            let hour = if instant.hour() == 0 { 24 } else { instant.hour() };
            return Some(pad(hour, count));
        }
        ('K', _) => return Some(pad(instant.hour() % 12, count)),
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', _) => return Some(fraction(instant, count)),
        ('Z', 1..=3) => "%z",
        ('Z', 4) => "GMT%:z",
        ('Z', _) => "%:z",
        ('z', _) => "%Z",
        ('X', _) if instant.offset().local_minus_utc() == 0 => return Some("Z".to_string()),
        ('x' | 'X', 1 | 2 | 4) => "%z",
        ('x' | 'X', _) => "%:z",
        _ => return None,
    };
    Some(instant.format(spec).to_string())
}

fn first_char(instant: &DateTime<FixedOffset>, spec: &str) -> String {
    instant.format(spec).to_string().chars().take(1).collect()
}

fn pad(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width.min(2))
}

/// Fractional seconds truncated to `digits` places.
fn fraction(instant: &DateTime<FixedOffset>, digits: usize) -> String {
    let nanos = format!("{:09}", instant.nanosecond() % 1_000_000_000);
    let mut out: String = nanos.chars().take(digits).collect();
    while out.len() < digits {
        out.push('0');
    }
    out
}
