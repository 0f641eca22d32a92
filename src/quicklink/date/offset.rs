//! Date offsets such as `+7d`, `-1M` or `+30m`.
//!
//! Units are case-sensitive: `m` minutes, `h` hours, `d` days, `M` months,
//! `y` years. Minutes, hours and days are fixed durations. Months and years
//! are calendar arithmetic that clamps to the last day of the target month,
//! so Jan 31 `+1M` is Feb 29 in a leap year.

use chrono::{DateTime, FixedOffset, Months, TimeDelta};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl OffsetUnit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(OffsetUnit::Minutes),
            'h' => Some(OffsetUnit::Hours),
            'd' => Some(OffsetUnit::Days),
            'M' => Some(OffsetUnit::Months),
            'y' => Some(OffsetUnit::Years),
            _ => None,
        }
    }
}

/// A signed amount of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOffset {
    pub amount: i64,
    pub unit: OffsetUnit,
}

impl DateOffset {
    /// Returns `None` when the result is out of range.
    pub fn apply(&self, instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        match self.unit {
            OffsetUnit::Minutes => instant.checked_add_signed(TimeDelta::try_minutes(self.amount)?),
            OffsetUnit::Hours => instant.checked_add_signed(TimeDelta::try_hours(self.amount)?),
            OffsetUnit::Days => instant.checked_add_signed(TimeDelta::try_days(self.amount)?),
            OffsetUnit::Months => self.shift_months(instant, self.amount.unsigned_abs()),
            OffsetUnit::Years => {
                self.shift_months(instant, self.amount.unsigned_abs().checked_mul(12)?)
            }
        }
    }

    fn shift_months(
        &self,
        instant: DateTime<FixedOffset>,
        months: u64,
    ) -> Option<DateTime<FixedOffset>> {
        let months = Months::new(u32::try_from(months).ok()?);
        if self.amount < 0 {
            instant.checked_sub_months(months)
        } else {
            instant.checked_add_months(months)
        }
    }
}

/// Parses a token of the exact form `(+|-)<digits><unit>`.
pub fn parse_offset(token: &str) -> Option<DateOffset> {
    let sign = match token.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let rest = &token[1..];
    let unit_char = rest.chars().next_back()?;
    let unit = OffsetUnit::from_char(unit_char)?;
    let digits = &rest[..rest.len() - unit_char.len_utf8()];

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;

    Some(DateOffset {
        amount: sign * magnitude,
        unit,
    })
}

/// Shifts `instant` by `token`, or returns it unchanged when the token is
/// malformed or the result would be out of range.
pub fn apply_offset(instant: DateTime<FixedOffset>, token: &str) -> DateTime<FixedOffset> {
    let Some(offset) = parse_offset(token) else {
        debug!(token; "Ignoring malformed date offset");
        return instant;
    };
    offset.apply(instant).unwrap_or_else(|| {
        debug!(token; "Date offset out of range, ignoring");
        instant
    })
}
