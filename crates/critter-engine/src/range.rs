//! Range expression parsing -- converts human-written month and hour ranges
//! into normalized integer sets.
//!
//! Three interval conventions coexist and are kept distinct per entry point:
//!
//! | Entry point             | End bound | Example                          |
//! |-------------------------|-----------|----------------------------------|
//! | [`parse_hour_range`]    | exclusive | `"9PM-3AM"` → `[21, 22, 23, 0, 1]` |
//! | [`parse_month_range`]   | inclusive | `"dec-feb"` → `[11, 0, 1]`         |
//! | [`parse_numeric_range`] | inclusive | `"22-4"` (mod 24) → `[22, 23, 0, 1, 2, 3, 4]` |
//!
//! Wraparound ranges are emitted in traversal order starting at the range's
//! start, not in ascending numeric order.

use crate::error::{CritterError, Result};

/// Hours of the day, each in `0..24`.
pub type HourSet = Vec<u8>;

/// Calendar months, each in `0..12` (January is 0).
pub type MonthSet = Vec<u8>;

/// Number of hour positions in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Three-letter month keys, indexed by month (`jan` = 0 ... `dec` = 11).
pub const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Every hour of the day in ascending order.
pub const ALL_HOURS: [u8; 24] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];

/// Every month of the year in ascending order.
pub const ALL_MONTHS: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

const ALL: &str = "all";
const ALL_EXCEPT_PREFIX: &str = "all except ";

/// Reduce a month token to its lookup key: trimmed, lowercased, first 3 chars.
fn month_key(token: &str) -> String {
    token.trim().to_lowercase().chars().take(3).collect()
}

/// Look up a month name ("Sept", "february", "DEC") by its 3-letter key.
///
/// # Errors
/// Returns `CritterError::UnknownMonth` if the key is not one of [`MONTHS`].
pub fn month_index(token: &str) -> Result<u8> {
    let key = month_key(token);
    MONTHS
        .iter()
        .position(|m| *m == key)
        .map(|i| i as u8)
        .ok_or(CritterError::UnknownMonth(key))
}

/// Split `expr` on `-` into exactly two trimmed halves.
fn split_pair(expr: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = expr.split('-').collect();
    match parts.as_slice() {
        [start, end] => Ok((start.trim(), end.trim())),
        _ => Err(CritterError::InvalidFormat(format!(
            "range '{}' must be two values separated by a '-'",
            expr.trim()
        ))),
    }
}

/// Enumerate the closed interval `[min, max]` modulo `modulus`, wrapping when
/// `max < min`.
fn closed_range(min: u8, max: u8, modulus: u8) -> Vec<u8> {
    let min = u16::from(min);
    let modulus = u16::from(modulus);
    let mut max = u16::from(max);
    if max < min {
        max += modulus;
    }
    (min..=max).map(|v| (v % modulus) as u8).collect()
}

/// Enumerate the half-open hour interval `[start, end)`, crossing midnight
/// when `end < start`.
fn half_open_hours(start: u8, end: u8) -> impl Iterator<Item = u8> {
    if end >= start {
        (start..end).chain(0..0)
    } else {
        (start..HOURS_PER_DAY).chain(0..end)
    }
}

/// Parse a single `am`/`pm` time token into an hour of the day.
///
/// `12am` is hour 0 and `12pm` is hour 12; any other `<N>am` is `N` and
/// `<N>pm` is `N + 12`, taken mod 24.
///
/// # Errors
/// Returns `CritterError::InvalidFormat` if the token lacks an `am`/`pm`
/// suffix or its leading part is not a number.
pub fn parse_time_token(token: &str) -> Result<u8> {
    let token = token.trim().to_lowercase();
    let (digits, pm) = if let Some(digits) = token.strip_suffix("am") {
        (digits, false)
    } else if let Some(digits) = token.strip_suffix("pm") {
        (digits, true)
    } else {
        return Err(CritterError::InvalidFormat(format!(
            "time '{}' must end with 'am' or 'pm'",
            token
        )));
    };

    let digits = digits.trim();
    let not_a_number = || {
        CritterError::InvalidFormat(format!("hour '{}' in '{}' is not a number", digits, token))
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    let hour: u64 = digits.parse().map_err(|_| not_a_number())?;

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h % 24,
        (h, true) => (h % 24 + 12) % 24,
    };
    Ok(hour as u8)
}

/// Parse a free-text hour expression such as `"9PM-3AM"`, `"all"`, or
/// `"10PM-2AM, 8AM-10AM"`.
///
/// Each comma-separated sub-range is half-open: `"9AM-5PM"` covers hours
/// 9 through 16. Sub-ranges are concatenated in order and are not
/// deduplicated against each other, so overlapping sub-ranges repeat hours.
/// An empty expression yields an empty set.
///
/// # Errors
/// Returns `CritterError::InvalidFormat` if any sub-range is not exactly two
/// `-`-separated time tokens, or a token fails [`parse_time_token`].
pub fn parse_hour_range(expr: &str) -> Result<HourSet> {
    let expr = expr.trim().to_lowercase();
    if expr == ALL {
        return Ok(ALL_HOURS.to_vec());
    }
    if expr.is_empty() {
        return Ok(Vec::new());
    }

    let mut hours = Vec::new();
    for part in expr.split(',') {
        let (start, end) = split_pair(part)?;
        let start = parse_time_token(start)?;
        let end = parse_time_token(end)?;
        hours.extend(half_open_hours(start, end));
    }

    let mut seen = [false; HOURS_PER_DAY as usize];
    let repeated = hours
        .iter()
        .filter(|&&h| std::mem::replace(&mut seen[h as usize], true))
        .count();
    if repeated > 0 {
        tracing::debug!(expr = %expr, repeated, "hour sub-ranges overlap");
    }

    Ok(hours)
}

/// Parse a free-text month expression.
///
/// Accepted shapes, checked in this order:
///
/// - `"all"` → every month, ascending.
/// - `"all except July, August"` → the complement of the listed months, ascending.
/// - `"jan, mar, May"` → the listed months in the given order (repeats kept).
/// - `"March-September"`, `"dec-February"` → closed interval, wrapping past December.
/// - `"June"` → a single month.
///
/// Month names match on their first three letters, case-insensitively.
/// An empty expression yields an empty set.
///
/// # Errors
/// Returns `CritterError::UnknownMonth` if any month name is unrecognized, and
/// `CritterError::InvalidFormat` if a range has more than one `-` or a comma
/// list item is itself a range.
pub fn parse_month_range(expr: &str) -> Result<MonthSet> {
    let expr = expr.trim().to_lowercase();
    if expr == ALL {
        return Ok(ALL_MONTHS.to_vec());
    }
    if expr.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(rest) = expr.strip_prefix(ALL_EXCEPT_PREFIX) {
        let names = list_tokens(rest);
        for name in &names {
            list_month(name)?;
        }
        return Ok(complement_months(&names));
    }

    if expr.contains(',') {
        return list_tokens(&expr).into_iter().map(list_month).collect();
    }

    if expr.contains('-') {
        let (start, end) = split_pair(&expr)?;
        let start = month_index(start)?;
        let end = month_index(end)?;
        return Ok(closed_range(start, end, MONTHS_PER_YEAR));
    }

    month_index(&expr).map(|m| vec![m])
}

/// A month named inside a comma list. Ranges are not allowed there.
fn list_month(token: &str) -> Result<u8> {
    if token.contains('-') {
        return Err(CritterError::InvalidFormat(format!(
            "'{}' in a month list must be a single month, not a range",
            token
        )));
    }
    month_index(token)
}

/// Comma-separated tokens, trimmed, with empty tokens from stray commas dropped.
fn list_tokens(expr: &str) -> Vec<&str> {
    expr.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Every month not named in `named_months`, in ascending order.
///
/// Names are matched on their lowercased first three letters; names that
/// match no month exclude nothing.
pub fn complement_months<S: AsRef<str>>(named_months: &[S]) -> MonthSet {
    let mut included = [true; MONTHS_PER_YEAR as usize];
    for name in named_months {
        let key = month_key(name.as_ref());
        if let Some(i) = MONTHS.iter().position(|m| *m == key) {
            included[i] = false;
        }
    }

    included
        .iter()
        .enumerate()
        .filter(|(_, &keep)| keep)
        .map(|(i, _)| i as u8)
        .collect()
}

/// Parse a plain `<int>-<int>` range modulo `modulus`.
///
/// Unlike [`parse_hour_range`], the end bound is inclusive: `"4-20"` mod 24
/// yields 4 through 20. When `max < min` the range wraps, so `"22-4"` yields
/// `[22, 23, 0, 1, 2, 3, 4]`.
///
/// # Errors
/// Returns `CritterError::InvalidFormat` if the expression is not exactly two
/// `-`-separated integers, if either bound is not below `modulus`, or if
/// `modulus` is zero.
pub fn parse_numeric_range(expr: &str, modulus: u8) -> Result<Vec<u8>> {
    if modulus == 0 {
        return Err(CritterError::InvalidFormat(
            "modulus must be greater than zero".to_string(),
        ));
    }

    let (min, max) = split_pair(expr)?;
    let bound = |token: &str, which: &str| -> Result<u8> {
        let value: u8 = token.parse().map_err(|_| {
            CritterError::InvalidFormat(format!("{} '{}' in range was not an int", which, token))
        })?;
        if value >= modulus {
            return Err(CritterError::InvalidFormat(format!(
                "{} {} in range is not below {}",
                which, value, modulus
            )));
        }
        Ok(value)
    };

    let min = bound(min, "min")?;
    let max = bound(max, "max")?;
    Ok(closed_range(min, max, modulus))
}
