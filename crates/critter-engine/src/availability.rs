//! Hour-of-day availability windows.
//!
//! Given the set of hours a critter can be found and the current local hour,
//! computes whether it is available now and, scanning forward around the
//! clock, when it next appears or disappears.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range::HOURS_PER_DAY;

/// Membership lookup over the 24 hours of a day, derived from an hour set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HourMask([bool; HOURS_PER_DAY as usize]);

impl HourMask {
    /// Build a mask from hour indices. Repeats collapse; values outside
    /// `0..24` are ignored.
    pub fn from_hours(hours: &[u8]) -> Self {
        let mut mask = [false; HOURS_PER_DAY as usize];
        for &h in hours.iter().filter(|&&h| h < HOURS_PER_DAY) {
            mask[h as usize] = true;
        }
        Self(mask)
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.0[(hour % HOURS_PER_DAY) as usize]
    }

    /// Number of distinct hours in the mask.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_all_day(&self) -> bool {
        self.len() == HOURS_PER_DAY as usize
    }

    /// First hour at or after `from`, wrapping past midnight, whose membership
    /// equals `wanted`.
    fn scan_from(&self, from: u8, wanted: bool) -> Option<u8> {
        (0..HOURS_PER_DAY)
            .map(|step| (from + step) % HOURS_PER_DAY)
            .find(|&h| self.contains(h) == wanted)
    }
}

/// Availability of a critter at a given hour.
///
/// `available_at` is only meaningful when `available_now` is false, and
/// `available_until` only when it is true. Both stay 0 when
/// `available_all_day` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub available_now: bool,
    pub available_all_day: bool,
    /// Next hour the critter appears.
    pub available_at: u8,
    /// Hour the critter disappears.
    pub available_until: u8,
    pub current_hour: u8,
}

impl AvailabilityRecord {
    /// [`available_at`](Self::available_at) as a clock label, e.g. `"9AM"`.
    pub fn display_at(&self) -> String {
        format_hour_label(self.available_at)
    }

    /// [`available_until`](Self::available_until) as a clock label, e.g. `"5PM"`.
    pub fn display_until(&self) -> String {
        format_hour_label(self.available_until)
    }
}

impl fmt::Display for AvailabilityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.available_all_day {
            write!(f, "Available all day")
        } else if self.available_now {
            write!(f, "Available now until {}", self.display_until())
        } else {
            write!(f, "Available starting at {}", self.display_at())
        }
    }
}

/// Compute availability for `current_hour` (taken mod 24).
///
/// A mask covering all 24 hours is available all day. Otherwise, when the
/// current hour is in the mask, `available_until` is the first following hour
/// that is not; when it is not, `available_at` is the first following hour
/// that is. An empty mask leaves `available_at` at 0.
pub fn compute_availability(hours: &HourMask, current_hour: u8) -> AvailabilityRecord {
    let current_hour = current_hour % HOURS_PER_DAY;

    if hours.is_all_day() {
        return AvailabilityRecord {
            available_now: true,
            available_all_day: true,
            current_hour,
            ..Default::default()
        };
    }

    let available_now = hours.contains(current_hour);
    let mut record = AvailabilityRecord {
        available_now,
        current_hour,
        ..Default::default()
    };

    if available_now {
        // Cannot miss: the mask is not all day.
        record.available_until = hours.scan_from(current_hour, false).unwrap_or(0);
    } else {
        record.available_at = hours.scan_from(current_hour, true).unwrap_or(0);
    }

    record
}

/// Render an hour of the day as a 12-hour clock label.
///
/// `0` → `"12AM"`, `12` → `"12PM"`, `13` → `"1PM"`, `9` → `"9AM"`.
pub fn format_hour_label(hour: u8) -> String {
    match hour {
        0 => "12AM".to_string(),
        12 => "12PM".to_string(),
        h if h > 12 => format!("{}PM", h - 12),
        h => format!("{}AM", h),
    }
}
