//! Tests for reducing instants to local month/hour indices.

use chrono::{TimeZone, Utc};
use critter_engine::clock::{local_at, local_now, parse_timezone, LocalTime, DEFAULT_TIMEZONE};
use critter_engine::error::CritterError;

#[test]
fn utc_instant_in_los_angeles_winter() {
    // 2026-01-01 06:00 UTC is 2025-12-31 22:00 PST (UTC-8).
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 6, 0, 0).unwrap();
    let local = local_at(at, "America/Los_Angeles").unwrap();
    assert_eq!(local, LocalTime { month: 11, hour: 22 });
}

#[test]
fn utc_instant_in_los_angeles_summer() {
    // 2026-07-15 20:00 UTC is 13:00 PDT (UTC-7).
    let at = Utc.with_ymd_and_hms(2026, 7, 15, 20, 0, 0).unwrap();
    let local = local_at(at, "America/Los_Angeles").unwrap();
    assert_eq!(local, LocalTime { month: 6, hour: 13 });
}

#[test]
fn utc_zone_is_identity() {
    let at = Utc.with_ymd_and_hms(2026, 3, 9, 0, 30, 0).unwrap();
    assert_eq!(local_at(at, "UTC").unwrap(), LocalTime { month: 2, hour: 0 });
    assert_eq!(LocalTime::from_datetime(&at), LocalTime { month: 2, hour: 0 });
}

#[test]
fn default_timezone_is_valid() {
    assert!(parse_timezone(DEFAULT_TIMEZONE).is_ok());
    let now = local_now(DEFAULT_TIMEZONE).unwrap();
    assert!(now.month < 12);
    assert!(now.hour < 24);
}

#[test]
fn unknown_timezone_is_invalid_timezone() {
    let err = local_now("Mars/Olympus_Mons").unwrap_err();
    assert!(matches!(err, CritterError::InvalidTimezone(_)), "got {:?}", err);
}
