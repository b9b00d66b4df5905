//! # critter-engine
//!
//! Parses the human-written availability ranges of seasonal critters
//! ("March-September", "All except July, August", "9PM-3AM, 8AM-10AM") into
//! normalized month and hour index sets, and answers "is it out now, and if
//! not, when?" for any hour of the day.
//!
//! ## Quick start
//!
//! ```rust
//! use critter_engine::{compute_availability, parse_hour_range, parse_month_range, HourMask};
//!
//! assert_eq!(parse_month_range("dec-February").unwrap(), vec![11, 0, 1]);
//!
//! let hours = parse_hour_range("9PM-3AM").unwrap();
//! assert_eq!(hours, vec![21, 22, 23, 0, 1]);
//!
//! let record = compute_availability(&HourMask::from_hours(&hours), 23);
//! assert!(record.available_now);
//! assert_eq!(record.to_string(), "Available now until 2AM");
//! ```
//!
//! ## Modules
//!
//! - [`range`] — month/hour/numeric range expressions → integer sets
//! - [`availability`] — hour mask + current hour → availability record
//! - [`critter`] — record kinds and the [`Schedule`] trait
//! - [`catalog`] — the persisted catalog and per-month snapshots
//! - [`entry`] — raw row strings → typed records
//! - [`clock`] — current month/hour in an IANA time zone
//! - [`error`] — Error types

pub mod availability;
pub mod catalog;
pub mod clock;
pub mod critter;
pub mod entry;
pub mod error;
pub mod range;

pub use availability::{compute_availability, format_hour_label, AvailabilityRecord, HourMask};
pub use catalog::{Catalog, Listing, Snapshot};
pub use clock::{local_now, LocalTime, DEFAULT_TIMEZONE};
pub use critter::{Bug, Critter, CritterKind, Fish, Schedule, SeaCreature};
pub use entry::RawEntry;
pub use error::CritterError;
pub use range::{
    complement_months, month_index, parse_hour_range, parse_month_range, parse_numeric_range,
    parse_time_token, HourSet, MonthSet,
};
