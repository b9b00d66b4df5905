//! Critter record kinds and the shared schedule capability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::availability::{compute_availability, AvailabilityRecord, HourMask};
use crate::error::CritterError;
use crate::range::{HourSet, MonthSet};

/// Anything with a name, a price, and the hours/months it can be found.
///
/// Implementors only expose their raw data; the derived lookups are
/// provided.
pub trait Schedule {
    fn name(&self) -> &str;
    fn price(&self) -> u32;
    fn hours(&self) -> &[u8];
    fn months(&self) -> &[u8];

    /// Membership lookup over [`hours`](Schedule::hours).
    fn hour_mask(&self) -> HourMask {
        HourMask::from_hours(self.hours())
    }

    /// Whether the critter can be found during `month` (0-based).
    fn in_season(&self, month: u8) -> bool {
        self.months().contains(&month)
    }

    fn availability(&self, current_hour: u8) -> AvailabilityRecord {
        compute_availability(&self.hour_mask(), current_hour)
    }
}

/// A catchable bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub name: String,
    /// Sell price in bells.
    pub price: u32,
    /// Months in season, January = 0.
    pub months: MonthSet,
    /// Hours of the day it appears.
    pub hours: HourSet,
    /// Where it is found (e.g., "Flying", "On trees").
    pub location: String,
}

/// A fish, identified in the field by its shadow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    pub name: String,
    /// Sell price in bells.
    pub price: u32,
    /// Months in season, January = 0.
    pub months: MonthSet,
    /// Hours of the day it appears.
    pub hours: HourSet,
    /// Where it is found (e.g., "River", "Sea").
    pub location: String,
    /// Shadow size as written in the source data. Empty when unknown.
    #[serde(default)]
    pub shadow_size: String,
}

/// A diving catch. These have no location column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaCreature {
    pub name: String,
    /// Sell price in bells.
    pub price: u32,
    /// Months in season, January = 0.
    pub months: MonthSet,
    /// Hours of the day it appears.
    pub hours: HourSet,
}

macro_rules! impl_schedule {
    ($($kind:ty),*) => {$(
        impl Schedule for $kind {
            fn name(&self) -> &str {
                &self.name
            }

            fn price(&self) -> u32 {
                self.price
            }

            fn hours(&self) -> &[u8] {
                &self.hours
            }

            fn months(&self) -> &[u8] {
                &self.months
            }
        }
    )*};
}

impl_schedule!(Bug, Fish, SeaCreature);

/// Which catalog section a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritterKind {
    Bug,
    Fish,
    SeaCreature,
}

impl FromStr for CritterKind {
    type Err = CritterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bug" | "bugs" => Ok(CritterKind::Bug),
            "fish" | "fishes" => Ok(CritterKind::Fish),
            "sea" | "sea-creature" | "sea_creature" | "sea creature" => {
                Ok(CritterKind::SeaCreature)
            }
            other => Err(CritterError::InvalidFormat(format!(
                "unknown critter kind '{}' (expected bug, fish, or sea)",
                other
            ))),
        }
    }
}

impl fmt::Display for CritterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CritterKind::Bug => "bug",
            CritterKind::Fish => "fish",
            CritterKind::SeaCreature => "sea creature",
        };
        f.write_str(name)
    }
}

/// A record of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Critter {
    Bug(Bug),
    Fish(Fish),
    SeaCreature(SeaCreature),
}

impl Critter {
    pub fn kind(&self) -> CritterKind {
        match self {
            Critter::Bug(_) => CritterKind::Bug,
            Critter::Fish(_) => CritterKind::Fish,
            Critter::SeaCreature(_) => CritterKind::SeaCreature,
        }
    }

    /// The record as a [`Schedule`], whatever its kind.
    pub fn schedule(&self) -> &dyn Schedule {
        match self {
            Critter::Bug(b) => b,
            Critter::Fish(f) => f,
            Critter::SeaCreature(s) => s,
        }
    }
}
