//! The persisted critter catalog and the seasonal snapshot computed from it.
//!
//! A catalog is a JSON document with one list per critter kind:
//!
//! ```json
//! {"bugs": [...], "fishes": [...], "sea_creatures": [...]}
//! ```
//!
//! Month and hour sets are stored as plain integer arrays. A [`Snapshot`]
//! is what a page render needs: only the critters in season for a given
//! month, each with its availability for a given hour.

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityRecord;
use crate::critter::{Bug, Critter, Fish, Schedule, SeaCreature};
use crate::error::Result;

/// Every known critter, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Bugs, in entry order.
    #[serde(default)]
    pub bugs: Vec<Bug>,
    /// Fish, in entry order.
    #[serde(default)]
    pub fishes: Vec<Fish>,
    /// Sea creatures, in entry order.
    #[serde(default)]
    pub sea_creatures: Vec<SeaCreature>,
}

impl Catalog {
    /// Parse a catalog from its JSON form. Missing lists default to empty.
    ///
    /// # Errors
    /// Returns `CritterError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            bugs = catalog.bugs.len(),
            fishes = catalog.fishes.len(),
            sea_creatures = catalog.sea_creatures.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append a record to the list for its kind.
    pub fn push(&mut self, critter: Critter) {
        match critter {
            Critter::Bug(b) => self.bugs.push(b),
            Critter::Fish(f) => self.fishes.push(f),
            Critter::SeaCreature(s) => self.sea_creatures.push(s),
        }
    }

    /// Total number of records across all kinds.
    pub fn len(&self) -> usize {
        self.bugs.len() + self.fishes.len() + self.sea_creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Critters in season during `month` (0-based), in catalog order, each
    /// paired with its availability at `hour`.
    pub fn snapshot(&self, month: u8, hour: u8) -> Snapshot {
        let bugs = self
            .bugs
            .iter()
            .filter(|b| b.in_season(month))
            .map(|b| Listing::new(b, Some(b.location.as_str()), None, hour))
            .collect();
        let fishes = self
            .fishes
            .iter()
            .filter(|f| f.in_season(month))
            .map(|f| {
                Listing::new(
                    f,
                    Some(f.location.as_str()),
                    Some(f.shadow_size.as_str()),
                    hour,
                )
            })
            .collect();
        let sea_creatures = self
            .sea_creatures
            .iter()
            .filter(|s| s.in_season(month))
            .map(|s| Listing::new(s, None, None, hour))
            .collect();

        Snapshot {
            month,
            hour,
            bugs,
            fishes,
            sea_creatures,
        }
    }
}

/// One in-season critter with its availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// Sell price in bells.
    pub price: u32,
    /// Where it is found. `None` for kinds without a location.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
    /// Shadow size. Only set for fish.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shadow_size: Option<String>,
    /// Availability at the snapshot's hour.
    pub availability: AvailabilityRecord,
}

impl Listing {
    fn new(
        critter: &dyn Schedule,
        location: Option<&str>,
        shadow_size: Option<&str>,
        hour: u8,
    ) -> Self {
        Self {
            name: critter.name().to_string(),
            price: critter.price(),
            location: location.map(str::to_string),
            shadow_size: shadow_size.map(str::to_string),
            availability: critter.availability(hour),
        }
    }
}

/// The catalog filtered to one month and evaluated at one hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Month the catalog was filtered to, January = 0.
    pub month: u8,
    /// Hour of the day availability was computed for.
    pub hour: u8,
    /// In-season bugs, in catalog order.
    pub bugs: Vec<Listing>,
    /// In-season fish, in catalog order.
    pub fishes: Vec<Listing>,
    /// In-season sea creatures, in catalog order.
    pub sea_creatures: Vec<Listing>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty() && self.fishes.is_empty() && self.sea_creatures.is_empty()
    }
}
