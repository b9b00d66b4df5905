//! Raw entry conversion -- turns the loose strings of one data row into a
//! typed critter record.
//!
//! Columns mirror the tabular source the catalog is built from: name, price,
//! hour-range text, month-range text, location, and an optional shadow size.

use crate::critter::{Bug, Critter, CritterKind, Fish, SeaCreature};
use crate::error::{CritterError, Result};
use crate::range::{parse_hour_range, parse_month_range};

/// One unparsed record, exactly as typed or read from a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub kind: CritterKind,
    pub name: String,
    pub price: String,
    pub hours: String,
    pub months: String,
    pub location: String,
    pub shadow_size: Option<String>,
}

impl RawEntry {
    /// Parse every field and build the record for [`kind`](Self::kind).
    ///
    /// Location is ignored for sea creatures; shadow size is only kept for
    /// fish.
    ///
    /// # Errors
    /// Returns `CritterError::InvalidFormat` for an empty name or malformed
    /// hours, `CritterError::InvalidPrice` for a non-numeric price, and
    /// `CritterError::UnknownMonth` for an unrecognized month.
    pub fn parse(&self) -> Result<Critter> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CritterError::InvalidFormat("name must not be empty".to_string()));
        }

        let price_text = self.price.trim();
        let price: u32 = price_text
            .parse()
            .map_err(|_| CritterError::InvalidPrice(price_text.to_string()))?;

        let hours = parse_hour_range(&self.hours)?;
        let months = parse_month_range(&self.months)?;
        let name = name.to_string();
        let location = self.location.trim().to_string();

        let critter = match self.kind {
            CritterKind::Bug => Critter::Bug(Bug {
                name,
                price,
                months,
                hours,
                location,
            }),
            CritterKind::Fish => Critter::Fish(Fish {
                name,
                price,
                months,
                hours,
                location,
                shadow_size: self
                    .shadow_size
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            }),
            CritterKind::SeaCreature => Critter::SeaCreature(SeaCreature {
                name,
                price,
                months,
                hours,
            }),
        };

        tracing::debug!(kind = %self.kind, name = %self.name.trim(), "parsed entry");
        Ok(critter)
    }
}
