// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// Error conditions raised when ingesting vehicle records from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("vehicle {0}: negative hourly rate {1}")]
    NegativeRate(i64, f64),
}

/// The class of a vehicle, deciding its placement policy:
/// bikes park on discrete docks, scooters float freely inside the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Scooter,
}

/// A vehicle record as served by the external catalog backend.
///
/// The catalog owns these; the simulation only reads them. Extra fields
/// in the JSON payload (e.g. `description`) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_type: VehicleType,
    pub name: String,
    pub price_per_hour: f64,
    pub available: bool,
}

impl Vehicle {
    /// Checks the record against the constraints the simulation relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.price_per_hour < 0.0 {
            return Err(CatalogError::NegativeRate(self.id, self.price_per_hour));
        }
        Ok(())
    }
}
