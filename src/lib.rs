// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Geo-simulation and trip-costing engine for a two-wheeler rental demo.
//!
//! The crate models a small city as a fixed weighted graph of named waypoints
//! ([CityGraph]), places bikes on discrete parking docks and scooters anywhere
//! inside a free-floating [Zone], and simulates rentals: the [TripSimulator]
//! picks a plausible destination for a vehicle, measures the trip over the
//! graph with Dijkstra's algorithm, derives a cost from the distance and the
//! vehicle's rate, and records the vehicle's new position.
//!
//! A ready-made dataset for Oradea, Romania ships in the [oradea] module.
//!
//! # Example
//!
//! ```
//! let mut sim = wheelsim::oradea::simulator(42);
//! sim.sync_catalog([wheelsim::Vehicle {
//!     id: 1,
//!     vehicle_type: wheelsim::VehicleType::Scooter,
//!     name: "Vespino".to_string(),
//!     price_per_hour: 3.5,
//!     available: true,
//! }])
//! .expect("valid record");
//!
//! let ride = sim.complete_ride(1).expect("vehicle 1 is in the catalog");
//! println!("{:.1} km for {:.2} EUR", ride.distance_km, ride.cost);
//! ```

mod dijkstra;
mod distance;
mod graph;
pub mod oradea;
mod sample;
mod store;
mod trip;
mod vehicle;
mod zone;

pub use dijkstra::shortest_distance;
pub use distance::earth_distance;
pub use graph::{CityGraph, Node};
pub use sample::{sample_dock, sample_in_zone};
pub use store::PositionStore;
pub use trip::{Ride, TripSimulator, MIN_TRIP_KM};
pub use vehicle::{CatalogError, Vehicle, VehicleType};
pub use zone::{Dock, Zone, ZoneError};

/// A geographic position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}
