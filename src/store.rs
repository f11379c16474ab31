// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::Point;

/// Current simulated position of every tracked vehicle, by vehicle id.
///
/// This is the only mutable state of the simulation. It is owned by the
/// [TripSimulator](crate::TripSimulator) and updated single-writer: one
/// read-modify-write per completed ride. Entries are created lazily and
/// never removed; nothing is persisted across process restarts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionStore(BTreeMap<i64, Point>);

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The recorded position of a vehicle, if it has ever been placed.
    pub fn get(&self, vehicle_id: i64) -> Option<Point> {
        self.0.get(&vehicle_id).copied()
    }

    /// Returns the recorded position of a vehicle, placing it with `init`
    /// first if it was never seen. `init` is not called for tracked vehicles,
    /// so repeated calls never move a vehicle.
    pub fn ensure(&mut self, vehicle_id: i64, init: impl FnOnce() -> Point) -> Point {
        *self.0.entry(vehicle_id).or_insert_with(init)
    }

    /// Overwrites the position of a vehicle.
    pub fn set(&mut self, vehicle_id: i64, position: Point) {
        self.0.insert(vehicle_id, position);
    }

    /// Iterates over all `(vehicle id, position)` pairs, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Point)> + '_ {
        self.0.iter().map(|(&id, &p)| (id, p))
    }
}
