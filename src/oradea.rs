// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! The built-in city dataset for the Oradea demo deployment: a skeleton
//! graph of well-known landmarks, the scooter free-floating zone and the
//! bike docks. All coordinates are approximate landmark positions; the
//! graph is a distance-estimation skeleton, not real road routing.

use crate::{CityGraph, Dock, Node, Point, TripSimulator, Zone};

/// Fallback start node for vehicles with no recorded position.
pub const REFERENCE_NODE: &str = "piata-unirii";

const NODES: &[(&str, f64, f64)] = &[
    ("cetatea-oradea", 47.0530, 21.9437),
    ("gara-centrala", 47.0692, 21.9330),
    ("lotus-center", 47.0407, 21.9509),
    ("parcul-1-decembrie", 47.0500, 21.9360),
    ("piata-ferdinand", 47.0567, 21.9286),
    ("piata-unirii", 47.0553, 21.9273),
    ("rogerius", 47.0660, 21.9000),
    ("universitatea", 47.0443, 21.9183),
];

const LINKS: &[(&str, &str)] = &[
    ("piata-unirii", "piata-ferdinand"),
    ("piata-ferdinand", "gara-centrala"),
    ("gara-centrala", "rogerius"),
    ("rogerius", "piata-unirii"),
    ("piata-unirii", "parcul-1-decembrie"),
    ("piata-ferdinand", "parcul-1-decembrie"),
    ("parcul-1-decembrie", "cetatea-oradea"),
    ("cetatea-oradea", "lotus-center"),
    ("piata-unirii", "universitatea"),
    ("universitatea", "lotus-center"),
];

const ZONE: &[(f64, f64)] = &[
    (47.075, 21.900),
    (47.075, 21.955),
    (47.050, 21.962),
    (47.034, 21.952),
    (47.034, 21.910),
    (47.050, 21.895),
];

const DOCKS: &[(&str, f64, f64)] = &[
    ("dock-cetate", 47.0526, 21.9430),
    ("dock-gara", 47.0688, 21.9336),
    ("dock-lotus", 47.0410, 21.9502),
    ("dock-unirii", 47.0549, 21.9268),
    ("dock-universitate", 47.0448, 21.9190),
];

/// Builds the Oradea skeleton graph.
pub fn city_graph() -> CityGraph {
    let mut g = CityGraph::new();
    for &(id, lat, lng) in NODES {
        g.set_node(Node {
            id: id.to_string(),
            lat,
            lng,
        });
    }
    for &(a, b) in LINKS {
        g.link(a, b);
    }
    g
}

/// The scooter free-floating zone: a hexagon around the city center.
pub fn scooter_zone() -> Zone {
    let vertices = ZONE
        .iter()
        .map(|&(lat, lng)| Point { lat, lng })
        .collect();
    // The built-in polygon is a wide convex hexagon; it cannot fail validation.
    Zone::new(vertices).expect("the built-in scooter zone is valid")
}

/// The fixed set of bike parking docks.
pub fn docks() -> Vec<Dock> {
    DOCKS
        .iter()
        .map(|&(id, lat, lng)| Dock {
            id: id.to_string(),
            lat,
            lng,
        })
        .collect()
}

/// A ready-to-use [TripSimulator] over the Oradea dataset.
pub fn simulator(seed: u64) -> TripSimulator {
    TripSimulator::new(city_graph(), scooter_zone(), docks(), REFERENCE_NODE, seed)
}
