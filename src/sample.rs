// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Dock, Point, Zone};

/// Draws a uniformly distributed point inside the zone's polygon by
/// rejection sampling: uniform draws within the bounding box are retried
/// until one passes the point-in-polygon test.
///
/// [Zone::new] refuses polygons covering less than a fixed share of their
/// bounding box, so the expected number of draws is a small constant and
/// no iteration cap is needed (a cap would skew the distribution).
pub fn sample_in_zone<R: Rng + ?Sized>(zone: &Zone, rng: &mut R) -> Point {
    let (min, max) = zone.bounding_box();
    loop {
        let candidate = Point {
            lat: rng.gen_range(min.lat..=max.lat),
            lng: rng.gen_range(min.lng..=max.lng),
        };
        if zone.contains(candidate) {
            return candidate;
        }
    }
}

/// Picks one parking dock uniformly at random.
/// Returns [None] only for an empty dock set.
pub fn sample_dock<'a, R: Rng + ?Sized>(docks: &'a [Dock], rng: &mut R) -> Option<&'a Dock> {
    docks.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_zone() -> Zone {
        Zone::new(vec![
            Point {
                lat: 47.03,
                lng: 21.90,
            },
            Point {
                lat: 47.03,
                lng: 21.96,
            },
            Point {
                lat: 47.08,
                lng: 21.93,
            },
        ])
        .unwrap()
    }

    fn test_docks() -> Vec<Dock> {
        ["north", "south", "west"]
            .iter()
            .enumerate()
            .map(|(i, id)| Dock {
                id: id.to_string(),
                lat: 47.05 + i as f64 * 0.01,
                lng: 21.92,
            })
            .collect()
    }

    #[test]
    fn zone_samples_are_contained() {
        let zone = test_zone();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let p = sample_in_zone(&zone, &mut rng);
            assert!(zone.contains(p), "sampled point outside the zone: {:?}", p);
        }
    }

    #[test]
    fn zone_sampling_is_reproducible() {
        let zone = test_zone();
        let a = sample_in_zone(&zone, &mut StdRng::seed_from_u64(7));
        let b = sample_in_zone(&zone, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn dock_samples_are_members() {
        let docks = test_docks();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let dock = sample_dock(&docks, &mut rng).unwrap();
            assert!(docks.contains(dock));
        }
    }

    #[test]
    fn dock_sampling_eventually_covers_the_set() {
        let docks = test_docks();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..100 {
            seen.insert(sample_dock(&docks, &mut rng).unwrap().id.clone());
        }
        assert_eq!(seen.len(), docks.len());
    }

    #[test]
    fn empty_dock_set_yields_none() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(sample_dock(&[], &mut rng).is_none());
    }
}
