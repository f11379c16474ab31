// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};

use crate::CityGraph;

/// Computes the minimum total edge weight between two nodes of `g`,
/// in kilometers, using [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The unvisited node with the smallest tentative distance is found with a
/// linear scan rather than a priority queue; with the handful of nodes a
/// [CityGraph] holds, O(V²) is plenty and keeps the code flat. The search
/// stops as soon as the target is selected.
///
/// Returns `0.0` when `from == to` and, as a defined fallback, when the
/// target is unreachable or either id is unknown. The result is always
/// finite and non-negative.
pub fn shortest_distance(g: &CityGraph, from: &str, to: &str) -> f64 {
    if from == to {
        return 0.0;
    }

    let mut known: BTreeMap<&str, f64> = BTreeMap::new();
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    known.insert(from, 0.0);

    loop {
        let Some((current, current_dist)) = known
            .iter()
            .filter(|(id, _)| !visited.contains(*id))
            .map(|(&id, &dist)| (id, dist))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        else {
            // Ran out of reachable nodes without meeting the target.
            return 0.0;
        };

        if current == to {
            return current_dist;
        }
        visited.insert(current);

        for neighbor in g.neighbors(current) {
            let neighbor = neighbor.as_str();
            if visited.contains(neighbor) {
                continue;
            }

            let candidate = current_dist + g.weight(current, neighbor);
            if candidate < known.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                known.insert(neighbor, candidate);
            }
        }
    }
}
