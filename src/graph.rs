// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Point};
use std::collections::btree_map::{BTreeMap, Entry};

/// A named waypoint of a [CityGraph].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Node {
    pub fn position(&self) -> Point {
        Point {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Represents a city's routable skeleton as a small set of [Nodes](Node)
/// and an undirected adjacency relation between them.
///
/// Edge weights are not stored: the weight of any node pair is the
/// great-circle distance between the two nodes, computed on demand.
/// The graph is meant to be built once at startup and never mutated after.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CityGraph(BTreeMap<String, (Node, Vec<String>)>);

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all [Nodes](Node), in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.0.values().map(|(node, _)| node)
    }

    /// Retrieves a [Node] with the provided id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.0.get(id).map(|(node, _)| node)
    }

    /// Creates or updates a [Node] with `node.id`.
    /// All adjacency of an existing node is preserved.
    pub fn set_node(&mut self, node: Node) {
        assert!(!node.id.is_empty());

        match self.0.entry(node.id.clone()) {
            Entry::Vacant(e) => {
                e.insert((node, Vec::default()));
            }
            Entry::Occupied(mut e) => {
                debug_assert_eq!(e.get().0.id, node.id);
                e.get_mut().0 = node;
            }
        }
    }

    /// Declares `a` and `b` adjacent, in both directions.
    ///
    /// One `link` call per road segment suffices; reachability is always
    /// symmetric by construction. Linking a node to itself or referencing
    /// an id without a node does nothing.
    pub fn link(&mut self, a: &str, b: &str) {
        if a == b || !self.0.contains_key(a) || !self.0.contains_key(b) {
            return;
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some((_, neighbors)) = self.0.get_mut(from) {
                if !neighbors.iter().any(|n| n == to) {
                    neighbors.push(to.to_string());
                }
            }
        }
    }

    /// Gets the ids of all nodes adjacent to the node with the given id.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.0
            .get(id)
            .map(|(_, neighbors)| neighbors.as_slice())
            .unwrap_or_default()
    }

    /// Gets the weight between two nodes: their great-circle distance in
    /// kilometers, regardless of adjacency. If either id is unknown,
    /// returns [f64::INFINITY].
    pub fn weight(&self, a: &str, b: &str) -> f64 {
        match (self.get_node(a), self.get_node(b)) {
            (Some(a), Some(b)) => earth_distance(a.lat, a.lng, b.lat, b.lng),
            _ => f64::INFINITY,
        }
    }

    /// Finds the [Node] closest to the given position.
    ///
    /// On an exact distance tie the node that comes first in id order wins,
    /// keeping the result reproducible. Only returns [None] when the graph
    /// is empty.
    pub fn nearest_node(&self, position: Point) -> Option<&Node> {
        self.iter()
            .map(|node| {
                (
                    earth_distance(position.lat, position.lng, node.lat, node.lng),
                    node,
                )
            })
            .min_by(|(a_dist, _), (b_dist, _)| a_dist.partial_cmp(b_dist).unwrap())
            .map(|(_, node)| node)
    }
}
