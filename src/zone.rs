// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Point;

/// Minimum polygon-to-bounding-box area ratio accepted by [Zone::new].
/// Keeps the expected number of rejection-sampling draws at 1/ratio or less.
const MIN_AREA_RATIO: f64 = 0.05;

/// Error conditions rejected by [Zone::new].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ZoneError {
    #[error("zone polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The polygon covers too little of its bounding box. Sampling such a
    /// sliver would need an unbounded number of rejection draws, so the
    /// configuration is refused up front instead.
    #[error("zone polygon covers only {0:.1}% of its bounding box")]
    Sliver(f64),
}

/// One of a fixed set of discrete locations where bikes may be stationed.
#[derive(Debug, Clone, PartialEq)]
pub struct Dock {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Dock {
    pub fn position(&self) -> Point {
        Point {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// The free-floating operating area for scooters: an irregular polygon,
/// implicitly closed (the last vertex connects back to the first).
///
/// Degenerate polygons are rejected at construction, so every [Zone] that
/// exists is safe to sample points in.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    vertices: Vec<Point>,
    min: Point,
    max: Point,
}

impl Zone {
    pub fn new(vertices: Vec<Point>) -> Result<Self, ZoneError> {
        if vertices.len() < 3 {
            return Err(ZoneError::TooFewVertices(vertices.len()));
        }

        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min.lat = min.lat.min(v.lat);
            min.lng = min.lng.min(v.lng);
            max.lat = max.lat.max(v.lat);
            max.lng = max.lng.max(v.lng);
        }

        let box_area = (max.lat - min.lat) * (max.lng - min.lng);
        let ratio = if box_area > 0.0 {
            shoelace_area(&vertices) / box_area
        } else {
            0.0
        };
        if ratio < MIN_AREA_RATIO {
            return Err(ZoneError::Sliver(ratio * 100.0));
        }

        Ok(Self { vertices, min, max })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The axis-aligned bounding box of the polygon, as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Ray-casting (even-odd) point-in-polygon test: counts how many polygon
    /// edges a ray cast from `p` towards increasing longitude crosses.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.lat > p.lat) != (b.lat > p.lat)
                && p.lng < (b.lng - a.lng) * (p.lat - a.lat) / (b.lat - a.lat) + a.lng
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Unsigned area of a closed polygon via the shoelace formula,
/// in square degrees. Planar approximation, only used for the
/// degenerate-polygon check where the distortion is irrelevant.
fn shoelace_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        twice_area += a.lng * b.lat - b.lng * a.lat;
    }
    twice_area.abs() * 0.5
}
