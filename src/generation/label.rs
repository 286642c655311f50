//! Label point computation (pole of inaccessibility)
//!
//! Finds an interior point of a polygon that maximizes clearance to the
//! boundary, by quadtree refinement: candidate cells are ranked by an upper
//! bound on the clearance attainable anywhere inside them and subdivided
//! until no cell can beat the best point found by more than `precision`.
//! The result is strictly inside the polygon, which the degeneracy checks
//! and placement references rely on.

use glam::DVec2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::{polygon_centroid, polygon_clearance};

/// One candidate square in the refinement queue
#[derive(Debug, Clone, Copy)]
struct SearchCell {
    center: DVec2,
    half: f64,
    /// Signed clearance of the cell center (positive inside)
    clearance: f64,
    /// Upper bound on the clearance anywhere in the cell
    potential: f64,
}

impl SearchCell {
    fn new(center: DVec2, half: f64, vertices: &[DVec2]) -> Self {
        let clearance = polygon_clearance(center, vertices);
        Self {
            center,
            half,
            clearance,
            potential: clearance + half * std::f64::consts::SQRT_2,
        }
    }
}

impl PartialEq for SearchCell {
    fn eq(&self, other: &Self) -> bool {
        self.potential == other.potential
    }
}

impl Eq for SearchCell {}

impl PartialOrd for SearchCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.potential
            .partial_cmp(&other.potential)
            .unwrap_or(Ordering::Equal)
    }
}

/// Compute the label point of a polygon to within `precision`
pub fn label_point(vertices: &[DVec2], precision: f64) -> DVec2 {
    let mut min = vertices[0];
    let mut max = vertices[0];
    for &v in vertices {
        min = min.min(v);
        max = max.max(v);
    }
    let size = max - min;
    let cell_size = size.x.min(size.y);
    if cell_size <= 0.0 {
        return (min + max) * 0.5;
    }
    let half = cell_size / 2.0;

    // Cover the bounding box with a regular grid of candidate cells
    let mut queue = BinaryHeap::new();
    let mut x = min.x;
    while x < max.x {
        let mut y = min.y;
        while y < max.y {
            queue.push(SearchCell::new(
                DVec2::new(x + half, y + half),
                half,
                vertices,
            ));
            y += cell_size;
        }
        x += cell_size;
    }

    // The centroid and box center are strong initial guesses
    let mut best = SearchCell::new(polygon_centroid(vertices), 0.0, vertices);
    let box_center = SearchCell::new((min + max) * 0.5, 0.0, vertices);
    if box_center.clearance > best.clearance {
        best = box_center;
    }

    while let Some(cell) = queue.pop() {
        if cell.clearance > best.clearance {
            best = cell;
        }
        // nothing inside this cell can beat the best by more than precision
        if cell.potential - best.clearance <= precision {
            continue;
        }
        let h = cell.half / 2.0;
        for (dx, dy) in [(-h, -h), (h, -h), (-h, h), (h, h)] {
            queue.push(SearchCell::new(
                cell.center + DVec2::new(dx, dy),
                h,
                vertices,
            ));
        }
    }

    best.center
}
