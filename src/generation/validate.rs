//! Degeneracy checks for candidate diagrams
//!
//! A candidate diagram is discarded wholesale when any check fails; the
//! generation loop then starts over with fresh sites. Checks run over all
//! polygons and over the internal (site-pair) edges. Border segments are
//! exempt: the frame corner sits at the coordinate origin, so running the
//! origin-distance check over them would discard every diagram.

use std::fmt;

use glam::DVec2;

use crate::diagram::VoronoiDiagram;
use crate::geometry::segment_distance;

/// Thresholds applied by [`check_diagram`]
///
/// Derived from the puzzle configuration; the generation loop may relax
/// them if rejections pile up.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Shortest allowed edge between consecutive polygon vertices
    pub min_edge_length: f64,
    /// Minimum distance between an internal edge and either adjacent
    /// polygon's label point
    pub min_label_clearance: f64,
}

/// Why a candidate diagram was discarded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// Two consecutive vertices of a polygon are nearly coincident
    ShortPolygonEdge { site: usize, length: f64 },
    /// An internal edge terminates too close to the frame origin
    EdgeEndpointNearOrigin {
        site_a: usize,
        site_b: usize,
        distance: f64,
    },
    /// An internal edge passes too close to an adjacent label point
    EdgeNearLabel { site: usize, distance: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ShortPolygonEdge { site, length } => {
                write!(f, "polygon {} has an edge of length {:.5}", site, length)
            }
            Rejection::EdgeEndpointNearOrigin {
                site_a,
                site_b,
                distance,
            } => write!(
                f,
                "edge between {} and {} ends {:.5} from the origin",
                site_a, site_b, distance
            ),
            Rejection::EdgeNearLabel { site, distance } => write!(
                f,
                "edge passes {:.5} from the label point of polygon {}",
                distance, site
            ),
        }
    }
}

/// Inspect a candidate diagram and report the first failed check
///
/// `labels` holds one label point per polygon, in site order. Returns
/// `None` when the diagram is acceptable.
pub fn check_diagram(
    diagram: &VoronoiDiagram,
    labels: &[DVec2],
    thresholds: &Thresholds,
) -> Option<Rejection> {
    for (site, polygon) in diagram.polygons().iter().enumerate() {
        let verts = &polygon.vertices;
        for k in 0..verts.len() {
            let length = verts[k].distance(verts[(k + 1) % verts.len()]);
            if length < thresholds.min_edge_length {
                return Some(Rejection::ShortPolygonEdge { site, length });
            }
        }
    }

    for edge in diagram.internal_edges() {
        // Measures endpoint distance from the frame origin (0,0), not edge
        // length. Kept as shipped; see DESIGN.md.
        let distance = edge.start.length().min(edge.end.length());
        if distance < thresholds.min_edge_length {
            return Some(Rejection::EdgeEndpointNearOrigin {
                site_a: edge.site_a,
                site_b: edge.site_b.unwrap_or(edge.site_a),
                distance,
            });
        }
    }

    for edge in diagram.internal_edges() {
        let Some(site_b) = edge.site_b else { continue };
        for site in [edge.site_a, site_b] {
            let distance = segment_distance(edge.start, edge.end, labels[site]);
            if distance < thresholds.min_label_clearance {
                return Some(Rejection::EdgeNearLabel { site, distance });
            }
        }
    }

    None
}
