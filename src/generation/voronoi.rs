//! Bounded Voronoi diagram construction
//!
//! Builds each site's cell as the intersection of the bounding rectangle
//! with the perpendicular-bisector half-planes against every other site
//! (O(N²) over sites, which is exact and fast for the N <= 25 this crate
//! targets). Clipping records edge provenance, so every polygon edge knows
//! whether it came from the rectangle border or from the bisector against a
//! specific neighbor; internal edges therefore carry exact site adjacency
//! without any fuzzy segment matching.

use glam::DVec2;
use std::collections::HashMap;

use crate::diagram::{Edge, Polygon, VoronoiDiagram};
use crate::error::{Result, ShatterError};

/// Vertices closer than this are treated as coincident during clipping
const EPS: f64 = 1e-9;

/// Options controlling diagram generation
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    /// Also materialize rectangle-boundary segments in the diagram's edge
    /// list (with `site_b == None`). Cell polygons are closed loops either
    /// way; this only affects [`VoronoiDiagram::edges`].
    pub include_border_edges: bool,
}

/// Where an edge of a cell under construction came from
#[derive(Debug, Clone, Copy, PartialEq)]
enum EdgeSource {
    /// The bounding rectangle
    Border,
    /// The bisector against the given site index
    Neighbor(usize),
}

/// A cell vertex plus the provenance of the edge leaving it
#[derive(Debug, Clone, Copy)]
struct CellVertex {
    point: DVec2,
    source: EdgeSource,
}

/// Generate the bounded Voronoi diagram of `sites` over `[0,width]x[0,height]`
///
/// One polygon per site, in site order. Internal edges are emitted once,
/// keyed by the unordered site pair with the lower index in `site_a`.
///
/// Sites must be distinct; the sampler upstream guarantees a minimum
/// pairwise separation, and near-coincident sites are not defended against
/// here.
///
/// # Errors
///
/// Returns `GenerationFailed` for an empty site set or a degenerate
/// bounding rectangle.
pub fn generate(
    sites: &[DVec2],
    width: f64,
    height: f64,
    options: GeneratorOptions,
) -> Result<VoronoiDiagram> {
    if sites.is_empty() {
        return Err(ShatterError::GenerationFailed(
            "cannot build a diagram from zero sites".into(),
        ));
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(ShatterError::GenerationFailed(format!(
            "degenerate bounding rectangle {}x{}",
            width, height
        )));
    }

    let cells = sites
        .iter()
        .enumerate()
        .map(|(i, &site)| build_cell(i, site, sites, width, height))
        .collect::<Result<Vec<_>>>()?;

    // Each internal edge is seen from both adjacent cells; keep one copy
    // keyed by the unordered site pair.
    let mut internal: HashMap<(usize, usize), Edge> = HashMap::new();
    let mut border: Vec<Edge> = Vec::new();

    for (i, cell) in cells.iter().enumerate() {
        for (k, cv) in cell.iter().enumerate() {
            let start = cv.point;
            let end = cell[(k + 1) % cell.len()].point;
            match cv.source {
                EdgeSource::Border => {
                    if options.include_border_edges {
                        border.push(Edge {
                            start,
                            end,
                            site_a: i,
                            site_b: None,
                        });
                    }
                }
                EdgeSource::Neighbor(j) => {
                    let key = (i.min(j), i.max(j));
                    internal.entry(key).or_insert(Edge {
                        start,
                        end,
                        site_a: key.0,
                        site_b: Some(key.1),
                    });
                }
            }
        }
    }

    // Deterministic edge ordering regardless of hash iteration
    let mut edges: Vec<Edge> = internal.into_values().collect();
    edges.sort_by_key(|e| (e.site_a, e.site_b));
    edges.extend(border);

    let polygons = sites
        .iter()
        .zip(cells)
        .map(|(&site, cell)| Polygon {
            site,
            vertices: cell.into_iter().map(|cv| cv.point).collect(),
        })
        .collect();

    Ok(VoronoiDiagram::new(width, height, polygons, edges))
}

/// Clip the bounding rectangle by every bisector half-plane for one site
fn build_cell(
    index: usize,
    site: DVec2,
    sites: &[DVec2],
    width: f64,
    height: f64,
) -> Result<Vec<CellVertex>> {
    let mut cell = vec![
        CellVertex {
            point: DVec2::new(0.0, 0.0),
            source: EdgeSource::Border,
        },
        CellVertex {
            point: DVec2::new(width, 0.0),
            source: EdgeSource::Border,
        },
        CellVertex {
            point: DVec2::new(width, height),
            source: EdgeSource::Border,
        },
        CellVertex {
            point: DVec2::new(0.0, height),
            source: EdgeSource::Border,
        },
    ];

    for (j, &other) in sites.iter().enumerate() {
        if j == index {
            continue;
        }
        cell = clip_by_bisector(&cell, site, other, j);
        if cell.len() < 3 {
            return Err(ShatterError::GenerationFailed(format!(
                "cell {} collapsed while clipping against site {}",
                index, j
            )));
        }
    }

    Ok(cell)
}

/// Intersect a convex cell with the half-plane of points closer to `site`
/// than to `other` (Sutherland-Hodgman, convex input)
fn clip_by_bisector(
    cell: &[CellVertex],
    site: DVec2,
    other: DVec2,
    neighbor: usize,
) -> Vec<CellVertex> {
    let mid = (site + other) * 0.5;
    let dir = other - site;
    // signed coordinate along dir; <= 0 is the kept side (closer to `site`)
    let side = |p: DVec2| (p - mid).dot(dir);

    // Keep the inside fragment of every edge, remembering its provenance.
    let n = cell.len();
    let mut segments: Vec<(DVec2, DVec2, EdgeSource)> = Vec::with_capacity(n + 1);
    for k in 0..n {
        let a = cell[k].point;
        let b = cell[(k + 1) % n].point;
        let src = cell[k].source;
        let sa = side(a);
        let sb = side(b);
        match (sa <= EPS, sb <= EPS) {
            (true, true) => segments.push((a, b, src)),
            (true, false) => segments.push((a, intersect(a, b, sa, sb), src)),
            (false, true) => segments.push((intersect(a, b, sa, sb), b, src)),
            (false, false) => {}
        }
    }
    // Clips through a vertex can leave zero-length fragments behind.
    segments.retain(|(s, e, _)| s.distance(*e) > EPS);

    // A convex polygon cut by a half-plane loses at most one boundary run;
    // the single gap between surviving segments lies on the bisector.
    let m = segments.len();
    let mut out = Vec::with_capacity(m + 1);
    for k in 0..m {
        let (start, end, src) = segments[k];
        out.push(CellVertex { point: start, source: src });
        let next_start = segments[(k + 1) % m].0;
        if end.distance(next_start) > EPS {
            out.push(CellVertex {
                point: end,
                source: EdgeSource::Neighbor(neighbor),
            });
        }
    }
    out
}

/// Intersection of segment `a`-`b` with the clip line, given the signed
/// side values of both endpoints (opposite signs)
fn intersect(a: DVec2, b: DVec2, sa: f64, sb: f64) -> DVec2 {
    let t = sa / (sa - sb);
    a + (b - a) * t
}
