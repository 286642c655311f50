//! 2D geometric primitives for the diagram plane
//!
//! All diagram-space math runs in f64 over [`glam::DVec2`]; mesh output
//! converts to f32 at the last step.

use glam::DVec2;

/// Distance from point `p` to the line segment `a`-`b`
pub fn segment_distance(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Signed area of a closed polygon (shoelace formula)
///
/// Positive for counter-clockwise winding.
pub fn polygon_signed_area(vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Absolute area of a closed polygon
#[inline]
pub fn polygon_area(vertices: &[DVec2]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Total boundary length of a closed polygon
pub fn polygon_perimeter(vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .sum()
}

/// Area centroid of a closed polygon
///
/// Falls back to the vertex mean for near-zero-area input.
pub fn polygon_centroid(vertices: &[DVec2]) -> DVec2 {
    let n = vertices.len();
    let area = polygon_signed_area(vertices);
    if area.abs() < 1e-12 {
        let sum: DVec2 = vertices.iter().copied().sum();
        return sum / n as f64;
    }
    let mut c = DVec2::ZERO;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        c += (a + b) * cross;
    }
    c / (6.0 * area)
}

/// Even-odd point-in-polygon test
pub fn point_in_polygon(p: DVec2, vertices: &[DVec2]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed distance from `p` to the polygon boundary, positive inside
pub fn polygon_clearance(p: DVec2, vertices: &[DVec2]) -> f64 {
    let n = vertices.len();
    let mut min_dist = f64::MAX;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        min_dist = min_dist.min(segment_distance(a, b, p));
    }
    if point_in_polygon(p, vertices) {
        min_dist
    } else {
        -min_dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_segment_distance_endpoints_and_interior() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(2.0, 0.0);

        // perpendicular drop onto the interior
        assert!((segment_distance(a, b, DVec2::new(1.0, 3.0)) - 3.0).abs() < 1e-12);
        // beyond the endpoints the nearest point is the endpoint itself
        assert!((segment_distance(a, b, DVec2::new(-1.0, 0.0)) - 1.0).abs() < 1e-12);
        assert!((segment_distance(a, b, DVec2::new(3.0, 0.0)) - 1.0).abs() < 1e-12);
        // degenerate zero-length segment
        assert!((segment_distance(a, a, DVec2::new(0.0, 5.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_area_and_winding() {
        let square = unit_square();
        assert!((polygon_area(&square) - 1.0).abs() < 1e-12);
        assert!(polygon_signed_area(&square) > 0.0, "CCW winding is positive");

        let mut reversed = square.clone();
        reversed.reverse();
        assert!(polygon_signed_area(&reversed) < 0.0);
    }

    #[test]
    fn test_square_perimeter_and_centroid() {
        let square = unit_square();
        assert!((polygon_perimeter(&square) - 4.0).abs() < 1e-12);
        let c = polygon_centroid(&square);
        assert!(c.distance(DVec2::new(0.5, 0.5)) < 1e-12);
    }

    #[test]
    fn test_triangle_centroid() {
        let tri = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(0.0, 3.0),
        ];
        let c = polygon_centroid(&tri);
        assert!(c.distance(DVec2::new(1.0, 1.0)) < 1e-12);
    }

    #[test]
    fn test_point_in_polygon() {
        let square = unit_square();
        assert!(point_in_polygon(DVec2::new(0.5, 0.5), &square));
        assert!(point_in_polygon(DVec2::new(0.01, 0.99), &square));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &square));
        assert!(!point_in_polygon(DVec2::new(-0.1, -0.1), &square));
    }

    #[test]
    fn test_polygon_clearance_sign() {
        let square = unit_square();
        // center is 0.5 from every side
        assert!((polygon_clearance(DVec2::new(0.5, 0.5), &square) - 0.5).abs() < 1e-12);
        // outside points are negative
        assert!((polygon_clearance(DVec2::new(2.0, 0.5), &square) + 1.0).abs() < 1e-12);
    }
}
