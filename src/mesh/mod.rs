//! Shard mesh construction
//!
//! Turns an accepted cell polygon into engine-agnostic mesh data: a flat
//! top face for rendering and an extruded closed prism for collision.
//! Vertices are emitted per-triangle-corner with sequential indices, which
//! keeps hard edges on the collider and lets hosts upload the buffers
//! directly.

mod collider;

pub use collider::collider_trimesh;

use glam::DVec2;

use crate::diagram::Polygon;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: convert to `Mesh` with attributes
/// - Godot: convert to `ArrayMesh`
/// - wgpu: use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Options controlling shard mesh construction
#[derive(Debug, Clone, Copy)]
pub struct MeshOptions {
    /// Scale from the unit diagram square to world units
    pub frame_scale: f32,
    /// Height of the rendered top face
    pub surface_height: f32,
    /// Upper extrusion height of the collider prism
    pub collider_top: f32,
    /// Lower extrusion height of the collider prism
    pub collider_bottom: f32,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            // tuned to the physical frame: 0.0835 world units per half square
            frame_scale: 0.0835 / 0.5,
            surface_height: 0.0,
            collider_top: 0.0,
            collider_bottom: -0.01,
        }
    }
}

/// Render and collider meshes for a single shard
#[derive(Debug, Clone)]
pub struct ShardMesh {
    /// Flat top face with the radial UV map
    pub render: MeshData,
    /// Closed extruded prism for overlap detection
    pub collider: MeshData,
}

/// Map a diagram-space point into world space at the given height
///
/// The diagram center moves to the world origin and the unit square is
/// scaled by `frame_scale`. Every vertex of every mesh, and any auxiliary
/// point (centroid, label point), must go through this same map so that
/// meshes and reference points stay consistent.
pub fn world_point(p: DVec2, height: f32, options: &MeshOptions) -> [f32; 3] {
    let scale = options.frame_scale as f64;
    [
        ((p.x - 0.5) * scale) as f32,
        height,
        ((p.y - 0.5) * scale) as f32,
    ]
}

/// UV coordinate for a boundary position given as a fraction of the total
/// perimeter
///
/// Boundary positions wrap around a circle of radius 0.5 centered at
/// (0.5, 0.5): proportion 0 and proportion 1 land on the same point. The
/// resulting texture mapping is radial, independent of polygon shape.
pub fn perimeter_uv(proportion: f64) -> [f32; 2] {
    let theta = std::f64::consts::TAU * proportion;
    [
        (theta.cos() * 0.5 + 0.5) as f32,
        (theta.sin() * 0.5 + 0.5) as f32,
    ]
}

/// Build the render and collider meshes for one shard polygon
///
/// The top face is a triangle fan anchored at vertex 0, with triangles
/// `(0, i+1, i)` for `i = 1..K-2`, so a K-gon yields K-2 triangles. Each
/// fan vertex gets a UV from its cumulative boundary length. The collider
/// is the closed prism built in [`collider`].
pub fn build_shard_mesh(polygon: &Polygon, options: &MeshOptions) -> ShardMesh {
    let verts = &polygon.vertices;
    let n = verts.len();

    // degenerate cells produce no geometry
    if n < 3 {
        return ShardMesh {
            render: MeshData::default(),
            collider: MeshData::default(),
        };
    }

    // cumulative boundary length up to each vertex, for the radial UV map
    let mut edge_lengths = Vec::with_capacity(n);
    for i in 0..n {
        edge_lengths.push(verts[i].distance(verts[(i + 1) % n]));
    }
    let total: f64 = edge_lengths.iter().sum();
    let mut cumulative = vec![0.0f64; n];
    for i in 1..n {
        cumulative[i] = cumulative[i - 1] + edge_lengths[i - 1];
    }

    let mut render = MeshData::default();
    for i in 1..n - 1 {
        for &ix in &[0, i + 1, i] {
            render
                .positions
                .push(world_point(verts[ix], options.surface_height, options));
            render.normals.push([0.0, 1.0, 0.0]);
            render.uvs.push(perimeter_uv(cumulative[ix] / total));
            render.indices.push(render.positions.len() as u32 - 1);
        }
    }

    let collider = collider::collider_prism(verts, options);

    ShardMesh { render, collider }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_polygon() -> Polygon {
        Polygon {
            site: DVec2::new(0.5, 0.5),
            vertices: vec![
                DVec2::new(0.25, 0.25),
                DVec2::new(0.75, 0.25),
                DVec2::new(0.75, 0.75),
                DVec2::new(0.25, 0.75),
            ],
        }
    }

    #[test]
    fn test_world_point_maps_center_to_origin() {
        let options = MeshOptions::default();
        let p = world_point(DVec2::new(0.5, 0.5), 0.0, &options);
        assert_eq!(p, [0.0, 0.0, 0.0]);

        // the frame corner lands at half the physical frame size
        let corner = world_point(DVec2::new(1.0, 1.0), 0.0, &options);
        assert!((corner[0] - 0.0835).abs() < 1e-6);
        assert!((corner[2] - 0.0835).abs() < 1e-6);
    }

    #[test]
    fn test_top_face_fan_counts() {
        let options = MeshOptions::default();
        let mesh = build_shard_mesh(&square_polygon(), &options);

        // K-gon fan: K-2 triangles, emitted per-corner
        assert_eq!(mesh.render.triangle_count(), 2);
        assert_eq!(mesh.render.vertex_count(), 6);
        assert_eq!(mesh.render.positions.len(), mesh.render.normals.len());
        assert_eq!(mesh.render.positions.len(), mesh.render.uvs.len());
        // indices are sequential over the per-corner vertices
        for (k, &ix) in mesh.render.indices.iter().enumerate() {
            assert_eq!(ix as usize, k);
        }
    }

    #[test]
    fn test_top_face_is_flat_and_up_facing() {
        let options = MeshOptions::default();
        let mesh = build_shard_mesh(&square_polygon(), &options);
        for (position, normal) in mesh.render.positions.iter().zip(&mesh.render.normals) {
            assert_eq!(position[1], options.surface_height);
            assert_eq!(*normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_uvs_lie_on_the_half_radius_circle() {
        let options = MeshOptions::default();
        let mesh = build_shard_mesh(&square_polygon(), &options);
        for uv in &mesh.render.uvs {
            let dx = uv[0] - 0.5;
            let dy = uv[1] - 0.5;
            let r = (dx * dx + dy * dy).sqrt();
            assert!((r - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_uv_wraparound() {
        // a full lap of the perimeter lands back on the starting UV
        let start = perimeter_uv(0.0);
        let end = perimeter_uv(1.0);
        assert!((start[0] - end[0]).abs() < 1e-6);
        assert!((start[1] - end[1]).abs() < 1e-6);
        assert_eq!(start, [1.0, 0.5]);
    }

    #[test]
    fn test_uv_proportions_advance_with_boundary_length() {
        // quarter of the perimeter is a quarter turn on the UV circle
        let quarter = perimeter_uv(0.25);
        assert!((quarter[0] - 0.5).abs() < 1e-6);
        assert!((quarter[1] - 1.0).abs() < 1e-6);

        let half = perimeter_uv(0.5);
        assert!((half[0] - 0.0).abs() < 1e-6);
        assert!((half[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_polygon() {
        let options = MeshOptions::default();
        let tri = Polygon {
            site: DVec2::new(0.4, 0.4),
            vertices: vec![
                DVec2::new(0.2, 0.2),
                DVec2::new(0.8, 0.2),
                DVec2::new(0.5, 0.8),
            ],
        };
        let mesh = build_shard_mesh(&tri, &options);
        assert_eq!(mesh.render.triangle_count(), 1);
        // triangle prism: 6 side-wall triangles + 1 top cap + 1 bottom cap
        assert_eq!(mesh.collider.triangle_count(), 8);
    }
}
