//! Extruded collider volume
//!
//! The collider for a shard is a closed prism over the polygon footprint
//! between two extrusion heights: two side-wall triangles per polygon edge,
//! plus top and bottom caps fanned from vertex 0. Closure matters: overlap
//! detection between adjacent shards relies on the volume being a solid,
//! not an open shell.

use glam::DVec2;
use parry3d::math::Point;
use parry3d::shape::TriMesh;

use super::{world_point, MeshData, MeshOptions};
use crate::error::{Result, ShatterError};

/// Build the closed prism between `collider_bottom` and `collider_top`
///
/// Cap triangles are emitted for every polygon edge that does not touch
/// vertex 0; fanning from vertex 0 then covers the whole footprint with
/// K-2 triangles per cap.
pub(super) fn collider_prism(vertices: &[DVec2], options: &MeshOptions) -> MeshData {
    let n = vertices.len();
    let top = options.collider_top;
    let bottom = options.collider_bottom;

    let mut mesh = MeshData::default();
    {
        let mut push = |p: DVec2, height: f32| {
            mesh.positions.push(world_point(p, height, options));
            mesh.normals.push([0.0, 1.0, 0.0]);
            mesh.uvs.push([0.0, 0.0]);
            mesh.indices.push(mesh.positions.len() as u32 - 1);
        };

        for i in 0..n {
            let j = (i + 1) % n;

            // side wall between the two extrusion heights
            push(vertices[i], bottom);
            push(vertices[i], top);
            push(vertices[j], top);

            push(vertices[j], top);
            push(vertices[j], bottom);
            push(vertices[i], bottom);

            if i != 0 && j != 0 {
                // top and bottom caps, fanned from vertex 0
                push(vertices[0], top);
                push(vertices[j], top);
                push(vertices[i], top);

                push(vertices[0], bottom);
                push(vertices[i], bottom);
                push(vertices[j], bottom);
            }
        }
    }
    mesh
}

/// Convert collider mesh data into a parry trimesh
///
/// Gives hosts a ready collision shape for the extruded solid.
///
/// # Errors
///
/// Returns `InvalidMesh` if parry rejects the buffers (e.g. empty input).
pub fn collider_trimesh(mesh: &MeshData) -> Result<TriMesh> {
    let vertices: Vec<Point<f32>> = mesh
        .positions
        .iter()
        .map(|p| Point::new(p[0], p[1], p[2]))
        .collect();
    let indices: Vec<[u32; 3]> = mesh
        .indices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    if indices.is_empty() {
        return Err(ShatterError::InvalidMesh(
            "collider trimesh rejected: empty input".to_string(),
        ));
    }

    Ok(TriMesh::new(vertices, indices))
}
