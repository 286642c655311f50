//! ShatterPuzzle main structure

use glam::DVec2;

use crate::config::PuzzleConfig;
use crate::diagram::{Polygon, VoronoiDiagram};
use crate::error::{Result, ShatterError};
use crate::generation::generate_valid_diagram;
use crate::mesh::{build_shard_mesh, MeshOptions, ShardMesh};

/// A complete shattered-mirror puzzle instance
///
/// Owns the accepted Voronoi diagram and the per-shard label points.
/// Generation runs once, to completion, at construction; the diagram is
/// immutable afterwards and mesh builders only copy from it.
///
/// # Examples
///
/// ```rust,no_run
/// use shattered_mirror::*;
///
/// let config = PuzzleConfigBuilder::new()
///     .seed(42)
///     .shard_count(10)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let puzzle = ShatterPuzzle::generate(config).unwrap();
/// println!("Generated {} shards", puzzle.shard_count());
///
/// let meshes = puzzle.shard_meshes(&MeshOptions::default());
/// assert_eq!(meshes.len(), puzzle.shard_count());
/// ```
#[derive(Debug, Clone)]
pub struct ShatterPuzzle {
    /// Configuration used to generate this puzzle
    config: PuzzleConfig,

    /// The accepted diagram (one polygon per shard, indexed by site)
    diagram: VoronoiDiagram,

    /// Interior label point of each shard, in site order
    label_points: Vec<DVec2>,
}

impl ShatterPuzzle {
    /// Generate a puzzle from configuration
    ///
    /// Runs the site-sampling/validation loop until a diagram is accepted.
    /// Deterministic: the same configuration always produces the same
    /// puzzle.
    pub fn generate(config: PuzzleConfig) -> Result<Self> {
        let (diagram, label_points) = generate_valid_diagram(&config)?;
        Ok(Self {
            config,
            diagram,
            label_points,
        })
    }

    /// Get the configuration used to generate this puzzle
    #[inline]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Number of shards
    #[inline]
    pub fn shard_count(&self) -> usize {
        self.diagram.polygon_count()
    }

    /// The accepted diagram
    #[inline]
    pub fn diagram(&self) -> &VoronoiDiagram {
        &self.diagram
    }

    /// Get a shard's polygon by index
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn polygon(&self, shard: usize) -> Option<&Polygon> {
        self.diagram.polygon(shard)
    }

    /// Get a shard's interior label point by index
    #[inline]
    pub fn label_point(&self, shard: usize) -> Option<DVec2> {
        self.label_points.get(shard).copied()
    }

    /// All label points, in shard order
    #[inline]
    pub fn label_points(&self) -> &[DVec2] {
        &self.label_points
    }

    /// Build render and collider meshes for every shard
    pub fn shard_meshes(&self, options: &MeshOptions) -> Vec<ShardMesh> {
        self.diagram
            .polygons()
            .iter()
            .map(|polygon| build_shard_mesh(polygon, options))
            .collect()
    }

    /// Build the meshes for a single shard
    ///
    /// # Errors
    ///
    /// Returns `ShardNotFound` if the index is out of bounds.
    pub fn shard_mesh(&self, shard: usize, options: &MeshOptions) -> Result<ShardMesh> {
        let polygon = self
            .diagram
            .polygon(shard)
            .ok_or(ShatterError::ShardNotFound(shard))?;
        Ok(build_shard_mesh(polygon, options))
    }

    /// Render the accepted diagram as an SVG string for offline debugging
    ///
    /// Best-effort diagnostic side channel; no consumer contract.
    pub fn to_svg(&self) -> String {
        crate::svg::diagram_to_svg(&self.diagram)
    }
}
