//! Voronoi-shattered mirror puzzle generation
//!
//! A standalone library for generating "shattered mirror" puzzles: a
//! mirror broken into irregular polygonal shards via a bounded Voronoi
//! diagram, with per-shard render and collider meshes, suitable for use
//! with any game engine (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shattered_mirror::*;
//!
//! // Generate a puzzle
//! let config = PuzzleConfigBuilder::new()
//!     .seed(42)
//!     .shard_count(10).unwrap()
//!     .build().unwrap();
//!
//! let puzzle = ShatterPuzzle::generate(config).unwrap();
//!
//! // Build meshes for rendering and collision
//! let meshes = puzzle.shard_meshes(&MeshOptions::default());
//! println!("Generated {} shards", meshes.len());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for the configuration and the
//!   persisted host settings

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod diagram;
pub mod generation;
pub mod mesh;
pub mod puzzle;
pub mod session;
pub mod svg;

// Re-export core types for convenience
pub use error::{Result, ShatterError};
pub use config::{
    PuzzleConfig, PuzzleConfigBuilder, PuzzleSettings, DEFAULT_SHARDS, MAX_SHARDS, MIN_SHARDS,
};
pub use diagram::{Edge, Polygon, VoronoiDiagram};
pub use generation::{generate_valid_diagram, GeneratorOptions, Rejection, Thresholds};
pub use mesh::{
    build_shard_mesh, collider_trimesh, perimeter_uv, world_point, MeshData, MeshOptions,
    ShardMesh,
};
pub use puzzle::ShatterPuzzle;
pub use session::{
    AudioCue, BorderSide, Contact, ContactTracker, PuzzleSession, SessionEvent, SolveAnimation,
    SolvePhase,
};
pub use svg::diagram_to_svg;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
