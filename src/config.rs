//! Puzzle configuration and builder
//!
//! This module provides configuration types for deterministic shattered-mirror
//! generation, plus the persisted host setting that selects the shard count.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShatterError};

/// Smallest playable shard count
pub const MIN_SHARDS: usize = 2;

/// Largest supported shard count
pub const MAX_SHARDS: usize = 25;

/// Shard count used when the persisted setting is missing or out of range
pub const DEFAULT_SHARDS: usize = 10;

/// Minimum pairwise site distance for the default 10-shard puzzle,
/// as a fraction of the unit square
const SITE_SEPARATION: f64 = 1.0 / 128.0;

/// Shortest allowed polygon edge for the default 10-shard puzzle
const EDGE_LENGTH_FLOOR: f64 = 0.05;

/// Minimum distance between an internal edge and an adjacent label point
/// for the default 10-shard puzzle
const LABEL_CLEARANCE_FLOOR: f64 = 0.025;

/// Persisted host configuration
///
/// The host loads this once at startup from its settings store; the only
/// field is the requested shard count. Out-of-range values resolve to
/// [`DEFAULT_SHARDS`] rather than failing.
///
/// # Example
///
/// ```rust
/// use shattered_mirror::PuzzleSettings;
///
/// let settings = PuzzleSettings { shards_to_generate: 17 };
/// assert_eq!(settings.resolved_shard_count(), 17);
///
/// let broken = PuzzleSettings { shards_to_generate: -5 };
/// assert_eq!(broken.resolved_shard_count(), 10);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSettings {
    /// Requested number of shards, valid range 2..=25
    pub shards_to_generate: i64,
}

impl PuzzleSettings {
    /// Resolve the stored value to a usable shard count
    ///
    /// Values outside `2..=25` fall back to [`DEFAULT_SHARDS`].
    pub fn resolved_shard_count(&self) -> usize {
        if (MIN_SHARDS as i64..=MAX_SHARDS as i64).contains(&self.shards_to_generate) {
            self.shards_to_generate as usize
        } else {
            DEFAULT_SHARDS
        }
    }
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            shards_to_generate: DEFAULT_SHARDS as i64,
        }
    }
}

/// Configuration for deterministic puzzle generation
///
/// The same configuration always produces the identical accepted diagram,
/// which makes generated puzzles reproducible across client and server.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Random seed for deterministic diagram generation
    pub seed: u64,

    /// Number of mirror shards to generate (2..=25)
    pub shard_count: usize,

    /// Host-supplied identifier, used only to tag diagnostic output
    pub instance_id: u32,
}

impl PuzzleConfig {
    /// Scale applied to the degeneracy thresholds
    ///
    /// Counts above the 10-shard default produce smaller cells, so the
    /// thresholds are halved to keep the rejection loop converging.
    fn threshold_scale(&self) -> f64 {
        if self.shard_count <= DEFAULT_SHARDS {
            1.0
        } else {
            0.5
        }
    }

    /// Minimum pairwise distance between sampled sites
    #[inline]
    pub fn min_site_separation(&self) -> f64 {
        SITE_SEPARATION * self.threshold_scale()
    }

    /// Shortest allowed edge between consecutive polygon vertices
    #[inline]
    pub fn min_edge_length(&self) -> f64 {
        EDGE_LENGTH_FLOOR * self.threshold_scale()
    }

    /// Minimum distance between an internal edge and either adjacent
    /// polygon's label point
    #[inline]
    pub fn min_label_clearance(&self) -> f64 {
        LABEL_CLEARANCE_FLOOR * self.threshold_scale()
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating a [`PuzzleConfig`] with validation
///
/// # Example
///
/// ```rust
/// use shattered_mirror::*;
///
/// // Use defaults (random seed, 10 shards)
/// let config = PuzzleConfigBuilder::new().build().unwrap();
/// assert_eq!(config.shard_count, 10);
///
/// // Customize
/// let config = PuzzleConfigBuilder::new()
///     .seed(12345)
///     .shard_count(17)
///     .unwrap()
///     .instance_id(3)
///     .build()
///     .unwrap();
/// assert_eq!(config.shard_count, 17);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleConfigBuilder {
    seed: Option<u64>,
    shard_count: usize,
    instance_id: u32,
}

impl PuzzleConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random (generated from thread_rng at build time)
    /// - shard_count: 10
    /// - instance_id: 0
    pub fn new() -> Self {
        Self {
            seed: None,
            shard_count: DEFAULT_SHARDS,
            instance_id: 0,
        }
    }

    /// Set the random seed for diagram generation
    ///
    /// Using the same seed with the same shard count will produce an
    /// identical accepted diagram every time.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shard count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count is outside `2..=25`.
    pub fn shard_count(mut self, count: usize) -> Result<Self> {
        if !(MIN_SHARDS..=MAX_SHARDS).contains(&count) {
            return Err(ShatterError::InvalidConfig(format!(
                "shard count must be in {}..={} (got {})",
                MIN_SHARDS, MAX_SHARDS, count
            )));
        }
        self.shard_count = count;
        Ok(self)
    }

    /// Set the shard count from the raw persisted setting
    ///
    /// Unlike [`shard_count`](Self::shard_count), this never fails:
    /// out-of-range values resolve to [`DEFAULT_SHARDS`].
    pub fn shards_from_setting(mut self, value: i64) -> Self {
        self.shard_count = PuzzleSettings {
            shards_to_generate: value,
        }
        .resolved_shard_count();
        self
    }

    /// Apply a loaded [`PuzzleSettings`]
    pub fn settings(self, settings: &PuzzleSettings) -> Self {
        self.shards_from_setting(settings.shards_to_generate)
    }

    /// Set the host-supplied instance identifier used in diagnostic output
    pub fn instance_id(mut self, id: u32) -> Self {
        self.instance_id = id;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<PuzzleConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(PuzzleConfig {
            seed,
            shard_count: self.shard_count,
            instance_id: self.instance_id,
        })
    }
}

impl Default for PuzzleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
