//! Diagram generation pipeline
//!
//! Produces an accepted Voronoi diagram by rejection sampling: sample
//! sites, build the diagram, compute label points, run the degeneracy
//! checks, and start over from scratch on any failure. An attempt is
//! atomic; nothing outside this module ever observes a rejected candidate.

mod label;
mod sites;
mod validate;
mod voronoi;

pub use label::label_point;
pub use sites::sample_sites;
pub use validate::{check_diagram, Rejection, Thresholds};
pub use voronoi::{generate, GeneratorOptions};

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::PuzzleConfig;
use crate::diagram::VoronoiDiagram;
use crate::error::Result;

/// Refinement precision of the per-shard label points
pub const LABEL_PRECISION: f64 = 0.005;

/// Rejected attempts before the degeneracy thresholds are halved
const RELAX_INTERVAL: u32 = 64;

/// Generate an accepted diagram plus its per-shard label points
///
/// Each attempt samples a fresh site set; a rejection discards the whole
/// candidate rather than repairing it. Thresholds relax by half after
/// every [`RELAX_INTERVAL`] consecutive rejections, which bounds the
/// expected worst case while leaving normal generation untouched; for
/// the supported shard counts the first few attempts almost always land.
///
/// The result is deterministic for a given `config.seed` and final for
/// the lifetime of the puzzle instance.
pub fn generate_valid_diagram(config: &PuzzleConfig) -> Result<(VoronoiDiagram, Vec<DVec2>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let options = GeneratorOptions {
        include_border_edges: true,
    };
    let mut thresholds = Thresholds {
        min_edge_length: config.min_edge_length(),
        min_label_clearance: config.min_label_clearance(),
    };
    let separation = config.min_site_separation();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let sites = sample_sites(config.shard_count, separation, &mut rng);
        let diagram = voronoi::generate(&sites, 1.0, 1.0, options)?;
        let labels: Vec<DVec2> = diagram
            .polygons()
            .iter()
            .map(|p| label_point(&p.vertices, LABEL_PRECISION))
            .collect();

        match check_diagram(&diagram, &labels, &thresholds) {
            None => {
                eprintln!(
                    "[Shatter #{}] accepted a {}-shard diagram after {} attempt(s)",
                    config.instance_id, config.shard_count, attempts
                );
                return Ok((diagram, labels));
            }
            Some(rejection) => {
                eprintln!(
                    "[Shatter #{}] attempt {} rejected: {}",
                    config.instance_id, attempts, rejection
                );
                if attempts % RELAX_INTERVAL == 0 {
                    thresholds.min_edge_length *= 0.5;
                    thresholds.min_label_clearance *= 0.5;
                    eprintln!(
                        "[Shatter #{}] {} rejections, relaxing thresholds to {:.4}/{:.4}",
                        config.instance_id,
                        attempts,
                        thresholds.min_edge_length,
                        thresholds.min_label_clearance
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfigBuilder;

    fn config(seed: u64, shards: usize) -> PuzzleConfig {
        PuzzleConfigBuilder::new()
            .seed(seed)
            .shard_count(shards)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_accepted_diagram_passes_all_checks() {
        let config = config(42, 10);
        let (diagram, labels) = generate_valid_diagram(&config).unwrap();

        assert_eq!(diagram.polygon_count(), 10);
        assert_eq!(labels.len(), 10);

        let thresholds = Thresholds {
            min_edge_length: config.min_edge_length(),
            min_label_clearance: config.min_label_clearance(),
        };
        // the accepted candidate must satisfy the unrelaxed thresholds
        // whenever it was found before any relaxation kicked in
        assert_eq!(check_diagram(&diagram, &labels, &thresholds), None);
    }

    #[test]
    fn test_accepted_sites_keep_minimum_separation() {
        let config = config(7, 12);
        let (diagram, _) = generate_valid_diagram(&config).unwrap();
        let sites: Vec<_> = diagram.polygons().iter().map(|p| p.site).collect();
        for i in 0..sites.len() {
            for j in (i + 1)..sites.len() {
                assert!(sites[i].distance(sites[j]) >= config.min_site_separation());
            }
        }
    }

    #[test]
    fn test_tiling_invariant_holds_for_accepted_diagram() {
        let (diagram, _) = generate_valid_diagram(&config(99, 10)).unwrap();
        assert!((diagram.total_area() - 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_labels_are_interior() {
        use crate::geometry::polygon_clearance;
        let (diagram, labels) = generate_valid_diagram(&config(3, 8)).unwrap();
        for (polygon, &label) in diagram.polygons().iter().zip(&labels) {
            assert!(polygon_clearance(label, &polygon.vertices) > 0.0);
        }
    }

    #[test]
    fn test_determinism_for_fixed_seed() {
        let config = config(12345, 10);
        let (d1, l1) = generate_valid_diagram(&config).unwrap();
        let (d2, l2) = generate_valid_diagram(&config).unwrap();

        assert_eq!(l1, l2);
        assert_eq!(d1.polygon_count(), d2.polygon_count());
        for (p1, p2) in d1.polygons().iter().zip(d2.polygons()) {
            assert_eq!(p1.site, p2.site);
            assert_eq!(p1.vertices, p2.vertices);
        }
    }

    #[test]
    fn test_minimum_shard_count_converges() {
        let (diagram, _) = generate_valid_diagram(&config(1, 2)).unwrap();
        assert_eq!(diagram.polygon_count(), 2);
    }
}
