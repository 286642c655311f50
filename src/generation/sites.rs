//! Site sampling for the unit square
//!
//! Sites are drawn uniformly at random and accepted by rejection: a
//! candidate joins the set only if it keeps the minimum pairwise
//! separation. The caller owns the RNG, so sampling is deterministic for a
//! given seed.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Sample `count` sites in `[0,1)x[0,1)` with pairwise distance
/// `>= min_separation`
///
/// Loops until enough candidates survive; for the counts this crate
/// supports (<= 25) against a separation of at most 1/128, acceptance is
/// near-certain per draw.
pub fn sample_sites(count: usize, min_separation: f64, rng: &mut ChaCha8Rng) -> Vec<DVec2> {
    let mut sites: Vec<DVec2> = Vec::with_capacity(count);
    while sites.len() < count {
        let candidate = DVec2::new(rng.gen::<f64>(), rng.gen::<f64>());
        if sites.iter().any(|s| s.distance(candidate) < min_separation) {
            continue;
        }
        sites.push(candidate);
    }
    sites
}
