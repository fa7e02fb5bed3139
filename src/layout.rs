//! Randomized kind assignment across the tile grid.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::kind::TileKind;

/// Probability that a cell samples from the rare-variant set instead of
/// the base set.
const RARE_CHANCE: f64 = 0.12;

/// Plans which kind occupies each of `cells` grid cells.
///
/// Each cell is sampled independently: a small bias toward the rare
/// variants, otherwise uniform over the base set (the rare kinds remain
/// eligible there too, the bias only nudges them upward). The sequence is
/// then shuffled in place with the same RNG so the per-index sampling
/// leaves no positional correlation.
pub fn plan_layout(cells: usize, rng: &mut impl Rng) -> Vec<TileKind> {
    let mut kinds = Vec::with_capacity(cells);
    for _ in 0..cells {
        let kind = if rng.random::<f64>() < RARE_CHANCE {
            TileKind::RARE[rng.random_range(0..TileKind::RARE.len())]
        } else {
            TileKind::ALL[rng.random_range(0..TileKind::ALL.len())]
        };
        kinds.push(kind);
    }
    kinds.shuffle(rng);
    kinds
}
