//! Tile painting: per-kind painters, shared primitives, and the tile
//! factory with its unknown-kind fallback.

mod draw;
mod kinds;

use image::{imageops, Rgba, RgbaImage};
use rand::Rng;

use crate::kind::TileKind;

/// Chance that a freshly painted tile gets the softening blur pass.
const BLUR_CHANCE: f32 = 0.25;

/// Blur sigma, kept low so edges soften without smearing the texture.
const BLUR_SIGMA: f32 = 0.6;

/// Fill used for kind names no painter recognizes.
const FALLBACK_GRAY: Rgba<u8> = Rgba([180, 180, 180, 255]);

/// Paints one `tile_size` x `tile_size` tile for the named kind.
///
/// Any name is accepted: unrecognized names get a flat neutral fill rather
/// than an error, so the pipeline stays total over its input domain. Each
/// tile independently rolls a small chance of a mild blur pass.
pub fn make_tile(kind: &str, tile_size: u32, rng: &mut impl Rng) -> RgbaImage {
    let mut tile = RgbaImage::new(tile_size, tile_size);
    match TileKind::from_name(kind) {
        Some(TileKind::Grass) => kinds::grass(&mut tile, rng),
        Some(TileKind::Flowers) => kinds::flowers(&mut tile, rng),
        Some(TileKind::Dirt) => kinds::dirt(&mut tile, rng),
        Some(TileKind::Sand) => kinds::sand(&mut tile, rng),
        Some(TileKind::Stone) => kinds::stone(&mut tile, rng),
        Some(TileKind::Water) => kinds::water(&mut tile, rng),
        Some(TileKind::Wood) => kinds::wood(&mut tile, rng),
        Some(TileKind::Snow) => kinds::snow(&mut tile, rng),
        None => draw::fill(&mut tile, FALLBACK_GRAY),
    }
    if rng.random::<f32>() < BLUR_CHANCE {
        tile = imageops::blur(&tile, BLUR_SIGMA);
    }
    tile
}
