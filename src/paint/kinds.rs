//! One painting routine per terrain kind.
//!
//! Every painter lays an opaque base coat first and blends its accents on
//! top, so tiles leave the factory fully opaque. Accent counts and colors
//! are tuned for a painterly placeholder look at 64x64.

use image::{Rgba, RgbaImage};
use rand::Rng;

use super::draw::{blend_pixel, fill, fill_circle, hline};

/// Accent colors for flower dots.
const FLOWER_PALETTE: [[u8; 3]; 4] = [
    [235, 100, 140],
    [255, 210, 120],
    [180, 140, 255],
    [255, 180, 220],
];

/// Mid-green base with light/dark speckle and a faint shadow band across
/// the bottom third.
pub(super) fn grass(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([95, 170, 95, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..70 {
        let x = i64::from(rng.random_range(0..w));
        let y = i64::from(rng.random_range(0..h));
        let r = (70 + rng.random_range(-5..=5)) as u8;
        let g = (135 + rng.random_range(-20..=20)) as u8;
        blend_pixel(tile, x, y, Rgba([r, g, 70, 200]));
    }
    for y in (h * 7 / 10)..h {
        for x in (0..w).step_by(6) {
            if rng.random::<f64>() < 0.08 {
                blend_pixel(tile, i64::from(x), i64::from(y), Rgba([60, 120, 60, 24]));
            }
        }
    }
}

/// Brown base scattered with small soft-edged darker blotches.
pub(super) fn dirt(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([139, 105, 80, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..40 {
        let r = rng.random_range(1..=3);
        let x = i64::from(rng.random_range(0..w));
        let y = i64::from(rng.random_range(0..h));
        let shade = (90 + rng.random_range(-10..=10)) as u8;
        fill_circle(tile, x, y, r, Rgba([shade, 70, 55, 170]));
    }
}

/// Pale tan base with a light grain speckle.
pub(super) fn sand(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([230, 220, 170, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..50 {
        let x = i64::from(rng.random_range(0..w));
        let y = i64::from(rng.random_range(0..h));
        let r = (210 + rng.random_range(-10..=10)) as u8;
        blend_pixel(tile, x, y, Rgba([r, 190, 140, 200]));
    }
}

/// Gray base with a few larger mineral blotches, inset from the edges.
pub(super) fn stone(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([150, 150, 150, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..18 {
        let r = rng.random_range(3..=6);
        let x = i64::from(rng.random_range(4..w - 4));
        let y = i64::from(rng.random_range(4..h - 4));
        let shade = (120 + rng.random_range(-10..=10)) as u8;
        fill_circle(tile, x, y, r, Rgba([shade, 120, 120, 240]));
    }
}

/// Blue base with translucent ripple bands and a few foam speckles.
pub(super) fn water(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([70, 130, 200, 255]));
    let (w, h) = tile.dimensions();
    for y in (2..h).step_by(8) {
        hline(tile, i64::from(y), 2, Rgba([200, 220, 255, 120]));
    }
    for _ in 0..12 {
        let x = i64::from(rng.random_range(0..w));
        let y = i64::from(rng.random_range(0..h));
        blend_pixel(tile, x, y, Rgba([240, 250, 255, 120]));
    }
}

/// Warm-brown base with darker grain lines and a few knots.
pub(super) fn wood(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([160, 110, 70, 255]));
    let (w, h) = tile.dimensions();
    for y in (0..h).step_by(10) {
        let shade = (110 + rng.random_range(-10..=10)) as u8;
        hline(tile, i64::from(y), 2, Rgba([shade, 80, 50, 255]));
    }
    for _ in 0..6 {
        let x = i64::from(rng.random_range(6..w - 5));
        let y = i64::from(rng.random_range(6..h - 5));
        let r = rng.random_range(1..=3);
        fill_circle(tile, x, y, r, Rgba([120, 90, 60, 200]));
    }
}

/// Near-white base with subtle white blotches.
pub(super) fn snow(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([240, 245, 255, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..26 {
        let r = rng.random_range(1..=2);
        let x = i64::from(rng.random_range(0..w));
        let y = i64::from(rng.random_range(0..h));
        fill_circle(tile, x, y, r, Rgba([255, 255, 255, 220]));
    }
}

/// Green base dotted with small flower accents from a fixed palette.
pub(super) fn flowers(tile: &mut RgbaImage, rng: &mut impl Rng) {
    fill(tile, Rgba([100, 170, 100, 255]));
    let (w, h) = tile.dimensions();
    for _ in 0..12 {
        let x = i64::from(rng.random_range(5..w - 5));
        let y = i64::from(rng.random_range(5..h - 5));
        let [r, g, b] = FLOWER_PALETTE[rng.random_range(0..FLOWER_PALETTE.len())];
        fill_circle(tile, x, y, 2, Rgba([r, g, b, 255]));
    }
}
