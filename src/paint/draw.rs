//! Per-pixel drawing primitives shared by the tile painters.

use image::{Pixel, Rgba, RgbaImage};

/// Fills the entire canvas with a single color.
pub(super) fn fill(img: &mut RgbaImage, color: Rgba<u8>) {
    for px in img.pixels_mut() {
        *px = color;
    }
}

/// Blends a single pixel src-over onto the canvas.
///
/// Out-of-bounds coordinates are ignored so callers can scatter near tile
/// edges without clamping.
pub(super) fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    img.get_pixel_mut(x as u32, y as u32).blend(&color);
}

/// Blends a filled circle of radius `r` centered at (cx, cy).
pub(super) fn fill_circle(img: &mut RgbaImage, cx: i64, cy: i64, r: i64, color: Rgba<u8>) {
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r * r {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Blends a full-width horizontal band `thickness` pixels tall starting at
/// row `y`.
pub(super) fn hline(img: &mut RgbaImage, y: i64, thickness: u32, color: Rgba<u8>) {
    for row in y..y + i64::from(thickness) {
        for x in 0..i64::from(img.width()) {
            blend_pixel(img, x, row, color);
        }
    }
}
