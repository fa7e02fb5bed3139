//! Sheet assembly: paints each planned cell and composites it into the
//! full atlas canvas while accumulating the kind index.

use image::{imageops, RgbaImage};
use rand::Rng;

use crate::index::TileIndex;
use crate::kind::TileKind;
use crate::paint::make_tile;

/// Edge length of one tile in pixels.
pub const TILE: u32 = 64;
/// Grid width in tiles.
pub const COLS: u32 = 8;
/// Grid height in tiles.
pub const ROWS: u32 = 8;
/// Full sheet width in pixels.
pub const SHEET_WIDTH: u32 = COLS * TILE;
/// Full sheet height in pixels.
pub const SHEET_HEIGHT: u32 = ROWS * TILE;

/// Composites one painted tile per layout cell into a full sheet.
///
/// Cells are visited in row-major order (`col = i % COLS`,
/// `row = i / COLS`). Each tile is pasted at its cell offset using the
/// tile's own alpha as the blend mask, and the cell is appended to its
/// kind's index entry. Flattening the returned index back into row-major
/// order reconstructs the layout exactly.
pub fn assemble(layout: &[TileKind], rng: &mut impl Rng) -> (RgbaImage, TileIndex) {
    let mut sheet = RgbaImage::new(SHEET_WIDTH, SHEET_HEIGHT);
    let mut index = TileIndex::new();

    for (i, kind) in layout.iter().enumerate() {
        let col = i as u32 % COLS;
        let row = i as u32 / COLS;
        let tile = make_tile(kind.name(), TILE, rng);
        imageops::overlay(
            &mut sheet,
            &tile,
            i64::from(col * TILE),
            i64::from(row * TILE),
        );
        index.push(kind.name(), col, row);
    }

    (sheet, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::plan_layout;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sheet_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let layout = plan_layout((COLS * ROWS) as usize, &mut rng);
        let (sheet, _) = assemble(&layout, &mut rng);
        assert_eq!(sheet.dimensions(), (512, 512));
    }

    #[test]
    fn test_index_partitions_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let layout = plan_layout((COLS * ROWS) as usize, &mut rng);
        let (_, index) = assemble(&layout, &mut rng);
        assert_eq!(index.cell_count(), 64);
        assert!(index.to_layout(COLS, ROWS).is_some());
    }

    #[test]
    fn test_index_round_trips_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let layout = plan_layout((COLS * ROWS) as usize, &mut rng);
        let (_, index) = assemble(&layout, &mut rng);
        let names: Vec<&str> = layout.iter().map(|k| k.name()).collect();
        assert_eq!(index.to_layout(COLS, ROWS).unwrap(), names);
    }

    #[test]
    fn test_sheet_fully_opaque() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let layout = plan_layout((COLS * ROWS) as usize, &mut rng);
        let (sheet, _) = assemble(&layout, &mut rng);
        assert!(sheet.pixels().all(|p| p[3] == 255));
    }
}
