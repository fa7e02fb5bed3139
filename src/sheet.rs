//! Top-level sheet generation: plans a layout and assembles the atlas
//! under a single random stream.

use image::RgbaImage;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::atlas::{assemble, COLS, ROWS, TILE};
use crate::index::{SheetManifest, TileIndex};
use crate::layout::plan_layout;

/// Parameters for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetParams {
    /// Seed for reproducible generation; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl SheetParams {
    /// Creates parameters fixed to the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// A generated sheet: the composited image plus its kind index and the
/// seed it was built from.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub image: RgbaImage,
    pub index: TileIndex,
    pub seed: Option<u64>,
}

impl Sheet {
    /// Builds the manifest document describing this sheet.
    pub fn manifest(&self) -> SheetManifest {
        SheetManifest {
            tile_size: TILE,
            cols: COLS,
            rows: ROWS,
            mapping: self.index.clone(),
            seed: self.seed,
        }
    }
}

/// Generates a full sheet.
///
/// One ChaCha stream drives the whole run: first the layout plan, then
/// every painter and blur roll in row-major cell order. A fixed seed
/// therefore reproduces the sheet byte for byte, not just the layout.
pub fn generate_sheet(params: &SheetParams) -> Sheet {
    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let layout = plan_layout((COLS * ROWS) as usize, &mut rng);
    let (image, index) = assemble(&layout, &mut rng);

    Sheet {
        image,
        index,
        seed: params.seed,
    }
}
