//! Procedural terrain tile-sheet generator.
//!
//! This crate paints an 8x8 grid of 64x64-pixel terrain tiles (grass,
//! flowers, dirt, sand, stone, water, wood, snow), packs them into one
//! 512x512 RGBA sheet, and writes the sheet as a PNG together with a JSON
//! index mapping each kind to the grid cells it occupies. A fixed seed
//! reproduces the whole sheet byte for byte.

pub mod atlas;
pub mod export;
pub mod index;
pub mod kind;
pub mod layout;
pub mod paint;
pub mod sheet;

pub use atlas::{assemble, COLS, ROWS, SHEET_HEIGHT, SHEET_WIDTH, TILE};
pub use export::{
    export_manifest_json, export_sheet_png, load_manifest, save_sheet, ExportError, ExportOptions,
};
pub use index::{SheetManifest, TileIndex};
pub use kind::TileKind;
pub use layout::plan_layout;
pub use paint::make_tile;
pub use sheet::{generate_sheet, Sheet, SheetParams};
