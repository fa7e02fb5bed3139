//! Serialization of generated sheets: a lossless RGBA PNG plus the JSON
//! manifest the rendering side consumes.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbaImage};
use thiserror::Error;

use crate::index::SheetManifest;
use crate::sheet::Sheet;

/// Errors that can occur while writing or reading sheet artifacts.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Manifest encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for PNG output.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Writes the sheet image as an RGBA PNG.
///
/// # Arguments
/// * `image` - The composited sheet raster
/// * `path` - Output file path
/// * `options` - Compression settings
pub fn export_sheet_png(
    image: &RgbaImage,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

/// Writes the manifest as pretty-printed JSON.
pub fn export_manifest_json(manifest: &SheetManifest, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, manifest)?;
    Ok(())
}

/// Reads a manifest document back from disk.
///
/// Useful for downstream drivers that need the kind-to-cell mapping, and
/// for verifying a written sheet round-trips.
pub fn load_manifest(path: &Path) -> Result<SheetManifest, ExportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes both artifacts for a generated sheet.
pub fn save_sheet(
    sheet: &Sheet,
    png_path: &Path,
    json_path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    export_sheet_png(&sheet.image, png_path, options)?;
    export_manifest_json(&sheet.manifest(), json_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{generate_sheet, SheetParams};
    use tempfile::tempdir;

    #[test]
    fn test_save_sheet_writes_both_artifacts() {
        let sheet = generate_sheet(&SheetParams::with_seed(42));
        let dir = tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        let json = dir.path().join("sheet.json");

        save_sheet(&sheet, &png, &json, &ExportOptions::default()).unwrap();

        assert!(png.exists());
        assert!(json.exists());

        let reloaded = image::open(&png).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (512, 512));
    }

    #[test]
    fn test_manifest_round_trips_through_disk() {
        let sheet = generate_sheet(&SheetParams::with_seed(7));
        let dir = tempdir().unwrap();
        let json = dir.path().join("sheet.json");

        export_manifest_json(&sheet.manifest(), &json).unwrap();
        let back = load_manifest(&json).unwrap();
        assert_eq!(back, sheet.manifest());
    }

    #[test]
    fn test_unseeded_manifest_serializes_null_seed() {
        let sheet = generate_sheet(&SheetParams::default());
        let dir = tempdir().unwrap();
        let json = dir.path().join("sheet.json");

        export_manifest_json(&sheet.manifest(), &json).unwrap();
        let text = std::fs::read_to_string(&json).unwrap();
        assert!(text.contains("\"seed\": null"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let sheet = generate_sheet(&SheetParams::with_seed(1));
        let dir = tempdir().unwrap();
        let png = dir.path().join("nope").join("sheet.png");

        let result = export_sheet_png(&sheet.image, &png, &ExportOptions::default());
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
