//! Atlasgen CLI - terrain tile-sheet generator.
//!
//! Paint a whimsical terrain tile sheet and write the PNG plus the JSON
//! index consumed by the rendering engine.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use atlasgen::{
    generate_sheet, save_sheet, ExportOptions, SheetParams, COLS, ROWS, SHEET_HEIGHT, SHEET_WIDTH,
    TILE,
};

/// Procedural terrain tile-sheet generator.
#[derive(Parser)]
#[command(name = "atlasgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Random seed for reproducible generation.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output PNG filename.
    #[arg(short, long, default_value = "terrain_sheet.png")]
    out: PathBuf,

    /// Output JSON index filename.
    #[arg(short, long, default_value = "terrain_sheet.json")]
    json: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    println!("Atlasgen - Terrain Tile-Sheet Generator");
    println!("=======================================");
    println!(
        "Grid: {}x{} tiles of {}x{} px ({}x{} sheet)",
        COLS, ROWS, TILE, TILE, SHEET_WIDTH, SHEET_HEIGHT
    );
    match cli.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: none (system entropy)"),
    }

    let start = Instant::now();

    let sheet = generate_sheet(&SheetParams { seed: cli.seed });

    save_sheet(&sheet, &cli.out, &cli.json, &ExportOptions::default()).unwrap_or_else(|e| {
        eprintln!("Error writing sheet artifacts: {}", e);
        std::process::exit(1);
    });

    println!("Saved {} and {}", cli.out.display(), cli.json.display());
    println!("Done in {:.2?}", start.elapsed());
}
