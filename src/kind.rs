//! Terrain kind tags and their sampling sets.

/// Terrain category tag controlling which procedural painter runs.
///
/// The set is closed: the layout planner only ever produces these eight
/// kinds. The tile factory additionally accepts arbitrary name strings and
/// falls back to a neutral fill, so downstream extension never turns into
/// a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Flowers,
    Dirt,
    Sand,
    Stone,
    Water,
    Wood,
    Snow,
}

impl TileKind {
    /// Base sampling set used by the layout planner.
    pub const ALL: [TileKind; 8] = [
        TileKind::Grass,
        TileKind::Flowers,
        TileKind::Dirt,
        TileKind::Sand,
        TileKind::Stone,
        TileKind::Water,
        TileKind::Wood,
        TileKind::Snow,
    ];

    /// Variants given a small extra sampling bias by the planner.
    pub const RARE: [TileKind; 2] = [TileKind::Flowers, TileKind::Snow];

    /// Returns the canonical name of the kind, as used in the sheet index.
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::Flowers => "flowers",
            TileKind::Dirt => "dirt",
            TileKind::Sand => "sand",
            TileKind::Stone => "stone",
            TileKind::Water => "water",
            TileKind::Wood => "wood",
            TileKind::Snow => "snow",
        }
    }

    /// Parses a kind from its canonical name.
    pub fn from_name(name: &str) -> Option<TileKind> {
        match name {
            "grass" => Some(TileKind::Grass),
            "flowers" => Some(TileKind::Flowers),
            "dirt" => Some(TileKind::Dirt),
            "sand" => Some(TileKind::Sand),
            "stone" => Some(TileKind::Stone),
            "water" => Some(TileKind::Water),
            "wood" => Some(TileKind::Wood),
            "snow" => Some(TileKind::Snow),
            _ => None,
        }
    }
}
