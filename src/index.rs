//! Kind-to-cell index and the manifest document written next to the sheet.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered mapping from kind name to the grid cells that kind
/// occupies.
///
/// Entry order is the order kinds were first seen during assembly, and
/// cell order within an entry is assembly scan order. Both orders are part
/// of the serialized contract, so this is an association list rather than
/// a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileIndex {
    entries: Vec<(String, Vec<(u32, u32)>)>,
}

impl TileIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `kind` occupies the cell at (col, row), creating the
    /// kind's entry on first occurrence.
    pub fn push(&mut self, kind: &str, col: u32, row: u32) {
        if let Some((_, cells)) = self.entries.iter_mut().find(|(k, _)| k == kind) {
            cells.push((col, row));
        } else {
            self.entries.push((kind.to_string(), vec![(col, row)]));
        }
    }

    /// Cells recorded for `kind`, in scan order.
    pub fn cells(&self, kind: &str) -> Option<&[(u32, u32)]> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, cells)| cells.as_slice())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(u32, u32)])> {
        self.entries
            .iter()
            .map(|(kind, cells)| (kind.as_str(), cells.as_slice()))
    }

    /// Number of distinct kinds recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no cells have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of cells recorded across all kinds.
    pub fn cell_count(&self) -> usize {
        self.entries.iter().map(|(_, cells)| cells.len()).sum()
    }

    /// Reconstructs the row-major kind sequence for a `cols` x `rows` grid.
    ///
    /// Returns `None` unless the recorded cells form an exact partition of
    /// the grid: every cell covered exactly once and none out of range.
    pub fn to_layout(&self, cols: u32, rows: u32) -> Option<Vec<&str>> {
        let total = (cols as usize) * (rows as usize);
        let mut slots: Vec<Option<&str>> = vec![None; total];
        let mut filled = 0usize;
        for (kind, cells) in self.iter() {
            for &(col, row) in cells {
                if col >= cols || row >= rows {
                    return None;
                }
                let i = (row * cols + col) as usize;
                if slots[i].is_some() {
                    return None;
                }
                slots[i] = Some(kind);
                filled += 1;
            }
        }
        if filled != total {
            return None;
        }
        slots.into_iter().collect()
    }
}

impl Serialize for TileIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, cells) in &self.entries {
            map.serialize_entry(kind, cells)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TileIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = TileIndex;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of kind name to [col, row] pairs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((kind, cells)) = access.next_entry::<String, Vec<(u32, u32)>>()? {
                    entries.push((kind, cells));
                }
                Ok(TileIndex { entries })
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

/// The JSON document written next to the sheet image.
///
/// `mapping` keys preserve first-seen order; each cell serializes as a
/// two-element `[col, row]` array. `seed` is the literal seed value, or
/// `null` for entropy-seeded (non-reproducible) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetManifest {
    pub tile_size: u32,
    pub cols: u32,
    pub rows: u32,
    pub mapping: TileIndex,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> TileIndex {
        let mut index = TileIndex::new();
        index.push("water", 0, 0);
        index.push("grass", 1, 0);
        index.push("water", 0, 1);
        index.push("grass", 1, 1);
        index
    }

    #[test]
    fn test_push_groups_by_first_seen() {
        let index = sample_index();
        let kinds: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec!["water", "grass"]);
        assert_eq!(index.cells("water"), Some(&[(0, 0), (0, 1)][..]));
        assert_eq!(index.cells("grass"), Some(&[(1, 0), (1, 1)][..]));
        assert_eq!(index.cells("snow"), None);
        assert_eq!(index.cell_count(), 4);
    }

    #[test]
    fn test_to_layout_round_trip() {
        let index = sample_index();
        let layout = index.to_layout(2, 2).unwrap();
        assert_eq!(layout, vec!["water", "grass", "water", "grass"]);
    }

    #[test]
    fn test_to_layout_rejects_gaps_and_duplicates() {
        let mut gap = TileIndex::new();
        gap.push("grass", 0, 0);
        assert_eq!(gap.to_layout(2, 2), None);

        let mut dup = sample_index();
        dup.push("snow", 1, 1);
        assert_eq!(dup.to_layout(2, 2), None);

        let mut oob = sample_index();
        oob.push("snow", 2, 0);
        assert_eq!(oob.to_layout(2, 2), None);
    }

    #[test]
    fn test_serialize_preserves_order_and_pair_shape() {
        let index = sample_index();
        let json = serde_json::to_string(&index).unwrap();
        let water_at = json.find("\"water\"").unwrap();
        let grass_at = json.find("\"grass\"").unwrap();
        assert!(water_at < grass_at);
        assert!(json.contains("[[0,0],[0,1]]"));
    }

    #[test]
    fn test_manifest_json_round_trip() {
        let manifest = SheetManifest {
            tile_size: 64,
            cols: 2,
            rows: 2,
            mapping: sample_index(),
            seed: Some(42),
        };
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: SheetManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }

    #[test]
    fn test_manifest_absent_seed_is_null() {
        let manifest = SheetManifest {
            tile_size: 64,
            cols: 2,
            rows: 2,
            mapping: sample_index(),
            seed: None,
        };
        let value = serde_json::to_value(&manifest).unwrap();
        assert!(value["seed"].is_null());
    }
}
