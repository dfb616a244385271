//! The atom palette.
//!
//! Loads the buildable atom kinds from embedded JSON: symbol, display
//! name and CPK-style hex color per kind.

use bondlab_core::Color;
use serde::Deserialize;
use std::collections::HashMap;

/// Embed the palette data at compile time.
const ATOM_KINDS_JSON: &str = include_str!("../data/atom-kinds.json");

/// Visual radius of every atom, in pixels. Uniform across the palette.
pub const ATOM_RADIUS: f32 = 25.0;

/// Raw JSON kind structure.
#[derive(Debug, Deserialize)]
struct RawKind {
    symbol: String,
    name: String,
    color: String,
}

/// Root structure for the JSON file.
#[derive(Debug, Deserialize)]
struct PaletteJson {
    kinds: Vec<RawKind>,
}

/// A buildable atom kind.
#[derive(Debug, Clone)]
pub struct AtomKind {
    pub symbol: String,
    pub name: String,
    pub color: Color,
}

/// The fixed set of atom kinds the palette offers, in slot order.
#[derive(Debug, Clone)]
pub struct AtomPalette {
    kinds: Vec<AtomKind>,
    by_symbol: HashMap<String, usize>,
}

impl AtomPalette {
    /// Load the embedded palette.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(ATOM_KINDS_JSON)
    }

    /// Parse a palette from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: PaletteJson = serde_json::from_str(json)?;
        let mut kinds = Vec::with_capacity(raw.kinds.len());
        let mut by_symbol = HashMap::new();

        for (i, rk) in raw.kinds.into_iter().enumerate() {
            by_symbol.insert(rk.symbol.clone(), i);
            kinds.push(AtomKind {
                color: Color::from_hex(&rk.color).unwrap_or(Color::rgb(0.7, 0.7, 0.7)),
                symbol: rk.symbol,
                name: rk.name,
            });
        }

        Ok(Self { kinds, by_symbol })
    }

    /// Kind in the given palette slot.
    pub fn get(&self, slot: usize) -> Option<&AtomKind> {
        self.kinds.get(slot)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&AtomKind> {
        self.by_symbol.get(symbol).map(|&i| &self.kinds[i])
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomKind> {
        self.kinds.iter()
    }
}
