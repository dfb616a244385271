//! Level definitions and the line-oriented level source format.
//!
//! One level per line, exactly four comma-separated fields, no escaping:
//! `name,formula,displayFormula,description`. Any load failure falls
//! back to the built-in default set so play can continue.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Embed the shipped level set at compile time.
const BUNDLED_LEVELS: &str = include_str!("../data/levels.txt");

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level on line {line}: expected 4 comma-separated fields")]
    Malformed { line: usize },
    #[error("level source contains no levels")]
    Empty,
}

/// One target molecule the player must reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    /// Target symbols as an order-insensitive sequence, e.g. "HHO".
    pub formula: String,
    /// Human-readable label, e.g. "H2O".
    pub display_formula: String,
    /// Hint text.
    pub description: String,
}

/// An immutable, ordered level set.
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<Level>,
}

impl Levels {
    /// Parse a level source. Strict: one malformed line fails the load.
    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        for (i, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                return Err(LevelError::Malformed { line: i + 1 });
            }
            levels.push(Level {
                name: fields[0].to_string(),
                formula: fields[1].to_string(),
                display_formula: fields[2].to_string(),
                description: fields[3].to_string(),
            });
        }
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { levels })
    }

    /// Load a level file, substituting the built-in defaults on any
    /// failure. A broken level file must never prevent play.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let result = fs::read_to_string(path)
            .map_err(LevelError::from)
            .and_then(|source| Self::parse(&source));
        match result {
            Ok(levels) => {
                log::info!("Loaded {} levels from {}", levels.len(), path.display());
                levels
            }
            Err(err) => {
                log::warn!("Level load failed ({err}); using default levels");
                Self::builtin()
            }
        }
    }

    /// The compiled-in level set shipped with the game.
    pub fn bundled() -> Self {
        match Self::parse(BUNDLED_LEVELS) {
            Ok(levels) => levels,
            Err(err) => {
                log::warn!("Bundled level data failed to parse ({err}); using default levels");
                Self::builtin()
            }
        }
    }

    /// The two hard-coded fallback levels.
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                Level {
                    name: "Water".into(),
                    formula: "HHO".into(),
                    display_formula: "H2O".into(),
                    description: "Essential for life, forms oceans and rivers.".into(),
                },
                Level {
                    name: "Carbon Dioxide".into(),
                    formula: "COO".into(),
                    display_formula: "CO2".into(),
                    description: "Greenhouse gas, used by plants in photosynthesis.".into(),
                },
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_source() {
        let source = "Water,HHO,H2O,Good stuff.\nAmmonia,NHHH,NH3,Pungent.\n";
        let levels = Levels::parse(source).unwrap();
        assert_eq!(levels.len(), 2);
        let water = levels.get(0).unwrap();
        assert_eq!(water.name, "Water");
        assert_eq!(water.formula, "HHO");
        assert_eq!(water.display_formula, "H2O");
        assert_eq!(water.description, "Good stuff.");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let source = "\nWater,HHO,H2O,Good stuff.\n\n";
        assert_eq!(Levels::parse(source).unwrap().len(), 1);
    }

    #[test]
    fn too_few_fields_fails_with_line_number() {
        let source = "Water,HHO,H2O,ok\nBroken,HH\n";
        match Levels::parse(source) {
            Err(LevelError::Malformed { line }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn commas_in_descriptions_are_rejected() {
        // No escaping: a comma inside a field produces five fields.
        let source = "Water,HHO,H2O,Essential for life, forms oceans.\n";
        assert!(matches!(
            Levels::parse(source),
            Err(LevelError::Malformed { line: 1 })
        ));
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(matches!(Levels::parse(""), Err(LevelError::Empty)));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let levels = Levels::load("no/such/levels.txt");
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(0).unwrap().name, "Water");
        assert_eq!(levels.get(1).unwrap().name, "Carbon Dioxide");
    }

    #[test]
    fn bundled_set_has_four_molecules() {
        let levels = Levels::bundled();
        let names: Vec<_> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            ["Water", "Carbon Dioxide", "Nitrogen Dioxide", "Ammonia"]
        );
    }
}
