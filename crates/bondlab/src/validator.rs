//! Molecule validity checks.
//!
//! Two strategies: composition (symbol multiset only) and structural
//! (composition plus a per-molecule bond pattern). Which one gates a
//! level is explicit configuration; the default picks structural
//! whenever a rule exists for the level name. Checks never mutate the
//! workspace.

use std::collections::HashMap;

use crate::levels::Level;
use crate::workspace::Workspace;

/// How strictly a level is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Right symbols in the right counts, bonds ignored.
    Composition,
    /// Composition plus the molecule's bond pattern.
    Structural,
}

impl Strategy {
    /// Default strategy for a level: structural when a rule is defined
    /// for its name, composition otherwise.
    pub fn for_level(level: &Level) -> Self {
        if structural_rule(&level.name).is_some() {
            Self::Structural
        } else {
            Self::Composition
        }
    }
}

/// Bond pattern for one molecule: exactly one `center` atom with exactly
/// `degree` neighbors, every one of symbol `neighbor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralRule {
    pub center: &'static str,
    pub degree: usize,
    pub neighbor: &'static str,
}

/// The hand-coded structural rules, keyed by molecule name.
pub fn structural_rule(name: &str) -> Option<StructuralRule> {
    match name {
        "Water" => Some(StructuralRule { center: "O", degree: 2, neighbor: "H" }),
        "Carbon Dioxide" => Some(StructuralRule { center: "C", degree: 2, neighbor: "O" }),
        "Nitrogen Dioxide" => Some(StructuralRule { center: "N", degree: 2, neighbor: "O" }),
        "Ammonia" => Some(StructuralRule { center: "N", degree: 3, neighbor: "H" }),
        _ => None,
    }
}

/// Outcome of a molecule check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub passed: bool,
    /// Sorted symbols of what was actually on the bench, e.g. "HHO".
    pub built: String,
    /// User-visible verdict.
    pub message: String,
}

/// Exact multiset equality between bench symbols and the target formula.
/// Order-insensitive on both sides.
pub fn composition_matches(workspace: &Workspace, formula: &str) -> bool {
    let mut built: HashMap<String, usize> = HashMap::new();
    for symbol in workspace.placed_symbols() {
        *built.entry(symbol.to_string()).or_insert(0) += 1;
    }
    let mut target: HashMap<String, usize> = HashMap::new();
    for c in formula.chars() {
        *target.entry(c.to_string()).or_insert(0) += 1;
    }
    built == target
}

/// Check the bond pattern for a rule. Topology only; composition is
/// the caller's concern.
pub fn structure_matches(workspace: &Workspace, rule: &StructuralRule) -> bool {
    let mut centers = workspace.placed().filter(|a| a.symbol == rule.center);
    let Some(center) = centers.next() else {
        return false;
    };
    if centers.next().is_some() {
        return false;
    }
    if center.neighbors.len() != rule.degree {
        return false;
    }
    center
        .neighbors
        .iter()
        .all(|id| workspace.atom(*id).is_some_and(|n| n.symbol == rule.neighbor))
}

/// Sorted bench symbols for display, e.g. "HHO".
pub fn built_formula(workspace: &Workspace) -> String {
    let mut symbols = workspace.placed_symbols();
    symbols.sort_unstable();
    symbols.concat()
}

/// Judge the bench against a level.
pub fn check(workspace: &Workspace, level: &Level, strategy: Strategy) -> CheckReport {
    let built = built_formula(workspace);
    let built_label = if built.is_empty() { "nothing" } else { built.as_str() };

    if !composition_matches(workspace, &level.formula) {
        let message = format!(
            "Incorrect. You built {}, but the target is {}.",
            built_label, level.display_formula
        );
        return CheckReport { passed: false, built, message };
    }

    if strategy == Strategy::Structural {
        if let Some(rule) = structural_rule(&level.name) {
            if !structure_matches(workspace, &rule) {
                let message = format!(
                    "Not quite. {} has the right atoms, but the bonds don't form {}.",
                    built_label, level.name
                );
                return CheckReport { passed: false, built, message };
            }
        }
    }

    let message = format!(
        "Correct! You built {} ({})!",
        level.name, level.display_formula
    );
    CheckReport { passed: true, built, message }
}
