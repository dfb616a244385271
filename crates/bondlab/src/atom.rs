//! Atom entity: a labeled particle with position and bonds.

use bondlab_core::Color;
use glam::Vec2;
use std::collections::HashSet;

/// Maximum number of bonds any atom may hold.
pub const MAX_BONDS: usize = 4;

/// Extra center-to-center slack, in pixels, within which a dropped atom
/// bonds to a bench neighbor.
pub const PROXIMITY_MARGIN: f32 = 5.0;

/// Unique identity of an atom. Symbols repeat; identities do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomId(pub u32);

/// A placeable labeled particle.
#[derive(Debug, Clone)]
pub struct Atom {
    pub id: AtomId,
    pub symbol: String,
    pub color: Color,
    pub pos: Vec2,
    pub radius: f32,
    /// Bonded neighbors. Symmetric: if A lists B, B lists A.
    pub neighbors: HashSet<AtomId>,
}

impl Atom {
    pub fn new(id: AtomId, symbol: impl Into<String>, color: Color, pos: Vec2) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            color,
            pos,
            radius: crate::elements::ATOM_RADIUS,
            neighbors: HashSet::new(),
        }
    }

    /// Circle hit test in pixel space.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.pos.distance_squared(p) <= self.radius * self.radius
    }

    pub fn distance_to(&self, other: &Atom) -> f32 {
        self.pos.distance(other.pos)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
