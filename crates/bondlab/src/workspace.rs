//! The building bench: every live atom plus the placed set.
//!
//! Placement order is kept explicitly because the auto-bond scan is
//! first-match in placement order, not nearest-match. Changing that
//! would change observable behavior.

use glam::Vec2;
use std::collections::HashMap;

use crate::atom::{Atom, AtomId, MAX_BONDS, PROXIMITY_MARGIN};
use crate::elements::AtomKind;

/// Owns atoms and the bond graph between them.
///
/// An atom exists from the moment it is pulled off the palette; it only
/// counts toward the molecule once placed on the bench. Bonds exist only
/// between placed atoms.
pub struct Workspace {
    atoms: HashMap<AtomId, Atom>,
    /// Bench membership, in placement order.
    placed: Vec<AtomId>,
    next_id: u32,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            atoms: HashMap::new(),
            placed: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a new atom of the given kind. Not yet placed.
    pub fn spawn(&mut self, kind: &AtomKind, pos: Vec2) -> AtomId {
        let id = AtomId(self.next_id);
        self.next_id += 1;
        self.atoms
            .insert(id, Atom::new(id, kind.symbol.clone(), kind.color, pos));
        id
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(&id)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_placed(&self, id: AtomId) -> bool {
        self.placed.contains(&id)
    }

    /// Atoms currently on the bench, in placement order.
    pub fn placed(&self) -> impl Iterator<Item = &Atom> {
        self.placed.iter().filter_map(|id| self.atoms.get(id))
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    pub fn placed_symbols(&self) -> Vec<&str> {
        self.placed().map(|a| a.symbol.as_str()).collect()
    }

    /// Add `id` to the bench unless it is already a member.
    pub fn place(&mut self, id: AtomId) {
        if self.atoms.contains_key(&id) && !self.placed.contains(&id) {
            self.placed.push(id);
        }
    }

    /// Form a bond between two distinct atoms and snap `a` tangent to `b`.
    ///
    /// Refusals (self-bond, duplicate edge, either side at capacity,
    /// unknown id) are silent no-ops and return false; proximity scans
    /// hit them constantly and they are not errors.
    pub fn connect(&mut self, a: AtomId, b: AtomId) -> bool {
        if a == b {
            return false;
        }
        let (Some(atom_a), Some(atom_b)) = (self.atoms.get(&a), self.atoms.get(&b)) else {
            return false;
        };
        if atom_a.neighbors.contains(&b) {
            return false;
        }
        if atom_a.neighbors.len() >= MAX_BONDS || atom_b.neighbors.len() >= MAX_BONDS {
            return false;
        }

        // New center distance is exactly the sum of radii, direction
        // preserved. Coincident centers fall back to the +X axis.
        let dir = (atom_b.pos - atom_a.pos).try_normalize().unwrap_or(Vec2::X);
        let snapped = atom_b.pos - dir * (atom_a.radius + atom_b.radius);

        if let Some(atom_a) = self.atoms.get_mut(&a) {
            atom_a.neighbors.insert(b);
            atom_a.pos = snapped;
        }
        if let Some(atom_b) = self.atoms.get_mut(&b) {
            atom_b.neighbors.insert(a);
        }
        true
    }

    /// Remove the bond between `a` and `b`, both directions. Idempotent.
    pub fn disconnect(&mut self, a: AtomId, b: AtomId) {
        if let Some(atom) = self.atoms.get_mut(&a) {
            atom.neighbors.remove(&b);
        }
        if let Some(atom) = self.atoms.get_mut(&b) {
            atom.neighbors.remove(&a);
        }
    }

    /// Sever every bond of `id`, then drop it from the bench and the
    /// atom store. One atomic teardown per drop event: no remaining atom
    /// ever lists a removed atom as a neighbor.
    pub fn remove(&mut self, id: AtomId) {
        let neighbors: Vec<AtomId> = self
            .atoms
            .get(&id)
            .map(|a| a.neighbors.iter().copied().collect())
            .unwrap_or_default();
        for n in neighbors {
            self.disconnect(id, n);
        }
        self.placed.retain(|&p| p != id);
        self.atoms.remove(&id);
    }

    /// Delete an atom that never made it onto the bench.
    pub fn discard(&mut self, id: AtomId) {
        debug_assert!(!self.is_placed(id), "discard is for unplaced atoms");
        self.atoms.remove(&id);
    }

    /// One auto-bond attempt for a just-dropped atom.
    ///
    /// Scans the bench in placement order and stops at the *first* atom
    /// within bonding range (center distance below the radius sum plus
    /// `PROXIMITY_MARGIN`). That candidate consumes the single attempt
    /// even when the connect itself is refused. Returns the partner the
    /// bond was actually formed with.
    pub fn try_bond(&mut self, dropped: AtomId) -> Option<AtomId> {
        let dropped_atom = self.atoms.get(&dropped)?;
        let (pos, radius) = (dropped_atom.pos, dropped_atom.radius);

        let candidate = self
            .placed()
            .find(|other| {
                other.id != dropped
                    && pos.distance(other.pos) < radius + other.radius + PROXIMITY_MARGIN
            })
            .map(|a| a.id)?;

        if self.connect(dropped, candidate) {
            Some(candidate)
        } else {
            None
        }
    }

    pub fn degree(&self, id: AtomId) -> usize {
        self.atoms.get(&id).map(|a| a.neighbors.len()).unwrap_or(0)
    }

    /// Drop every atom and bond.
    pub fn clear(&mut self) {
        self.atoms.clear();
        self.placed.clear();
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
