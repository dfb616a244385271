//! Drag state machine.
//!
//! Turns pointer events into atom creation, movement, placement and
//! removal. Purely event-driven, two states, no timers.

use bondlab_core::Rect;
use glam::Vec2;

use crate::atom::AtomId;
use crate::elements::AtomPalette;
use crate::workspace::Workspace;

/// The drag controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    Dragging { atom: AtomId },
}

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    None,
    /// A fresh atom was pulled out of a palette slot.
    PickedNew { atom: AtomId },
    /// An atom already on the bench was grabbed.
    PickedExisting { atom: AtomId },
}

/// What a pointer-up did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    None,
    /// Dropped inside the bench; `bonded` is the auto-bond partner.
    Placed { atom: AtomId, bonded: Option<AtomId> },
    /// A bench member was dragged out and fully detached.
    Removed { atom: AtomId },
    /// A fresh atom was released outside the bench and thrown away.
    Discarded { atom: AtomId },
}

/// Turns pointer events into workspace mutations.
pub struct DragController {
    mode: DragMode,
    pointer: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            mode: DragMode::Idle,
            pointer: Vec2::ZERO,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn pointer_pos(&self) -> Vec2 {
        self.pointer
    }

    /// The atom currently under pointer control, if any.
    pub fn dragged(&self) -> Option<AtomId> {
        match self.mode {
            DragMode::Dragging { atom } => Some(atom),
            DragMode::Idle => None,
        }
    }

    /// Pointer-down: pull a new atom from a palette slot, or grab a
    /// placed atom under the pointer. Bench scan is first-hit in
    /// placement order.
    pub fn on_pointer_down(
        &mut self,
        pos: Vec2,
        slots: &[Rect],
        palette: &AtomPalette,
        workspace: &mut Workspace,
    ) -> PickOutcome {
        self.pointer = pos;
        if self.dragged().is_some() {
            // Already dragging; a second press is ignored.
            return PickOutcome::None;
        }

        for (i, slot) in slots.iter().enumerate() {
            if slot.contains(pos) {
                if let Some(kind) = palette.get(i) {
                    let atom = workspace.spawn(kind, pos);
                    self.mode = DragMode::Dragging { atom };
                    return PickOutcome::PickedNew { atom };
                }
            }
        }

        if let Some(atom) = workspace.placed().find(|a| a.contains_point(pos)).map(|a| a.id) {
            self.mode = DragMode::Dragging { atom };
            return PickOutcome::PickedExisting { atom };
        }

        PickOutcome::None
    }

    /// Pointer-move: the dragged atom tracks the pointer unconditionally.
    /// No physics, no collision response during motion.
    pub fn on_pointer_move(&mut self, pos: Vec2, workspace: &mut Workspace) {
        self.pointer = pos;
        if let DragMode::Dragging { atom } = self.mode {
            if let Some(atom) = workspace.atom_mut(atom) {
                atom.pos = pos;
            }
        }
    }

    /// Pointer-up: place and auto-bond inside the bench; remove or
    /// discard outside. The drag reference clears on every path.
    pub fn on_pointer_up(&mut self, bench: Rect, workspace: &mut Workspace) -> DropOutcome {
        let DragMode::Dragging { atom } = self.mode else {
            return DropOutcome::None;
        };
        self.mode = DragMode::Idle;

        // The decision uses the atom's position, which tracked the
        // pointer during the drag.
        let Some(pos) = workspace.atom(atom).map(|a| a.pos) else {
            // Dragged atom vanished (external clear); nothing to do.
            return DropOutcome::None;
        };

        if bench.contains(pos) {
            workspace.place(atom);
            let bonded = workspace.try_bond(atom);
            DropOutcome::Placed { atom, bonded }
        } else if workspace.is_placed(atom) {
            workspace.remove(atom);
            DropOutcome::Removed { atom }
        } else {
            workspace.discard(atom);
            DropOutcome::Discarded { atom }
        }
    }

    pub fn reset(&mut self) {
        self.mode = DragMode::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
