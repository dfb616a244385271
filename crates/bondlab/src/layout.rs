//! Fixed screen layout, in pixels, y-down.

use bondlab_core::Rect;
use glam::Vec2;

pub const WORLD_W: f32 = 1024.0;
pub const WORLD_H: f32 = 768.0;

/// The bench: atoms dropped here count toward the molecule.
pub const BENCH: Rect = Rect::new(250.0, 100.0, 724.0, 518.0);

/// Palette slot geometry: a column along the left edge.
pub const SLOT_X: f32 = 50.0;
pub const SLOT_W: f32 = 150.0;
pub const SLOT_H: f32 = 80.0;
pub const SLOT_STRIDE: f32 = 100.0;
pub const SLOT_Y0: f32 = 100.0;

/// One rect per palette slot, top to bottom.
pub fn palette_slots(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect::new(SLOT_X, SLOT_Y0 + i as f32 * SLOT_STRIDE, SLOT_W, SLOT_H))
        .collect()
}

/// Button row along the bottom.
pub const BUTTON_Y: f32 = 700.0;
pub const BUTTON_W: f32 = 150.0;
pub const BUTTON_H: f32 = 50.0;

/// Text anchors.
pub const LEVEL_BANNER_POS: Vec2 = Vec2::new(250.0, 20.0);
pub const SCORE_POS: Vec2 = Vec2::new(900.0, 20.0);
pub const MESSAGE_POS: Vec2 = Vec2::new(250.0, 650.0);
pub const HINT_POS: Vec2 = Vec2::new(250.0, 60.0);
