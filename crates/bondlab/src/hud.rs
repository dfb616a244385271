//! Clickable controls: reset, check, hint, next level.

use bondlab_core::{Color, Rect};
use glam::Vec2;

use crate::layout::{BUTTON_H, BUTTON_W, BUTTON_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Reset,
    Check,
    Hint,
    NextLevel,
}

/// A clickable labeled rectangle.
#[derive(Debug, Clone)]
pub struct Button {
    pub id: ButtonId,
    pub rect: Rect,
    pub label: &'static str,
    pub fill: Color,
    pub text_color: Color,
}

impl Button {
    pub fn contains(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }
}

/// The fixed button row along the bottom of the screen.
pub struct ControlPanel {
    pub buttons: Vec<Button>,
}

impl ControlPanel {
    pub fn new() -> Self {
        let button = |id, x, label, fill, text_color| Button {
            id,
            rect: Rect::new(x, BUTTON_Y, BUTTON_W, BUTTON_H),
            label,
            fill,
            text_color,
        };
        Self {
            buttons: vec![
                button(ButtonId::Reset, 50.0, "Reset", Color::RED, Color::WHITE),
                button(ButtonId::Check, 250.0, "Check", Color::GREEN, Color::WHITE),
                button(ButtonId::NextLevel, 450.0, "Next Level", Color::BLUE, Color::WHITE),
                button(ButtonId::Hint, 650.0, "Hint", Color::YELLOW, Color::BLACK),
            ],
        }
    }

    /// Which button a press landed on. Next Level only participates
    /// while the level is complete.
    pub fn hit_test(&self, pos: Vec2, level_complete: bool) -> Option<ButtonId> {
        self.buttons
            .iter()
            .find(|b| (b.id != ButtonId::NextLevel || level_complete) && b.contains(pos))
            .map(|b| b.id)
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
