//! Retained draw-command list.
//!
//! The game rebuilds the list every frame; the embedder rasterizes it.
//! Keeping the boundary at "list of primitives" keeps the substrate
//! headless: no window, font or canvas types leak in here.

use glam::Vec2;

use crate::geom::Rect;

/// RGB color, components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const LIGHT_BLUE: Color = Color::rgb(0.678, 0.847, 0.902);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse a "#rrggbb" hex color (leading '#' optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb8(r, g, b))
    }
}

/// Logical text size. The embedder maps these to concrete fonts
/// (24/36/48 px in the reference frontend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    RectFill {
        rect: Rect,
        color: Color,
    },
    RectOutline {
        rect: Rect,
        width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        content: String,
        size: TextSize,
        color: Color,
        /// Centered on `pos` when true, otherwise `pos` is the top-left anchor.
        centered: bool,
    },
}

/// The frame's primitives, in paint order (later commands draw on top).
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            cmds: Vec::with_capacity(128),
        }
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Circle { center, radius, color });
    }

    pub fn circle_outline(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push(DrawCmd::CircleOutline { center, radius, width, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line { from, to, width, color });
    }

    pub fn rect_fill(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::RectFill { rect, color });
    }

    pub fn rect_outline(&mut self, rect: Rect, width: f32, color: Color) {
        self.push(DrawCmd::RectOutline { rect, width, color });
    }

    pub fn text(&mut self, pos: Vec2, content: impl Into<String>, size: TextSize, color: Color) {
        self.push(DrawCmd::Text {
            pos,
            content: content.into(),
            size,
            color,
            centered: false,
        });
    }

    pub fn text_centered(&mut self, pos: Vec2, content: impl Into<String>, size: TextSize, color: Color) {
        self.push(DrawCmd::Text {
            pos,
            content: content.into(),
            size,
            color,
            centered: true,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("000000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn push_and_clear() {
        let mut list = DrawList::new();
        list.circle(Vec2::ZERO, 10.0, Color::RED);
        list.text(Vec2::new(5.0, 5.0), "Score: 0", TextSize::Medium, Color::BLACK);
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn paint_order_is_push_order() {
        let mut list = DrawList::new();
        list.rect_fill(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.circle(Vec2::ZERO, 1.0, Color::BLACK);
        let kinds: Vec<_> = list.iter().collect();
        assert!(matches!(kinds[0], DrawCmd::RectFill { .. }));
        assert!(matches!(kinds[1], DrawCmd::Circle { .. }));
    }
}
