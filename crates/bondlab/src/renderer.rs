//! Scene renderer: rebuilds the frame's draw list from game state.
//!
//! Pure state-to-primitives; the embedder rasterizes the list. Bonds
//! are drawn between atom surfaces, not centers, and bench atoms sit
//! on top of their bond lines.

use bondlab_core::{Color, FrameContext, Rect, TextSize};
use glam::Vec2;

use crate::atom::{Atom, AtomId};
use crate::elements::AtomPalette;
use crate::hud::{ButtonId, ControlPanel};
use crate::layout;
use crate::levels::Level;
use crate::session::Session;
use crate::workspace::Workspace;

const OUTLINE_WIDTH: f32 = 2.0;
const BOND_WIDTH: f32 = 3.0;

/// Endpoints of a bond line: the surface tangent points along the
/// center-to-center direction.
pub fn bond_endpoints(a: &Atom, b: &Atom) -> (Vec2, Vec2) {
    let dir = (b.pos - a.pos).try_normalize().unwrap_or(Vec2::X);
    (a.pos + dir * a.radius, b.pos - dir * b.radius)
}

/// Stateless renderer; everything it needs arrives per frame.
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn sync(
        &self,
        ctx: &mut FrameContext,
        workspace: &Workspace,
        palette: &AtomPalette,
        slots: &[Rect],
        panel: &ControlPanel,
        session: &Session,
        level: Option<&Level>,
        dragged: Option<AtomId>,
    ) {
        let draw = &mut ctx.draw;
        draw.clear();

        // Background and bench.
        draw.rect_fill(
            Rect::new(0.0, 0.0, layout::WORLD_W, layout::WORLD_H),
            Color::LIGHT_BLUE,
        );
        draw.rect_fill(layout::BENCH, Color::WHITE);
        draw.rect_outline(layout::BENCH, OUTLINE_WIDTH, Color::BLACK);

        // Palette slots.
        for (slot, kind) in slots.iter().zip(palette.iter()) {
            draw.rect_fill(*slot, kind.color);
            draw.rect_outline(*slot, OUTLINE_WIDTH, Color::BLACK);
            draw.text_centered(slot.center(), kind.symbol.clone(), TextSize::Medium, Color::BLACK);
        }

        // Bonds first so atoms paint over the line ends. Each edge once.
        for atom in workspace.placed() {
            for neighbor_id in &atom.neighbors {
                if atom.id.0 < neighbor_id.0 {
                    if let Some(neighbor) = workspace.atom(*neighbor_id) {
                        let (from, to) = bond_endpoints(atom, neighbor);
                        draw.line(from, to, BOND_WIDTH, Color::BLACK);
                    }
                }
            }
        }
        for atom in workspace.placed() {
            if Some(atom.id) != dragged {
                draw_atom(draw, atom);
            }
        }

        // The dragged atom rides on top, whether or not it is placed.
        if let Some(atom) = dragged.and_then(|id| workspace.atom(id)) {
            draw_atom(draw, atom);
        }

        // HUD text.
        if let Some(level) = level {
            draw.text(
                layout::LEVEL_BANNER_POS,
                format!(
                    "Level {}: Build {} ({})",
                    session.current_level + 1,
                    level.name,
                    level.display_formula
                ),
                TextSize::Large,
                Color::BLACK,
            );
        }
        draw.text(
            layout::SCORE_POS,
            format!("Score: {}", session.score),
            TextSize::Medium,
            Color::BLACK,
        );
        if !session.message.is_empty() {
            let color = if session.message.contains("Correct") {
                Color::GREEN
            } else {
                Color::RED
            };
            draw.text(layout::MESSAGE_POS, session.message.clone(), TextSize::Medium, color);
        }
        if !session.hint.is_empty() {
            draw.text(layout::HINT_POS, session.hint.clone(), TextSize::Small, Color::BLACK);
        }

        // Buttons.
        for button in &panel.buttons {
            if button.id == ButtonId::NextLevel && !session.level_complete {
                continue;
            }
            draw.rect_fill(button.rect, button.fill);
            draw.rect_outline(button.rect, OUTLINE_WIDTH, Color::BLACK);
            draw.text_centered(
                button.rect.center(),
                button.label,
                TextSize::Medium,
                button.text_color,
            );
        }
    }
}

fn draw_atom(draw: &mut bondlab_core::DrawList, atom: &Atom) {
    draw.circle(atom.pos, atom.radius, atom.color);
    draw.circle_outline(atom.pos, atom.radius, OUTLINE_WIDTH, Color::BLACK);
    draw.text_centered(atom.pos, atom.symbol.clone(), TextSize::Medium, Color::BLACK);
}
