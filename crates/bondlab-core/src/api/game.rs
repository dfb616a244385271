//! The contract between a game and its embedder.
//!
//! The embedder pumps events into an `InputQueue`, calls `update` once
//! per frame, then rasterizes the draw list left in the context.

use crate::draw::DrawList;
use crate::input::queue::InputQueue;

/// Configuration for the substrate, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 1024.0,
            world_height: 768.0,
        }
    }
}

/// Per-frame state shared between the game and the embedder.
pub struct FrameContext {
    /// Primitives to rasterize after this update.
    pub draw: DrawList,
    quit_requested: bool,
}

impl FrameContext {
    pub fn new() -> Self {
        Self {
            draw: DrawList::new(),
            quit_requested: false,
        }
    }

    /// Ask the embedder to shut down after this frame.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return substrate configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state.
    fn init(&mut self, ctx: &mut FrameContext);

    /// One tick: consume input, mutate state, emit draw commands.
    fn update(&mut self, ctx: &mut FrameContext, input: &InputQueue);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_flag_starts_clear() {
        let mut ctx = FrameContext::new();
        assert!(!ctx.quit_requested());
        ctx.request_quit();
        assert!(ctx.quit_requested());
    }
}
