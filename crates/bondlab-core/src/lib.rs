pub mod api;
pub mod draw;
pub mod geom;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{FrameContext, Game, GameConfig};
pub use draw::{Color, DrawCmd, DrawList, TextSize};
pub use geom::Rect;
pub use input::queue::{InputEvent, InputQueue};
