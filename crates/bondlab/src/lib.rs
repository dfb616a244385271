//! bondlab: a drag-and-drop molecule assembly game.
//!
//! Headless: the embedder pumps `InputEvent`s in and rasterizes the
//! `DrawList` that comes back out each frame.

// Pure logic
pub mod atom;
pub mod elements;
pub mod levels;
pub mod session;
pub mod validator;
pub mod workspace;

// Interaction and rendering
pub mod hud;
pub mod interaction;
pub mod layout;
pub mod renderer;

// Main game controller
pub mod game;

pub use game::MoleculeBuilder;
