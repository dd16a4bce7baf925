pub mod autopilot;
pub mod handler;

pub use handler::{InputAdapter, InputHandler, KeyAction};
