//! Core simulation logic for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts own a [`SimulationState`], feed one [`Action`] per real-time frame into
//! [`GameEngine::advance`] and draw from a [`Snapshot`].

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{Boundary, ConfigError, ConfigOverrides, GameConfig, MAX_FRAMES_PER_SECOND};
pub use engine::{FrameInfo, GameEngine};
pub use snapshot::Snapshot;
pub use state::{Phase, Position, SimulationState, Snake};
