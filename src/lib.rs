//! Snake Sim - a tick-driven snake simulation core
//!
//! This library provides:
//! - Core simulation logic (game module)
//! - Terminal input mapping and an autopilot (input module)
//! - TUI rendering of simulation snapshots (render module)
//! - Session statistics (metrics module)
//! - Interactive and headless hosts (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
