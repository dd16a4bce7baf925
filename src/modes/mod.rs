pub mod headless;
pub mod human;

pub use headless::{HeadlessMode, HeadlessReport};
pub use human::HumanMode;
