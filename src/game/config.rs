use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Position;

/// What happens when the head moves past the edge of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Off-board positions are never checked; the head keeps going
    #[default]
    Unchecked,
    /// The head re-enters on the opposite edge
    Wrap,
}

/// Rejected configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid dimensions {width}x{height} do not fit in signed 32-bit coordinates")]
    GridTooLarge { width: usize, height: usize },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("tick step must be non-zero, otherwise no logical tick ever fires")]
    ZeroTickStep,
    #[error("frames per second must be non-zero")]
    ZeroFrameRate,
    #[error("frames per second must be at most {max} (got {fps})")]
    FrameRateTooHigh { fps: u32, max: u32 },
    #[error("board of {width}x{height} cells at {cell_size}px does not fit in 32-bit pixel coordinates")]
    ScreenTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },
}

/// Upper bound on the interactive frame rate; the frame period is computed in
/// whole microseconds and must stay non-zero
pub const MAX_FRAMES_PER_SECOND: u32 = 1000;

/// Values given on the command line. `None` and `false` leave the
/// underlying config untouched; flags can only switch options on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub cell_size: Option<u32>,
    pub tick_step: Option<u8>,
    pub seed: Option<u64>,
    pub reversal_guard: bool,
    pub wrap: bool,
    pub food_avoids_snake: bool,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Size of one cell in pixels
    pub cell_size: u32,
    /// Timing accumulator increment per real-time frame
    pub tick_step: u8,
    /// Real-time frame rate of the interactive host
    pub frames_per_second: u32,
    /// Seed for food placement; entropy when absent
    pub seed: Option<u64>,

    /// Ignore direction requests opposite to the last movement
    pub reversal_guard: bool,
    /// Edge policy
    pub boundary: Boundary,
    /// Place food only on cells not occupied by the snake
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            cell_size: 8,
            tick_step: u8::MAX / 10,
            frames_per_second: 60,
            seed: None,
            reversal_guard: false,
            boundary: Boundary::Unchecked,
            food_avoids_snake: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine or a host cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let pixels = |cells: usize| (cells as u32).checked_mul(self.cell_size);
        if pixels(width).is_none() || pixels(height).is_none() {
            return Err(ConfigError::ScreenTooLarge {
                width,
                height,
                cell_size: self.cell_size,
            });
        }
        if self.tick_step == 0 {
            return Err(ConfigError::ZeroTickStep);
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.frames_per_second > MAX_FRAMES_PER_SECOND {
            return Err(ConfigError::FrameRateTooHigh {
                fps: self.frames_per_second,
                max: MAX_FRAMES_PER_SECOND,
            });
        }
        Ok(())
    }

    /// Board size in pixels
    pub fn screen_size(&self) -> (u64, u64) {
        let cell = u64::from(self.cell_size);
        (self.grid_width as u64 * cell, self.grid_height as u64 * cell)
    }

    /// Real-time frame period of the interactive host
    pub fn frame_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frames_per_second))
    }

    /// Layer command-line values over this config
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(width) = overrides.width {
            self.grid_width = width;
        }
        if let Some(height) = overrides.height {
            self.grid_height = height;
        }
        if let Some(cell_size) = overrides.cell_size {
            self.cell_size = cell_size;
        }
        if let Some(tick_step) = overrides.tick_step {
            self.tick_step = tick_step;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.reversal_guard {
            self.reversal_guard = true;
        }
        if overrides.wrap {
            self.boundary = Boundary::Wrap;
        }
        if overrides.food_avoids_snake {
            self.food_avoids_snake = true;
        }
        self
    }

    /// Pixel rectangle `(x, y, w, h)` a host draws for a cell, leaving a
    /// one-pixel gap to the right and below
    pub fn cell_rect(&self, pos: Position) -> (i64, i64, u32, u32) {
        let size = i64::from(self.cell_size);
        (
            i64::from(pos.x) * size,
            i64::from(pos.y) * size,
            self.cell_size - 1,
            self.cell_size - 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.cell_size, 8);
        assert_eq!(config.tick_step, 25);
        assert_eq!(config.boundary, Boundary::Unchecked);
        assert!(!config.reversal_guard);
        assert!(!config.food_avoids_snake);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            GameConfig::new(0, 5).validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 5
            })
        );

        let mut config = GameConfig::small();
        config.tick_step = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickStep));

        let mut config = GameConfig::small();
        config.cell_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));

        let mut config = GameConfig::small();
        config.frames_per_second = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));

        let mut config = GameConfig::small();
        config.frames_per_second = 2_000_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FrameRateTooHigh {
                fps: 2_000_000,
                max: MAX_FRAMES_PER_SECOND
            })
        );

        let mut config = GameConfig::new(70_000, 10);
        config.cell_size = 70_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ScreenTooLarge {
                width: 70_000,
                height: 10,
                cell_size: 70_000
            })
        );
    }

    #[test]
    fn test_frame_period_stays_non_zero() {
        let mut config = GameConfig::small();
        assert_eq!(config.frame_period(), Duration::from_micros(16_666));

        config.frames_per_second = MAX_FRAMES_PER_SECOND;
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_period(), Duration::from_millis(1));
    }

    #[test]
    fn test_large_board_pixel_size() {
        let mut config = GameConfig::new(65_536, 10);
        config.cell_size = 65_535;
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_size(), (65_536 * 65_535, 655_350));
    }

    #[test]
    fn test_overrides_layer_over_file_values() {
        let mut base = GameConfig::new(12, 9).with_seed(1);
        base.boundary = Boundary::Wrap;
        base.reversal_guard = true;

        let unchanged = base.clone().with_overrides(&ConfigOverrides::default());
        assert_eq!(unchanged, base);

        let overrides = ConfigOverrides {
            width: Some(20),
            tick_step: Some(51),
            seed: Some(9),
            food_avoids_snake: true,
            ..Default::default()
        };
        let merged = base.with_overrides(&overrides);
        assert_eq!(merged.grid_width, 20);
        assert_eq!(merged.grid_height, 9);
        assert_eq!(merged.tick_step, 51);
        assert_eq!(merged.seed, Some(9));
        assert_eq!(merged.boundary, Boundary::Wrap);
        assert!(merged.reversal_guard);
        assert!(merged.food_avoids_snake);
    }

    #[test]
    fn test_pixel_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.screen_size(), (320, 240));
        assert_eq!(config.cell_rect(Position::new(2, 3)), (16, 24, 7, 7));
        assert_eq!(config.cell_rect(Position::new(-1, 0)), (-8, 0, 7, 7));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "gridWidth": 12, "tickStep": 50, "boundary": "wrap", "seed": 7 }}"#
        )
        .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.tick_step, 50);
        assert_eq!(config.boundary, Boundary::Wrap);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tickStep": 0 }}"#).unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("tick step"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
