use std::time::{Duration, Instant};

use crate::game::{FrameInfo, Phase};

/// In-memory session statistics fed from engine frame reports
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub foods_eaten: u32,
    pub crashes: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            foods_eaten: 0,
            crashes: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Fold one frame into the totals. `score` is the score after the frame.
    pub fn record(&mut self, info: &FrameInfo, score: u32) {
        if info.ate_food {
            self.foods_eaten += 1;
            self.high_score = self.high_score.max(score);
        }
        if let Some((_, Phase::Crashed)) = info.transition {
            self.crashes += 1;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
