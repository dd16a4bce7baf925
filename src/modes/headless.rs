use serde::Serialize;
use tracing::info;

use crate::game::{Action, GameConfig, GameEngine, SimulationState, Snapshot};
use crate::input::autopilot;
use crate::metrics::GameMetrics;

/// Runs the simulation without a terminal for a fixed number of frames
pub struct HeadlessMode {
    engine: GameEngine,
    state: SimulationState,
    metrics: GameMetrics,
    autopilot: bool,
    frames: u64,
}

/// Summary printed at the end of a headless run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessReport<'a> {
    pub frames: u64,
    pub ticks: u64,
    pub foods_eaten: u32,
    pub crashes: u32,
    pub high_score: u32,
    /// Board size in pixels
    pub screen: (u64, u64),
    pub snapshot: Snapshot<'a>,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, autopilot: bool) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            autopilot,
            frames: 0,
        }
    }

    pub fn run(&mut self, frames: u64) -> HeadlessReport<'_> {
        info!(frames, autopilot = self.autopilot, "headless run started");

        for _ in 0..frames {
            let action = if self.autopilot {
                autopilot::steer(&self.state.snapshot())
            } else {
                Action::Continue
            };
            let info = self.engine.advance(&mut self.state, action);
            self.metrics.record(&info, self.state.score);
            self.frames += 1;
        }
        self.metrics.update();

        info!(
            ticks = self.state.ticks,
            score = self.state.score,
            crashes = self.metrics.crashes,
            elapsed = %self.metrics.format_time(),
            "headless run finished"
        );

        self.report()
    }

    pub fn report(&self) -> HeadlessReport<'_> {
        HeadlessReport {
            frames: self.frames,
            ticks: self.state.ticks,
            foods_eaten: self.metrics.foods_eaten,
            crashes: self.metrics.crashes,
            high_score: self.metrics.high_score,
            screen: self.engine.config().screen_size(),
            snapshot: self.state.snapshot(),
        }
    }
}
