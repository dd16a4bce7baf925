use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::{
    action::{Action, Direction},
    config::{Boundary, GameConfig},
    food,
    state::{Phase, Position, SimulationState, Snake},
};

/// What a single real-time frame did to the state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// A logical tick fired this frame
    pub ticked: bool,
    /// The head reached the food this frame
    pub ate_food: bool,
    /// Phase change as `(from, to)`, if any
    pub transition: Option<(Phase, Phase)>,
}

/// The tick engine: applies input, gates logical ticks on the timing
/// accumulator and runs the phase-specific update rule
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new engine; the RNG is seeded from `config.seed` when set
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty or the tick step is zero.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        assert!(
            config.grid_width > 0 && config.grid_height > 0,
            "grid must have at least one cell"
        );
        assert!(config.tick_step > 0, "tick step must be non-zero");
        Self { config, rng }
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh single-segment snake in the middle of the board, heading right
    pub fn reset(&mut self) -> SimulationState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right);

        let food = if self.config.food_avoids_snake {
            food::respawn(
                &mut self.rng,
                self.config.grid_width,
                self.config.grid_height,
                &snake,
                true,
            )
        } else {
            food::place(
                &mut self.rng,
                self.config.grid_width,
                self.config.grid_height,
            )
        };

        SimulationState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the simulation by one real-time frame
    pub fn advance(&mut self, state: &mut SimulationState, action: Action) -> FrameInfo {
        assert!(!state.snake.is_empty(), "snake lost its head");

        if let Action::Move(direction) = action {
            let reversal = state.last_moved.is_opposite(direction);
            if !(self.config.reversal_guard && reversal) {
                state.snake.direction = direction;
            }
        }

        let mut info = FrameInfo::default();
        let step = self.config.tick_step;

        if u16::from(state.accumulator) + u16::from(step) >= u16::from(u8::MAX) {
            info.ticked = true;
            state.ticks += 1;
            self.tick(state, &mut info);
        }

        // Carry the overflow so the next tick is timed from it
        state.accumulator = state.accumulator.wrapping_add(step);

        info
    }

    fn tick(&mut self, state: &mut SimulationState, info: &mut FrameInfo) {
        match state.phase {
            Phase::Running => self.tick_running(state, info),
            Phase::Crashed => {
                state.score = 0;
                let next = if state.snake.len() > 1 {
                    Phase::Crashing
                } else {
                    Phase::Running
                };
                Self::transition(state, info, next);
            }
            Phase::Crashing => {
                state.snake.shrink();
                if state.snake.len() == 1 {
                    Self::transition(state, info, Phase::Running);
                }
            }
        }
    }

    fn tick_running(&mut self, state: &mut SimulationState, info: &mut FrameInfo) {
        let tail = state.snake.tail();
        let direction = state.snake.direction;

        state.snake.follow_head(direction);
        state.last_moved = direction;

        if self.config.boundary == Boundary::Wrap {
            state.snake.body[0] = state.snake.body[0]
                .wrapped(state.grid_width as i32, state.grid_height as i32);
        }

        if state.snake.head() == state.food {
            state.snake.grow(tail);
            state.score += 1;
            state.food = food::respawn(
                &mut self.rng,
                state.grid_width,
                state.grid_height,
                &state.snake,
                self.config.food_avoids_snake,
            );
            info.ate_food = true;
            debug!(
                score = state.score,
                length = state.snake.len(),
                food_x = state.food.x,
                food_y = state.food.y,
                "food consumed"
            );
        }

        if state.snake.is_self_colliding() {
            Self::transition(state, info, Phase::Crashed);
        }
    }

    fn transition(state: &mut SimulationState, info: &mut FrameInfo, next: Phase) {
        debug!(from = ?state.phase, to = ?next, tick = state.ticks, "phase change");
        info.transition = Some((state.phase, next));
        state.phase = next;
    }
}
