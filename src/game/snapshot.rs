use serde::Serialize;

use super::state::{Phase, Position, SimulationState};

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    /// Snake segments, head first
    pub segments: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub phase: Phase,
    /// Head/tail fade level; the timing accumulator, bit for bit
    pub intensity: u8,
}

impl<'a> Snapshot<'a> {
    /// Borrow a view of `state` for one draw
    pub fn of(state: &'a SimulationState) -> Self {
        Self {
            segments: &state.snake.body,
            food: state.food,
            score: state.score,
            phase: state.phase,
            intensity: state.accumulator,
        }
    }

    /// First segment
    pub fn head(&self) -> Position {
        self.segments[0]
    }
}

impl SimulationState {
    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = SimulationState::new(
            Snake::from_segments(
                vec![Position::new(2, 2), Position::new(1, 2)],
                Direction::Right,
            ),
            Position::new(4, 4),
            5,
            5,
        );
        state.accumulator = 199;
        state.score = 3;

        let snap = state.snapshot();
        assert_eq!(snap.segments, &[Position::new(2, 2), Position::new(1, 2)]);
        assert_eq!(snap.head(), Position::new(2, 2));
        assert_eq!(snap.food, Position::new(4, 4));
        assert_eq!(snap.score, 3);
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.intensity, 199);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(
            Snake::new(Position::new(1, 0), Direction::Up),
            Position::new(0, 0),
            2,
            2,
        );
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["segments"][0]["x"], 1);
        assert_eq!(json["phase"], "running");
        assert_eq!(json["intensity"], 0);
    }
}
