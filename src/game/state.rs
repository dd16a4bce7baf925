use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let step = direction.as_vector();
        self.moved_by(step.x, step.y)
    }

    /// Fold the position back onto a `width x height` torus
    pub fn wrapped(&self, width: i32, height: i32) -> Self {
        Self {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }

    pub fn is_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

/// The snake in the game
///
/// Segments are ordered head first. The body is never empty; every method
/// that could leave it empty refuses to.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    /// Create a snake from explicit segments, head first
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Head ran into one of its own segments
    pub fn is_self_colliding(&self) -> bool {
        self.collides_with_body(self.head())
    }

    /// Shift every segment onto its predecessor's cell and step the head.
    ///
    /// Walks tail to head so `body[i - 1]` still holds its pre-tick value
    /// when it is copied into `body[i]`.
    pub fn follow_head(&mut self, direction: Direction) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].moved_in_direction(direction);
    }

    /// Append a segment at the end of the chain
    pub fn grow(&mut self, tail: Position) {
        self.body.push(tail);
    }

    /// Drop the tail segment. Returns false, leaving the snake untouched,
    /// when only the head remains.
    pub fn shrink(&mut self) -> bool {
        if self.body.len() > 1 {
            self.body.pop();
            true
        } else {
            false
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Coarse game state selecting which update rule a logical tick applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Running,
    /// Head hit the body; the next tick clears the score
    Crashed,
    /// Tail retracts one segment per tick down to the head
    Crashing,
}

/// Complete simulation state, owned by the frame loop and passed to the engine
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub phase: Phase,
    /// Sub-tick timing accumulator, doubles as the renderer's fade intensity
    pub accumulator: u8,
    /// Direction of the most recent logical move
    pub last_moved: Direction,
    /// Logical ticks fired so far
    pub ticks: u64,
}

impl SimulationState {
    /// Create a new simulation state in the Running phase
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        let last_moved = snake.direction;
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            phase: Phase::Running,
            accumulator: 0,
            last_moved,
            ticks: 0,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_width as i32, self.grid_height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(4, 5));
    }

    #[test]
    fn test_position_wrapping() {
        assert_eq!(Position::new(-1, 2).wrapped(5, 5), Position::new(4, 2));
        assert_eq!(Position::new(5, -1).wrapped(5, 5), Position::new(0, 4));
        assert_eq!(Position::new(3, 3).wrapped(5, 5), Position::new(3, 3));
    }

    #[test]
    fn test_follow_head_copies_predecessors() {
        let mut snake = Snake::from_segments(
            vec![
                Position::new(3, 1),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
            ],
            Direction::Up,
        );

        snake.follow_head(Direction::Up);

        assert_eq!(
            snake.body,
            vec![
                Position::new(3, 0),
                Position::new(3, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_single_segment_follow() {
        let mut snake = Snake::new(Position::new(0, 0), Direction::Right);
        snake.follow_head(Direction::Down);
        assert_eq!(snake.body, vec![Position::new(0, 1)]);
    }

    #[test]
    fn test_shrink_keeps_head() {
        let mut snake = Snake::from_segments(
            vec![Position::new(1, 1), Position::new(1, 2)],
            Direction::Up,
        );
        assert!(snake.shrink());
        assert_eq!(snake.len(), 1);
        assert!(!snake.shrink());
        assert_eq!(snake.head(), Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_empty_snake_is_rejected() {
        Snake::from_segments(Vec::new(), Direction::Up);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
        );
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(!snake.is_self_colliding());
    }

    #[test]
    fn test_bounds_checking() {
        let state = SimulationState::new(
            Snake::new(Position::new(5, 5), Direction::Right),
            Position::new(10, 10),
            20,
            20,
        );

        assert_eq!(state.phase, Phase::Running);
        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }
}
