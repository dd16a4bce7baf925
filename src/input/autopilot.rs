use crate::game::{Action, Direction, Snapshot};

/// Greedy food chaser for unattended runs: closes the horizontal gap first,
/// then the vertical one. Makes no attempt to avoid its own body.
pub fn steer(snapshot: &Snapshot<'_>) -> Action {
    let head = snapshot.head();
    let food = snapshot.food;

    let direction = if food.x > head.x {
        Some(Direction::Right)
    } else if food.x < head.x {
        Some(Direction::Left)
    } else if food.y > head.y {
        Some(Direction::Down)
    } else if food.y < head.y {
        Some(Direction::Up)
    } else {
        None
    };

    Action::from(direction)
}
