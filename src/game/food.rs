//! Food placement.
//!
//! Placement is uniform over the grid and by default ignores the snake's
//! body; the only cell a fresh food is kept off is the head that just ate.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use super::state::{Position, Snake};

const MAX_REJECTIONS: usize = 64;

/// Pick a cell uniformly at random over the whole grid
pub fn place<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Position {
    let x = rng.gen_range(0..width) as i32;
    let y = rng.gen_range(0..height) as i32;
    Position::new(x, y)
}

/// Place the food after the head consumed the previous one.
///
/// The result never equals the head unless the grid has no other cell.
/// With `avoid_body` set the result is also kept off every segment, falling
/// back to head-only exclusion once the snake fills the board.
pub fn respawn<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    snake: &Snake,
    avoid_body: bool,
) -> Position {
    if avoid_body {
        for _ in 0..MAX_REJECTIONS {
            let pos = place(rng, width, height);
            if !snake.body.contains(&pos) {
                return pos;
            }
        }

        // Crowded board: enumerate only when sampling keeps missing, which
        // needs the snake to cover most of the cells
        let free = free_cells(width, height, |pos| !snake.body.contains(&pos));
        if let Some(pos) = free.choose(rng) {
            return *pos;
        }
        warn!(
            length = snake.len(),
            "no free cell left for food, allowing overlap with the body"
        );
    }

    let head = snake.head();
    for _ in 0..MAX_REJECTIONS {
        let pos = place(rng, width, height);
        if pos != head {
            return pos;
        }
    }

    let free = free_cells(width, height, |pos| pos != head);
    match free.choose(rng) {
        Some(pos) => *pos,
        None => {
            warn!(width, height, "grid has a single cell, food lands on the head");
            head
        }
    }
}

fn free_cells(width: usize, height: usize, keep: impl Fn(Position) -> bool) -> Vec<Position> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|pos| keep(*pos))
        .collect()
}
