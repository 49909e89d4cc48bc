use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{FieldSize, Point};

/// Random draws tried before falling back to scanning the board for free cells.
pub const MAX_SPAWN_ATTEMPTS: usize = 100;

/// Picks a cell not covered by `snake`, uniformly among the free ones.
/// Returns `None` when the snake covers the whole field.
pub fn spawn_food(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if field_size.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let x = rng.random_range(0..field_size.width as i32);
        let y = rng.random_range(0..field_size.height as i32);
        let pos = Point::new(x, y);

        if !snake.occupies(&pos) {
            return Some(pos);
        }
    }

    let free_cells = free_cells(field_size, snake);
    if free_cells.is_empty() {
        return None;
    }
    Some(free_cells[rng.random_range(0..free_cells.len())])
}

pub fn free_cells(field_size: &FieldSize, snake: &Snake) -> Vec<Point> {
    (0..field_size.height as i32)
        .flat_map(|y| (0..field_size.width as i32).map(move |x| Point::new(x, y)))
        .filter(|pos| !snake.occupies(pos))
        .collect()
}
