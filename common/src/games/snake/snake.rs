use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Ordered body, head first. `body_set` mirrors `body` for occupancy lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Builds a snake whose head sits at `head` and whose body trails towards -x.
    pub fn new(head: Point, length: usize) -> Self {
        let body: VecDeque<Point> = (0..length.max(1) as i32)
            .map(|offset| Point::new(head.x - offset, head.y))
            .collect();
        Self::from_cells(body)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Self {
        let body: VecDeque<Point> = cells.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        if !self.body.contains(&tail) {
            self.body_set.remove(&tail);
        }
        Some(tail)
    }

    /// True when the head shares its cell with any other segment.
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trails_to_the_left() {
        let snake = Snake::new(Point::new(4, 2), 3);
        let cells: Vec<Point> = snake.cells().copied().collect();
        assert_eq!(
            cells,
            vec![Point::new(4, 2), Point::new(3, 2), Point::new(2, 2)]
        );
        assert_eq!(snake.head(), Point::new(4, 2));
    }

    #[test]
    fn test_pop_tail_updates_occupancy() {
        let mut snake = Snake::new(Point::new(1, 0), 2);
        assert!(snake.occupies(&Point::new(0, 0)));
        assert_eq!(snake.pop_tail(), Some(Point::new(0, 0)));
        assert!(!snake.occupies(&Point::new(0, 0)));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_head_overlap_ignores_head_itself() {
        let snake = Snake::new(Point::new(0, 0), 1);
        assert!(!snake.head_overlaps_body());

        let looped = Snake::from_cells([
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(2, 1),
            Point::new(1, 1),
        ]);
        assert!(looped.head_overlaps_body());
    }
}
