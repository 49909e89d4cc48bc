use std::collections::VecDeque;

use crate::{debug_log, log};
use crate::games::SessionRng;
use super::food::spawn_food;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};

/// Complete state of one single-player game: snake, food, direction handling and lifecycle.
///
/// Input goes through [`request_direction`](Self::request_direction), time through
/// [`update`](Self::update). The first accepted direction moves the game from
/// `NotStarted` to `Running`; a collision (or a snake covering the whole field) moves it
/// to `GameOver`, where it stays frozen until [`restart`](Self::restart).
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    field_size: FieldSize,
    start_position: Point,
    initial_length: usize,
    direction: Option<Direction>,
    direction_queue: VecDeque<Direction>,
    status: GameStatus,
    game_end_reason: Option<GameEndReason>,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        Self::with_layout(
            settings.field_size(),
            settings.start_position(),
            settings.initial_length as usize,
            rng,
        )
    }

    pub fn with_layout(
        field_size: FieldSize,
        start_position: Point,
        initial_length: usize,
        rng: &mut SessionRng,
    ) -> Self {
        let initial_length = initial_length.max(1);
        let snake = Snake::new(start_position, initial_length);
        let food = spawn_food(&field_size, &snake, rng);

        Self {
            snake,
            food,
            field_size,
            start_position,
            initial_length,
            direction: None,
            direction_queue: VecDeque::new(),
            status: GameStatus::NotStarted,
            game_end_reason: None,
            tick: 0,
        }
    }

    /// Queues `direction` unless it reverses the direction currently applied.
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }

        if let Some(current) = self.direction
            && direction.is_opposite(&current)
        {
            debug_log!("Rejected {:?}: reverses {:?}", direction, current);
            return false;
        }

        self.direction_queue.push_back(direction);

        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
            log!("Game started moving {:?}", direction);
        }

        true
    }

    /// Advances the game by one tick. Does nothing unless the game is running.
    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        let head = self.snake.head();

        if let Some(next_direction) = self.direction_queue.pop_front() {
            self.direction = Some(next_direction);
        }

        let next_head = match self.direction {
            Some(direction) => head.step(direction),
            None => head,
        };

        self.tick += 1;

        let ate_food = self.food == Some(next_head);
        if !ate_food {
            self.snake.pop_tail();
        }
        self.snake.push_head(next_head);

        if !self.field_size.contains(&next_head) {
            return self.finish(GameEndReason::WallCollision);
        }
        if self.snake.head_overlaps_body() {
            return self.finish(GameEndReason::SelfCollision);
        }

        if !ate_food {
            return TickOutcome::Moved;
        }

        debug_log!(
            "Ate food at ({}, {}). Score: {}",
            next_head.x,
            next_head.y,
            self.score()
        );

        self.food = spawn_food(&self.field_size, &self.snake, rng);
        match self.food {
            Some(food) => {
                debug_log!("Food spawned at ({}, {})", food.x, food.y);
                TickOutcome::AteFood
            }
            None => self.finish(GameEndReason::BoardFilled),
        }
    }

    /// Puts the snake back at its start, clears pending input and places new food.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.start_position, self.initial_length);
        self.food = spawn_food(&self.field_size, &self.snake, rng);
        self.direction = None;
        self.direction_queue.clear();
        self.status = GameStatus::NotStarted;
        self.game_end_reason = None;
        self.tick = 0;
        log!("Game restarted");
    }

    fn finish(&mut self, reason: GameEndReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.game_end_reason = Some(reason);
        log!(
            "Game over after {} ticks: {:?}. Score: {}",
            self.tick,
            reason,
            self.score()
        );
        TickOutcome::Ended(reason)
    }

    pub fn snake(&self) -> impl Iterator<Item = &Point> {
        self.snake.cells()
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.snake.len().saturating_sub(self.initial_length) as u32
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_end_reason(&self) -> Option<GameEndReason> {
        self.game_end_reason
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn pending_directions(&self) -> impl Iterator<Item = &Direction> {
        self.direction_queue.iter()
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self, high_score: u32) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: self.tick,
            field_size: self.field_size,
            snake: self.snake.cells().copied().collect(),
            food: self.food,
            score: self.score(),
            high_score,
            status: self.status,
            game_end_reason: self.game_end_reason,
        }
    }

    #[cfg(test)]
    fn set_position(
        &mut self,
        cells: Vec<Point>,
        food: Option<Point>,
        direction: Option<Direction>,
    ) {
        self.snake = Snake::from_cells(cells);
        self.food = food;
        self.direction = direction;
        if direction.is_some() {
            self.status = GameStatus::Running;
        }
    }
}
