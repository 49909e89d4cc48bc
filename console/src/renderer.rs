use std::io::Write;

use common::games::GameBroadcaster;
use common::games::snake::{GameOverNotification, SnakeSnapshot};
use common::{GameEndReason, GameStatus, Point};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws each snapshot to stdout as a character grid.
#[derive(Clone)]
pub struct TerminalBroadcaster {
    show_grid: bool,
}

impl TerminalBroadcaster {
    pub fn new(show_grid: bool) -> Self {
        Self { show_grid }
    }

    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        let frame = format!("{}{}", CLEAR_SCREEN, render_board(&snapshot, self.show_grid));
        self.write(&frame);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.write(&render_game_over(&notification));
    }
}

pub fn render_board(snapshot: &SnakeSnapshot, show_grid: bool) -> String {
    let width = snapshot.field_size.width;
    let height = snapshot.field_size.height;
    let empty = if show_grid { '.' } else { ' ' };
    let mut grid = vec![vec![empty; width]; height];

    if let Some(food) = snapshot.food
        && let Some(cell) = cell_mut(&mut grid, food)
    {
        *cell = '*';
    }

    for (index, segment) in snapshot.snake.iter().enumerate().rev() {
        if let Some(cell) = cell_mut(&mut grid, *segment) {
            *cell = if index == 0 { '@' } else { 'o' };
        }
    }

    let border = format!("+{}+\n", "-".repeat(width));
    let mut out = String::with_capacity((width + 3) * (height + 4));
    out.push_str(&format!(
        "Score: {}   Best: {}\n",
        snapshot.score, snapshot.high_score
    ));
    out.push_str(&border);
    for row in grid {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push_str(status_line(snapshot.status));
    out.push('\n');
    out
}

pub fn render_game_over(notification: &GameOverNotification) -> String {
    let reason = match notification.reason {
        GameEndReason::WallCollision => "hit the wall",
        GameEndReason::SelfCollision => "bit itself",
        GameEndReason::BoardFilled => "filled the board",
    };

    let mut out = format!(
        "Game over: the snake {}. Score: {}   Best: {}\n",
        reason, notification.score, notification.high_score
    );
    if notification.is_new_high_score {
        out.push_str("New high score!\n");
    }
    out.push_str("Press r then Enter to play again, q to quit.\n");
    out
}

fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "Type w/a/s/d (or h/j/k/l) then Enter to start.",
        GameStatus::Running => "w/a/s/d to turn, r to restart, q to quit.",
        GameStatus::GameOver => "",
    }
}

// Out-of-field points (a head that just crossed the wall) are not drawn.
fn cell_mut(grid: &mut [Vec<char>], point: Point) -> Option<&mut char> {
    let x = usize::try_from(point.x).ok()?;
    let y = usize::try_from(point.y).ok()?;
    grid.get_mut(y)?.get_mut(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::FieldSize;

    fn snapshot() -> SnakeSnapshot {
        SnakeSnapshot {
            tick: 3,
            field_size: FieldSize::new(4, 2),
            snake: vec![Point::new(1, 0), Point::new(0, 0)],
            food: Some(Point::new(3, 1)),
            score: 1,
            high_score: 7,
            status: GameStatus::Running,
            game_end_reason: None,
        }
    }

    #[test]
    fn test_board_shows_snake_and_food() {
        let board = render_board(&snapshot(), false);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], "Score: 1   Best: 7");
        assert_eq!(lines[1], "+----+");
        assert_eq!(lines[2], "|o@  |");
        assert_eq!(lines[3], "|   *|");
        assert_eq!(lines[4], "+----+");
    }

    #[test]
    fn test_grid_dots_and_off_board_head() {
        let mut snapshot = snapshot();
        snapshot.snake = vec![Point::new(-1, 0), Point::new(0, 0)];
        snapshot.status = GameStatus::GameOver;

        let board = render_board(&snapshot, true);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[2], "|o...|");
        assert_eq!(lines[3], "|...*|");
    }

    #[test]
    fn test_game_over_mentions_new_record() {
        let text = render_game_over(&GameOverNotification {
            score: 9,
            reason: GameEndReason::SelfCollision,
            high_score: 9,
            is_new_high_score: true,
        });
        assert!(text.contains("bit itself"));
        assert!(text.contains("New high score!"));
    }
}
