pub mod config;
pub mod games;
pub mod high_score;
pub mod logger;

pub use games::snake::{
    Direction, GameEndReason, GameStatus, Point, SnakeGameState, SnakeSettings, SnakeSnapshot,
};
pub use high_score::{HighScoreStore, HighScoreUpdate};
