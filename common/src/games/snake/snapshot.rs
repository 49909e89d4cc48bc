use serde::{Deserialize, Serialize};

use super::types::{FieldSize, GameEndReason, GameStatus, Point};

/// Read-only view of a game handed to renderers after every state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub tick: u64,
    pub field_size: FieldSize,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub game_end_reason: Option<GameEndReason>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverNotification {
    pub score: u32,
    pub reason: GameEndReason,
    pub high_score: u32,
    pub is_new_high_score: bool,
}
