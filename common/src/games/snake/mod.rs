mod food;
mod game_state;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use food::{MAX_SPAWN_ATTEMPTS, free_cells, spawn_food};
pub use game_state::SnakeGameState;
pub use session::{SessionCommand, SnakeSession};
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use snapshot::{GameOverNotification, SnakeSnapshot};
pub use types::{Direction, FieldSize, GameEndReason, GameStatus, Point, TickOutcome};
