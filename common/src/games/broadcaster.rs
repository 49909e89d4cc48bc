use std::future::Future;

use super::snake::{GameOverNotification, SnakeSnapshot};

/// Rendering-side collaborator of a session. Receives a snapshot after every state change.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
