use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::high_score::HighScoreStore;
use crate::log;
use crate::games::{GameBroadcaster, SessionRng};
use super::game_state::SnakeGameState;
use super::settings::SnakeSettings;
use super::snapshot::GameOverNotification;
use super::types::{Direction, GameEndReason, GameStatus, TickOutcome};

/// Input accepted by a running [`SnakeSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    Restart,
    Quit,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one game until `Quit` arrives or every command sender is dropped.
    ///
    /// Commands and ticks are handled one at a time on this task, so the game state needs
    /// no locking. The tick timer is armed by the first accepted direction and disarmed on
    /// game over or restart. Returns the final game state.
    pub async fn run(
        settings: SnakeSettings,
        mut rng: SessionRng,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
        high_scores: impl HighScoreStore,
    ) -> SnakeGameState {
        let tick_interval = settings.tick_interval();
        let mut game_state = SnakeGameState::new(&settings, &mut rng);
        let mut high_score = load_high_score(&high_scores);
        let mut ticker: Option<Interval> = None;

        log!(
            "Session ready: {}x{} field, tick {}ms, seed {}",
            settings.field_width,
            settings.field_height,
            settings.tick_interval_ms,
            rng.seed()
        );
        broadcaster
            .broadcast_state(game_state.snapshot(high_score))
            .await;

        loop {
            tokio::select! {
                _ = next_tick(&mut ticker) => {
                    let outcome = game_state.update(&mut rng);
                    broadcaster
                        .broadcast_state(game_state.snapshot(high_score))
                        .await;

                    if let TickOutcome::Ended(reason) = outcome {
                        ticker = None;
                        let notification =
                            propose_high_score(&high_scores, game_state.score(), reason, &mut high_score);
                        broadcaster.broadcast_game_over(notification).await;
                    }
                }
                command = commands.recv() => {
                    let Some(command) = command else {
                        log!("Command channel closed, ending session");
                        break;
                    };

                    match command {
                        SessionCommand::Turn(direction) => {
                            let was_started = game_state.status() != GameStatus::NotStarted;
                            if game_state.request_direction(direction) && !was_started {
                                ticker = Some(start_ticker(tick_interval));
                                broadcaster
                                    .broadcast_state(game_state.snapshot(high_score))
                                    .await;
                            }
                        }
                        SessionCommand::Restart => {
                            ticker = None;
                            game_state.restart(&mut rng);
                            broadcaster
                                .broadcast_state(game_state.snapshot(high_score))
                                .await;
                        }
                        SessionCommand::Quit => break,
                    }
                }
            }
        }

        game_state
    }
}

// The first tick fires one full period after the game starts, not immediately.
fn start_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn load_high_score(high_scores: &impl HighScoreStore) -> u32 {
    match high_scores.high_score() {
        Ok(score) => score,
        Err(e) => {
            log!("Failed to load high score, starting from 0: {}", e);
            0
        }
    }
}

fn propose_high_score(
    high_scores: &impl HighScoreStore,
    score: u32,
    reason: GameEndReason,
    high_score: &mut u32,
) -> GameOverNotification {
    let is_new_high_score = match high_scores.propose(score) {
        Ok(update) => {
            *high_score = update.high_score;
            update.is_new_record
        }
        Err(e) => {
            log!("Failed to store high score {}: {}", score, e);
            let is_new = score > *high_score;
            *high_score = (*high_score).max(score);
            is_new
        }
    };

    GameOverNotification {
        score,
        reason,
        high_score: *high_score,
        is_new_high_score,
    }
}
