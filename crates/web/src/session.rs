//! Shared game session for the HTTP handlers and the tick task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

use crate::core::{EndReason, Game, GameEvent, TickOutcome};
use crate::protocol::{build_state, Notice, StateMessage};
use crate::types::Direction;

pub type SharedSession = Arc<Mutex<Session>>;

/// One `Game` plus the most recent notice for the page.
#[derive(Debug)]
pub struct Session {
    game: Game,
    notice: Option<Notice>,
    next_notice_id: u64,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(seed),
            notice: None,
            next_notice_id: 1,
        }
    }

    pub fn shared(seed: u32) -> SharedSession {
        Arc::new(Mutex::new(Self::new(seed)))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.game.set_pending_direction(dir);
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.drain_event();
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.game.tick();
        self.drain_event();
        outcome
    }

    pub fn state_message(&self) -> StateMessage {
        build_state(&self.game, self.notice.as_ref())
    }

    fn drain_event(&mut self) {
        let Some(event) = self.game.take_last_event() else {
            return;
        };

        let text = match event {
            GameEvent::Started { episode } => {
                log::info!("round {episode} started");
                "Game started! Steer with the arrow keys.".to_string()
            }
            GameEvent::Ended {
                episode,
                score,
                reason,
            } => {
                log::info!("round {episode} ended: {} (score {score})", reason.as_str());
                match reason {
                    EndReason::Won => format!("You win! Final score: {score}"),
                    EndReason::Crashed(_) => format!("Game over! Final score: {score}"),
                }
            }
        };

        self.notice = Some(Notice {
            id: self.next_notice_id,
            text,
        });
        self.next_notice_id += 1;
    }
}

/// Tick the session every `period` until the task is aborted.
pub async fn run_ticker(session: SharedSession, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately; skip it so rounds advance on cadence.
    interval.tick().await;
    loop {
        interval.tick().await;
        session.lock().await.tick();
    }
}
