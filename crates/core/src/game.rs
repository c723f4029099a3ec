//! Session controller.
//!
//! `Game` owns the current round, the session phase and the pending
//! direction. Every front end drives it through the same three calls:
//! [`Game::set_pending_direction`], [`Game::restart`] and [`Game::tick`].

use crate::game_state::{Collision, GameState, Status, TickOutcome};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

/// Session phase.
///
/// A session starts in `Over` (waiting for the player) and only enters
/// `Running` on an explicit start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Over,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    Crashed(Collision),
    Won,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Crashed(c) => c.as_str(),
            EndReason::Won => "won",
        }
    }
}

/// Lifecycle event, consumed by front ends for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started { episode: u32 },
    Ended { episode: u32, score: u32, reason: EndReason },
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    phase: Phase,
    pending: Direction,
    rng: SimpleRng,
    /// Monotonic round id (increments on every start).
    episode_id: u32,
    last_event: Option<GameEvent>,
}

impl Game {
    /// New session in the waiting (`Over`) phase.
    ///
    /// A round is laid out already so renderers have something to draw, but it
    /// does not advance until [`Game::restart`] is called.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let state = GameState::new(rng.fork_seed());
        let pending = state.direction();
        Self {
            state,
            phase: Phase::Over,
            pending,
            rng,
            episode_id: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Record the most recent steering request.
    ///
    /// Applied (or rejected as a reversal) at the next tick. Later calls within
    /// the same tick overwrite earlier ones.
    pub fn set_pending_direction(&mut self, dir: Direction) {
        self.pending = dir;
    }

    /// Start a fresh round and enter `Running`.
    pub fn restart(&mut self) {
        let seed = self.rng.fork_seed() ^ self.state.next_seed();
        self.state = GameState::new(seed);
        self.pending = self.state.direction();
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = Some(GameEvent::Started {
            episode: self.episode_id,
        });
    }

    /// Replace the current round with a prepared one and enter `Running`.
    pub fn start_with(&mut self, state: GameState) {
        self.state = state;
        self.pending = self.state.direction();
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = Some(GameEvent::Started {
            episode: self.episode_id,
        });
    }

    /// Advance the running round by one step. No-op while `Over`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Frozen;
        }

        let outcome = self.state.tick(self.pending);
        self.pending = self.state.direction();

        let reason = match self.state.status() {
            Status::Alive => None,
            Status::Crashed(c) => Some(EndReason::Crashed(c)),
            Status::Won => Some(EndReason::Won),
        };
        if let Some(reason) = reason {
            self.phase = Phase::Over;
            self.last_event = Some(GameEvent::Ended {
                episode: self.episode_id,
                score: self.state.score(),
                reason,
            });
        }

        outcome
    }

    /// Apply a player action from any input source.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(dir) => self.set_pending_direction(dir),
            GameAction::Start => self.restart(),
        }
    }

    /// Take and clear the last lifecycle event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.phase = self.phase;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
