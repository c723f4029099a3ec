//! JSON messages exchanged with the browser page.
//!
//! The page polls `GET /api/state` and receives a [`StateMessage`]; steering
//! posts a [`DirectionRequest`]. Failures come back as an [`ErrorMessage`].

use serde::{Deserialize, Serialize};

use crate::core::{Collision, Game, Phase, Status};
use crate::types::{Direction, Position, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WirePhase {
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "over")]
    Over,
}

impl From<Phase> for WirePhase {
    fn from(p: Phase) -> Self {
        match p {
            Phase::Running => WirePhase::Running,
            Phase::Over => WirePhase::Over,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireStatus {
    #[serde(rename = "alive")]
    Alive,
    #[serde(rename = "wall")]
    Wall,
    #[serde(rename = "self")]
    SelfCollision,
    #[serde(rename = "won")]
    Won,
}

impl From<Status> for WireStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Alive => WireStatus::Alive,
            Status::Crashed(Collision::Wall) => WireStatus::Wall,
            Status::Crashed(Collision::SelfCollision) => WireStatus::SelfCollision,
            Status::Won => WireStatus::Won,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireDirection {
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

impl From<Direction> for WireDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => WireDirection::Up,
            Direction::Down => WireDirection::Down,
            Direction::Left => WireDirection::Left,
            Direction::Right => WireDirection::Right,
        }
    }
}

/// Transient message for the page's toast. `id` changes whenever a new
/// notice is posted, so a poller shows each one once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// Full view of the session, sent on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    pub width: u8,
    pub height: u8,
    /// `[x, y]` pairs, head first.
    pub snake: Vec<[i16; 2]>,
    pub food: [i16; 2],
    pub score: u32,
    pub length: u32,
    pub direction: WireDirection,
    pub phase: WirePhase,
    pub status: WireStatus,
    pub episode_id: u32,
    pub ticks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Body of `POST /api/direction`.
///
/// The name stays a plain string so unknown values can be answered with an
/// [`ErrorMessage`] instead of a generic deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRequest {
    pub direction: String,
}

impl DirectionRequest {
    pub fn parse(&self) -> Option<Direction> {
        Direction::from_str(self.direction.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_direction")]
    InvalidDirection,
    #[serde(rename = "invalid_body")]
    InvalidBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

fn pair(p: Position) -> [i16; 2] {
    [p.x, p.y]
}

pub fn build_state(game: &Game, notice: Option<&Notice>) -> StateMessage {
    let state = game.state();
    StateMessage {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
        snake: state.snake().iter().map(pair).collect(),
        food: pair(state.food()),
        score: state.score(),
        length: state.len() as u32,
        direction: state.direction().into(),
        phase: game.phase().into(),
        status: state.status().into(),
        episode_id: game.episode_id(),
        ticks: state.ticks(),
        notice: notice.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn fresh_session_serializes_waiting_state() {
        let game = Game::new(5);
        let msg = build_state(&game, None);
        let v = serde_json::to_value(&msg).unwrap();

        assert_eq!(v["width"], 20);
        assert_eq!(v["height"], 15);
        assert_eq!(v["phase"], "over");
        assert_eq!(v["status"], "alive");
        assert_eq!(v["direction"], "right");
        assert_eq!(v["snake"][0][0], 10);
        assert_eq!(v["snake"][0][1], 7);
        assert_eq!(v["length"], 1);
        assert!(v.get("notice").is_none());
    }

    #[test]
    fn crash_reason_is_reported() {
        let mut game = Game::new(1);
        let round = GameState::from_layout(
            &[Position::new(0, 3)],
            Direction::Left,
            Position::new(9, 9),
            2,
        )
        .unwrap();
        game.start_with(round);
        game.tick();

        let msg = build_state(&game, None);
        assert_eq!(msg.phase, WirePhase::Over);
        assert_eq!(msg.status, WireStatus::Wall);
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["status"], "wall");
    }

    #[test]
    fn direction_request_accepts_known_names_only() {
        let ok: DirectionRequest = serde_json::from_str(r#"{"direction":"up"}"#).unwrap();
        assert_eq!(ok.parse(), Some(Direction::Up));

        let bad: DirectionRequest = serde_json::from_str(r#"{"direction":"sideways"}"#).unwrap();
        assert_eq!(bad.parse(), None);
    }

    #[test]
    fn error_code_uses_snake_case() {
        let err = ErrorMessage::new(ErrorCode::InvalidDirection, "nope");
        let line = serde_json::to_string(&err).unwrap();
        assert!(line.contains(r#""code":"invalid_direction""#));
    }
}
