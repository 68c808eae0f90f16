//! First-class action types for the game session.
//!
//! Every user interaction is an [`Action`]. The session reduces actions into
//! new sessions, so they can be logged, replayed and tested without a UI.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An interaction forwarded from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Place the current player's mark at a position on the displayed board.
    RecordMove(Position),
    /// Move the cursor to a step of the history.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::RecordMove(pos) => write!(f, "move {}", pos.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// A recorded move: which mark landed on which position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
