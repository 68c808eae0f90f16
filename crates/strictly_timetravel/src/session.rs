//! Game session: board history, cursor and derived turn.

use super::action::{Action, Move};
use super::error::{SessionError, SessionErrorKind};
use super::invariants::assert_invariants;
use super::rules;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether a full board without a winner is reported as a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Keep reporting the next player on a full board.
    #[default]
    Ignore,
    /// Report [`Status::Draw`] once the board is full with no winner.
    Report,
}

/// Status line for the board at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A line of three was completed by this mark.
    Winner(Mark),
    /// The game continues with this mark to move.
    Next(Mark),
    /// Board is full without a winner (only under [`DrawPolicy::Report`]).
    Draw,
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(*mark),
            Status::Next(_) | Status::Draw => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::Next(mark) => write!(f, "Next player: {}", mark),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// A single game with its full board history.
///
/// A session is an immutable value: every operation returns a new session
/// and leaves `self` untouched.
///
/// - `history[0]` is always the empty board.
/// - Each later board adds exactly one mark to its predecessor.
/// - `cursor` indexes the board currently shown. After a jump it may sit
///   before the last board; the later boards are only discarded when the
///   next move is recorded.
/// - Whose turn it is follows from the cursor alone: X on even steps,
///   O on odd steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    history: Vec<Board>,
    cursor: usize,
}

impl Session {
    /// Creates a session at the start of a game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Builds a session from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, cursor: usize) -> Self {
        Self { history, cursor }
    }

    /// Every recorded board, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the board currently shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when the cursor sits on the last recorded board.
    pub fn is_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// The mark that moves next on the board at the cursor.
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    /// Winner on the board at the cursor, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self.current_board())
    }

    /// Status of the board at the cursor. Full boards are never reported
    /// as drawn; see [`Session::status_with`].
    pub fn status(&self) -> Status {
        self.status_with(DrawPolicy::Ignore)
    }

    /// Status of the board at the cursor under the given draw policy.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status_with(&self, policy: DrawPolicy) -> Status {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            return Status::Winner(winner);
        }
        if policy == DrawPolicy::Report && rules::is_full(board) {
            return Status::Draw;
        }
        Status::Next(self.to_move())
    }

    /// The move that produced each board after the first.
    ///
    /// Entry `n` is the move that led from `history[n]` to `history[n + 1]`.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| {
                Position::ALL
                    .into_iter()
                    .find(|pos| pair[0].is_empty(*pos) && !pair[1].is_empty(*pos))
                    .and_then(|pos| pair[1].get(pos).mark().map(|mark| Move::new(mark, pos)))
            })
            .collect()
    }

    /// Places the current mark at `position` on the board at the cursor.
    ///
    /// The move is ignored, returning an unchanged session, when the board
    /// at the cursor already has a winner or the square is taken. Otherwise
    /// any boards after the cursor are dropped, the new board is appended and
    /// the cursor moves onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, mark = %self.to_move()))]
    pub fn record_move(&self, position: Position) -> Session {
        let board = self.current_board();

        if let Some(winner) = rules::check_winner(board) {
            debug!(%winner, "Ignoring move, game already won");
            return self.clone();
        }

        if !board.is_empty(position) {
            debug!("Ignoring move, square already occupied");
            return self.clone();
        }

        let next = board.with_mark(position, self.to_move());
        let mut history = self.history[..=self.cursor].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(next);

        let session = Session {
            cursor: history.len() - 1,
            history,
        };
        debug!(discarded, cursor = session.cursor, "Move recorded");

        assert_invariants(&session);
        session
    }

    /// Moves the cursor to `step` without discarding any history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::StepOutOfRange`] if `step` is not an
    /// index into the history.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Session, SessionError> {
        if step >= self.history.len() {
            return Err(SessionError::new(SessionErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            }));
        }

        let session = Session {
            history: self.history.clone(),
            cursor: step,
        };
        debug!("Cursor moved");

        assert_invariants(&session);
        Ok(session)
    }

    /// Applies an action, returning the next session.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Session::jump_to`]. Rejected moves are
    /// not errors.
    #[instrument(skip(self))]
    pub fn reduce(&self, action: Action) -> Result<Session, SessionError> {
        match action {
            Action::RecordMove(position) => Ok(self.record_move(position)),
            Action::JumpTo(step) => self.jump_to(step),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
