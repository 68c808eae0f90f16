//! The cursor always points at a recorded board.

use super::Invariant;
use crate::Session;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Session> for CursorInBoundsInvariant {
    fn holds(session: &Session) -> bool {
        session.cursor() < session.history().len()
    }

    fn description() -> &'static str {
        "Cursor points into the history"
    }
}
