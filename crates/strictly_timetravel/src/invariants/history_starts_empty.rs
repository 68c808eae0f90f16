//! The first board of every history is empty.

use super::Invariant;
use crate::Session;

/// Invariant: `history[0]` exists and has no marks on it.
pub struct HistoryStartsEmptyInvariant;

impl Invariant<Session> for HistoryStartsEmptyInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .first()
            .is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
