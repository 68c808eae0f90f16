//! Marks alternate X, O, X, O, ... through the history.

use super::Invariant;
use crate::{Mark, Session};

/// Invariant: the mark added at step `n` belongs to the player of step `n - 1`.
///
/// X places on odd-numbered boards, O on even-numbered ones, so the turn flag
/// derived from the cursor always agrees with the marks on the board.
pub struct AlternatingMarksInvariant;

impl Invariant<Session> for AlternatingMarksInvariant {
    fn holds(session: &Session) -> bool {
        let moves = session.moves();
        if moves.len() + 1 != session.history().len() {
            return false;
        }

        let mut expected = Mark::X;
        for mv in &moves {
            if mv.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_session_holds() {
        let session = Session::new()
            .record_move(Position::Center)
            .record_move(Position::TopLeft)
            .record_move(Position::BottomRight);
        assert!(AlternatingMarksInvariant::holds(&session));
    }

    #[test]
    fn test_o_first_violates() {
        let first = Board::new();
        let second = first.with_mark(Position::Center, Mark::O);
        let session = Session::from_parts(vec![first, second], 1);
        assert!(!AlternatingMarksInvariant::holds(&session));
    }

    #[test]
    fn test_full_alternating_game_holds() {
        // X O X / X O O / O X X
        let session = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .into_iter()
            .fold(Session::new(), |session, index| {
                session.record_move(Position::from_index(index).unwrap())
            });
        assert_eq!(session.moves().len(), 9);
        assert!(AlternatingMarksInvariant::holds(&session));
    }

    #[test]
    fn test_o_after_o_violates() {
        let first = Board::new();
        let second = first.with_mark(Position::Center, Mark::X);
        let third = second.with_mark(Position::TopLeft, Mark::O);
        let fourth = third.with_mark(Position::TopRight, Mark::O);
        let session = Session::from_parts(vec![first, second, third, fourth], 3);
        assert!(!AlternatingMarksInvariant::holds(&session));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let first = Board::new();
        let second = first.with_mark(Position::Center, Mark::X);
        let third = second.with_mark(Position::TopLeft, Mark::X);
        let session = Session::from_parts(vec![first, second, third], 2);
        assert!(!AlternatingMarksInvariant::holds(&session));
    }
}
