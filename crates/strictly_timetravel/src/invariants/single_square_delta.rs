//! Consecutive boards differ by exactly one new mark.

use super::Invariant;
use crate::{Session, Square};

/// Invariant: each board adds one mark to its predecessor and clears none.
///
/// For every `n > 0`, `history[n]` equals `history[n - 1]` except for a single
/// square that went from empty to occupied.
pub struct SingleSquareDeltaInvariant;

impl Invariant<Session> for SingleSquareDeltaInvariant {
    fn holds(session: &Session) -> bool {
        session.history().windows(2).all(|pair| {
            let mut added = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (before, after) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to the previous one"
    }
}
