//! First-class invariants for game sessions.
//!
//! Invariants are logical properties every [`Session`] must satisfy. They are
//! testable on their own and are checked after every transition in debug
//! builds.

mod alternating_marks;
mod cursor_in_bounds;
mod history_starts_empty;
mod single_square_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use history_starts_empty::HistoryStartsEmptyInvariant;
pub use single_square_delta::SingleSquareDeltaInvariant;

use crate::Session;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HistoryStartsEmptyInvariant,
    CursorInBoundsInvariant,
    SingleSquareDeltaInvariant,
    AlternatingMarksInvariant,
);

/// Checks every session invariant, panicking on violation in debug builds.
#[instrument(skip(session), fields(cursor = session.cursor(), len = session.history().len()))]
pub fn assert_invariants(session: &Session) {
    if !cfg!(debug_assertions) {
        return;
    }

    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            warn!(description = %violation.description, "Session invariant violated");
        }
        panic!("Session invariants violated: {:?}", violations);
    }
}
