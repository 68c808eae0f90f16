//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). They hold no state,
//! so the session can consult them on every read without caching.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};
