//! Strictly Timetravel - tic-tac-toe with a rewindable move history
//!
//! The game is modelled as an immutable [`Session`] value: a list of board
//! snapshots plus a cursor into that list. Every user interaction is an
//! [`Action`] fed through [`Session::reduce`], which returns the next session.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and [`Position`]
//! - **Rules**: pure win and draw detection over the eight fixed lines
//! - **Session**: history, cursor and the derived turn flag
//! - **Invariants**: properties every session satisfies, checked in debug builds
//! - **View**: the read-only payload handed to a [`Renderer`]
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Mark, Position, Session, Status};
//!
//! let session = Session::new()
//!     .record_move(Position::TopLeft)
//!     .record_move(Position::Center)
//!     .record_move(Position::TopCenter)
//!     .record_move(Position::MiddleRight)
//!     .record_move(Position::TopRight);
//!
//! assert_eq!(session.status(), Status::Winner(Mark::X));
//! assert_eq!(session.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{Action, Move};
pub use error::{SessionError, SessionErrorKind};
pub use position::Position;
pub use session::{DrawPolicy, Session, Status};
pub use types::{Board, Mark, Square};
pub use view::{Game, MoveEntry, Renderer, SessionView};
