//! Read-only session views and the render contract.
//!
//! The presentation layer never touches a [`Session`] directly. It implements
//! [`Renderer`], receives a [`SessionView`] whenever the session changes, and
//! feeds user input back through [`Game::dispatch`].

use super::error::SessionError;
use super::{Action, Board, DrawPolicy, Session};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One entry of the move list: a label and the step it jumps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Button text, e.g. `"Go to move #3"`.
    pub label: String,
    /// History index to jump to.
    pub step: usize,
}

impl MoveEntry {
    /// Creates the entry for a history step.
    pub fn for_step(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { label, step }
    }
}

/// Everything a renderer needs to draw one frame.
///
/// Computed from a session on demand, never stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Board at the cursor.
    pub board: Board,
    /// Status line, e.g. `"Next player: O"` or `"Winner: X"`.
    pub status: String,
    /// One entry per history board, oldest first.
    pub moves: Vec<MoveEntry>,
    /// Step currently shown.
    pub cursor: usize,
}

impl SessionView {
    /// Builds the view of a session under a draw policy.
    #[instrument(skip(session), fields(cursor = session.cursor()))]
    pub fn new(session: &Session, policy: DrawPolicy) -> Self {
        Self {
            board: *session.current_board(),
            status: session.status_with(policy).to_string(),
            moves: (0..session.history().len()).map(MoveEntry::for_step).collect(),
            cursor: session.cursor(),
        }
    }
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self::new(session, DrawPolicy::default())
    }
}

/// Receives a fresh view each time the session changes.
pub trait Renderer {
    /// Draws the given view.
    fn render(&mut self, view: &SessionView);
}

impl<F> Renderer for F
where
    F: FnMut(&SessionView),
{
    fn render(&mut self, view: &SessionView) {
        self(view)
    }
}

/// Drives a session on behalf of a renderer.
///
/// Holds the only live [`Session`] and replaces it with the reducer's output
/// on every dispatched action.
#[derive(Debug, Getters)]
pub struct Game<R> {
    /// The current session.
    session: Session,
    /// The presentation layer.
    renderer: R,
    /// How full boards are reported.
    draw_policy: DrawPolicy,
}

impl<R: Renderer> Game<R> {
    /// Starts a new game and renders the opening board.
    #[instrument(skip(renderer))]
    pub fn new(renderer: R) -> Self {
        Self::with_draw_policy(renderer, DrawPolicy::default())
    }

    /// Starts a new game with an explicit draw policy.
    #[instrument(skip(renderer))]
    pub fn with_draw_policy(renderer: R, draw_policy: DrawPolicy) -> Self {
        let mut game = Self {
            session: Session::new(),
            renderer,
            draw_policy,
        };
        info!("Game started");
        game.render();
        game
    }

    /// The view of the current session.
    pub fn view(&self) -> SessionView {
        SessionView::new(&self.session, self.draw_policy)
    }

    /// Applies an action and re-renders if the session changed.
    ///
    /// Returns whether anything changed; a rejected move yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the session's error for a jump past the end of the history.
    #[instrument(skip(self), fields(cursor = self.session.cursor()))]
    pub fn dispatch(&mut self, action: Action) -> Result<bool, SessionError> {
        let next = self.session.reduce(action)?;
        if next == self.session {
            debug!("Action left session unchanged");
            return Ok(false);
        }

        self.session = next;
        self.render();
        Ok(true)
    }

    /// Discards the session and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Game restarted");
        self.session = Session::new();
        self.render();
    }

    fn render(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }
}
