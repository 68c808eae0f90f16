//! Application state and key handling.

use crate::input::{digit_position, move_cursor, move_selection};
use crate::settings::Settings;
use crossterm::event::KeyCode;
use strictly_timetravel::{Action, Game, Position, Renderer, SessionError, SessionView};
use tracing::{debug, info, instrument};

/// Keeps the most recent view handed over by the game.
#[derive(Debug, Default)]
pub struct LatestView(Option<SessionView>);

impl LatestView {
    /// The last rendered view, if any.
    pub fn get(&self) -> Option<&SessionView> {
        self.0.as_ref()
    }
}

impl Renderer for LatestView {
    fn render(&mut self, view: &SessionView) {
        self.0 = Some(view.clone());
    }
}

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
pub struct App {
    game: Game<LatestView>,
    settings: Settings,
    cursor: Position,
    selected: usize,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        let game = Game::with_draw_policy(LatestView::default(), settings.draw_policy());
        Self {
            game,
            settings,
            cursor: Position::Center,
            selected: 0,
            focus: Focus::default(),
            should_quit: false,
        }
    }

    /// The view to draw.
    pub fn view(&self) -> SessionView {
        self.game
            .renderer()
            .get()
            .cloned()
            .unwrap_or_else(|| self.game.view())
    }

    /// Labels for the move list, annotated with the move each step made.
    pub fn move_labels(&self) -> Vec<String> {
        let moves = self.game.session().moves();
        self.view()
            .moves
            .into_iter()
            .map(|entry| match entry.step.checked_sub(1).and_then(|i| moves.get(i)) {
                Some(mv) => format!("{} ({})", entry.label, mv),
                None => entry.label,
            })
            .collect()
    }

    /// Position highlighted on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move-list entry highlighted.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Settings the app was started with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates session errors from jumps. The selection is kept within the
    /// history, so this only fails on a broken move list.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), SessionError> {
        let key = match key {
            KeyCode::Char(' ') => KeyCode::Enter,
            other => other,
        };

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.session().cursor();
            }
            KeyCode::Char(_) => {
                if let Some(position) = digit_position(key) {
                    self.cursor = position;
                    self.apply(Action::RecordMove(position))?;
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key)?,
                Focus::Moves => self.handle_moves_key(key)?,
            },
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Result<(), SessionError> {
        match key {
            KeyCode::Enter => self.apply(Action::RecordMove(self.cursor)),
            _ => {
                self.cursor = move_cursor(self.cursor, key);
                Ok(())
            }
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) -> Result<(), SessionError> {
        match key {
            KeyCode::Enter => self.apply(Action::JumpTo(self.selected)),
            _ => {
                let len = self.game.session().history().len();
                self.selected = move_selection(self.selected, len, key);
                Ok(())
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), SessionError> {
        let changed = self.game.dispatch(action)?;
        debug!(%action, changed, "Action dispatched");
        self.selected = self.game.session().cursor();
        Ok(())
    }

    fn restart(&mut self) {
        self.game.restart();
        self.cursor = Position::Center;
        self.selected = 0;
        self.focus = Focus::Board;
    }
}
