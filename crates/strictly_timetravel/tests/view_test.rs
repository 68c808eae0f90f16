//! Tests for the render contract.

use strictly_timetravel::{
    Action, DrawPolicy, Game, Mark, MoveEntry, Position, Renderer, SessionView, Square,
};

/// Renderer that keeps every frame it is handed.
#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<SessionView>,
}

impl Renderer for Recorder {
    fn render(&mut self, view: &SessionView) {
        self.frames.push(view.clone());
    }
}

#[test]
fn test_game_renders_opening_board() {
    let game = Game::new(Recorder::default());
    let frames = &game.renderer().frames;

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].status, "Next player: X");
    assert_eq!(frames[0].moves, vec![MoveEntry::for_step(0)]);
}

#[test]
fn test_move_list_labels() {
    let mut game = Game::new(Recorder::default());
    for position in [Position::Center, Position::TopLeft, Position::BottomRight] {
        game.dispatch(Action::RecordMove(position)).unwrap();
    }

    let labels: Vec<_> = game.view().moves.into_iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
    );
}

#[test]
fn test_rejected_move_does_not_render() {
    let mut game = Game::new(Recorder::default());
    game.dispatch(Action::RecordMove(Position::Center)).unwrap();
    let changed = game.dispatch(Action::RecordMove(Position::Center)).unwrap();

    assert!(!changed);
    assert_eq!(game.renderer().frames.len(), 2);
}

#[test]
fn test_jump_keeps_move_list() {
    let mut game = Game::new(Recorder::default());
    game.dispatch(Action::RecordMove(Position::Center)).unwrap();
    game.dispatch(Action::RecordMove(Position::TopLeft)).unwrap();
    game.dispatch(Action::JumpTo(1)).unwrap();

    let last = game.renderer().frames.last().unwrap();
    assert_eq!(last.cursor, 1);
    assert_eq!(last.moves.len(), 3);
    assert_eq!(last.board.get(Position::TopLeft), Square::Empty);
    assert_eq!(last.board.get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_jump_error_propagates_without_render() {
    let mut game = Game::new(Recorder::default());
    assert!(game.dispatch(Action::JumpTo(1)).is_err());
    assert_eq!(game.renderer().frames.len(), 1);
}

#[test]
fn test_draw_policy_reaches_status() {
    let mut game = Game::with_draw_policy(Recorder::default(), DrawPolicy::Report);
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        let position = Position::from_index(index).unwrap();
        game.dispatch(Action::RecordMove(position)).unwrap();
    }
    assert_eq!(game.view().status, "Draw");
}

#[test]
fn test_restart_renders_empty_board() {
    let mut game = Game::new(Recorder::default());
    game.dispatch(Action::RecordMove(Position::Center)).unwrap();
    game.restart();

    let last = game.renderer().frames.last().unwrap();
    assert!(last.board.is_blank());
    assert_eq!(game.session().history().len(), 1);
}

#[test]
fn test_view_serializes_for_the_wire() {
    let game = Game::new(Recorder::default());
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["moves"][0]["label"], "Go to game start");
    assert_eq!(json["cursor"], 0);
}
