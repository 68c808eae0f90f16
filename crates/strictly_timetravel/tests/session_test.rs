//! Tests for session transitions and time travel.

use strictly_timetravel::rules::check_winner;
use strictly_timetravel::{Action, Board, Mark, Position, Session, Square, Status};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

fn play(indices: &[usize]) -> Session {
    indices
        .iter()
        .fold(Session::new(), |session, index| session.record_move(pos(*index)))
}

#[test]
fn test_first_move_marks_x() {
    let session = Session::new().record_move(Position::Center);

    assert_eq!(session.current_board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(session.status(), Status::Next(Mark::O));
    assert_eq!(session.status().to_string(), "Next player: O");
}

#[test]
fn test_top_row_win() {
    let session = play(&[0, 4, 1, 5, 2]);

    assert_eq!(check_winner(session.current_board()), Some(Mark::X));
    assert_eq!(session.status(), Status::Winner(Mark::X));
    assert_eq!(session.status().to_string(), "Winner: X");
}

#[test]
fn test_move_after_win_is_ignored() {
    let won = play(&[0, 4, 1, 5, 2]);
    let after = won.record_move(pos(6));

    assert_eq!(after, won);
    assert_eq!(after.history().len(), 6);
}

#[test]
fn test_move_on_occupied_square_is_ignored() {
    let session = play(&[4]);
    let after = session.record_move(Position::Center);

    assert_eq!(after, session);
    assert_eq!(after.to_move(), Mark::O);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let session = play(&[0, 1, 3, 4, 6]);
    // X completed the left column on the last move.
    assert_eq!(session.status(), Status::Winner(Mark::X));

    let session = session.jump_to(2).expect("step in range");
    assert_eq!(session.history().len(), 6);

    let session = session.record_move(pos(5));
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.cursor(), 3);
    assert_eq!(session, play(&[0, 1, 5]));
}

#[test]
fn test_full_board_keeps_reporting_next_player() {
    // X O X / X O O / O X X
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(session.current_board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(check_winner(session.current_board()), None);
    assert_eq!(session.status(), Status::Next(Mark::O));

    // Nothing left to play, so further moves change nothing.
    for position in Position::ALL {
        assert_eq!(session.record_move(position), session);
    }
}

#[test]
fn test_history_starts_empty_after_any_sequence() {
    let actions = [
        Action::RecordMove(Position::Center),
        Action::RecordMove(Position::Center),
        Action::RecordMove(Position::TopLeft),
        Action::JumpTo(0),
        Action::RecordMove(Position::BottomRight),
        Action::JumpTo(1),
        Action::RecordMove(Position::TopRight),
    ];

    let mut session = Session::new();
    for action in actions {
        session = session.reduce(action).expect("valid action");
        assert_eq!(session.history()[0], Board::new());
    }
}

#[test]
fn test_turn_follows_cursor_parity() {
    let session = play(&[4, 0, 8, 2, 6]);
    for step in 0..session.history().len() {
        let jumped = session.jump_to(step).expect("step in range");
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(jumped.to_move(), expected, "step {}", step);
    }
}

#[test]
fn test_jump_shows_recorded_board() {
    let session = play(&[4, 0, 8, 2]);
    for step in 0..session.history().len() {
        let jumped = session.jump_to(step).expect("step in range");
        assert_eq!(jumped.current_board(), &session.history()[step]);
        assert_eq!(jumped.history(), session.history());
    }
}

#[test]
fn test_move_after_jump_length() {
    let session = play(&[4, 0, 8, 2, 6, 1]);
    for step in 0..session.history().len() - 1 {
        let jumped = session.jump_to(step).expect("step in range");
        let target = Position::valid_moves(jumped.current_board())[0];
        let after = jumped.record_move(target);
        assert_eq!(after.history().len(), step + 2, "step {}", step);
    }
}

#[test]
fn test_jump_past_end_is_an_error() {
    let session = play(&[4]);
    let result = session.reduce(Action::JumpTo(5));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("step 5"));
}
