//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines checked for three in a row, in evaluation order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line in [`WINNING_LINES`] holding three
/// equal marks, `None` otherwise. A board that is full without a winner
/// also yields `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks {
            let pos = Position::from_index(*index).expect("index in range");
            board.set(pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Mark::O));
            }
            assert_eq!(check_winner(&board), Some(Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (4, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Two completed rows; the earlier row in evaluation order is reported.
        let board = board_with(&[
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::X),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_every_board_matches_line_definition() {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        for code in 0..3usize.pow(9) {
            let mut squares = [Square::Empty; 9];
            let mut rest = code;
            for square in squares.iter_mut() {
                *square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Mark::X),
                    _ => Square::Occupied(Mark::O),
                };
                rest /= 3;
            }

            let expected = LINES.iter().find_map(|[a, b, c]| {
                let first = squares[*a];
                (first != Square::Empty && first == squares[*b] && first == squares[*c])
                    .then(|| first.mark())
                    .flatten()
            });

            assert_eq!(
                check_winner(&Board::from_squares(squares)),
                expected,
                "board {:?}",
                squares
            );
        }
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
