//! Rules engine invariants on boards of many shapes

use gridtoe::{
    Error,
    tictactoe::{Board, Cell, Line, LineAnalyzer, Move, Outcome, Player},
};
use proptest::prelude::*;

mod board_properties {
    use super::*;

    proptest! {
        #[test]
        fn empty_board_is_in_progress(height in 1usize..6, width in 1usize..6) {
            let board = Board::new(height, width);
            prop_assert_eq!(board.evaluate(), Outcome::InProgress);
            prop_assert_eq!(board.empty_positions().len(), height * width);
            prop_assert_eq!(board.legal_moves(Player::X).len(), height * width);
        }

        #[test]
        fn uniform_row_wins(height in 1usize..6, width in 1usize..6, pick in 0usize..6, x in any::<bool>()) {
            let row = pick % height;
            let player = if x { Player::X } else { Player::O };
            let rows: Vec<Vec<Cell>> = (0..height)
                .map(|r| {
                    let fill = if r == row { player.to_cell() } else { Cell::Empty };
                    vec![fill; width]
                })
                .collect();
            let board = Board::from_rows(rows).unwrap();
            prop_assert_eq!(board.evaluate(), Outcome::Winner(player));
        }

        #[test]
        fn non_square_boards_never_win_on_a_diagonal(height in 1usize..6, width in 1usize..6) {
            prop_assume!(height != width);
            let lines: Vec<Line> = LineAnalyzer::lines(&Board::new(height, width)).collect();
            prop_assert_eq!(lines.len(), height + width);
            prop_assert!(!lines.contains(&Line::Diagonal));
            prop_assert!(!lines.contains(&Line::AntiDiagonal));
        }

        #[test]
        fn play_never_mutates_the_original(row in 0usize..3, col in 0usize..3) {
            let board = Board::new(3, 3);
            let next = board.play(Move::new(row, col, Player::X)).unwrap();
            prop_assert_eq!(board.occupied_count(), 0);
            prop_assert_eq!(next.get(row, col), Some(Cell::X));
        }

        #[test]
        fn encode_parses_back(cells in proptest::collection::vec(0u8..3, 12)) {
            let rows: Vec<Vec<Cell>> = cells
                .chunks(4)
                .map(|chunk| {
                    chunk
                        .iter()
                        .map(|c| match c {
                            0 => Cell::Empty,
                            1 => Cell::X,
                            _ => Cell::O,
                        })
                        .collect()
                })
                .collect();
            let board = Board::from_rows(rows).unwrap();
            prop_assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
        }
    }

    #[test]
    fn opponent_is_an_involution() {
        for player in [Player::X, Player::O] {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }
}

mod move_validation {
    use super::*;

    #[test]
    fn errors_are_checked_in_order() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert!(matches!(
            won.play(Move::new(9, 9, Player::O)),
            Err(Error::GameAlreadyOver { .. })
        ));

        let open: Board = "X../.../...".parse().unwrap();
        assert!(matches!(
            open.play(Move::new(3, 0, Player::O)),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            open.play(Move::new(0, 0, Player::O)),
            Err(Error::CellOccupied { row: 0, col: 0 })
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(
            Board::from_string("XO./X."),
            Err(Error::RaggedRows { .. })
        ));
    }

    #[test]
    fn serde_uses_rows_of_cells() {
        let board: Board = "X./.O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let ragged = r#"[["X","O"],["X"]]"#;
        assert!(serde_json::from_str::<Board>(ragged).is_err());
    }
}

mod outcomes {
    use super::*;

    #[test]
    fn tall_board_wins_by_column_only() {
        let board: Board = "X./X./X.".parse().unwrap();
        assert_eq!(board.evaluate(), Outcome::Winner(Player::X));
        assert_eq!(
            LineAnalyzer::winning_line(&board),
            Some((Line::Column(0), Player::X))
        );
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board: Board = "XO/OX/XO".parse().unwrap();
        assert_eq!(board.evaluate(), Outcome::Draw);
        assert!(board.legal_moves(Player::X).is_empty());
    }
}
