use crate::game::{Board, Moves, COLS};

/// Column ordering: center-first for better alpha-beta pruning.
pub const MOVE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Playable columns in [`MOVE_ORDER`]. Empty once the board is full.
pub fn valid_moves(board: &Board) -> Moves {
    MOVE_ORDER
        .iter()
        .copied()
        .filter(|&col| !board.is_column_full(col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, CENTER_COL, ROWS};
    use crate::test_utils::drawn_board;

    #[test]
    fn order_starts_at_center_and_alternates_outward() {
        assert_eq!(MOVE_ORDER[0], CENTER_COL);
        for pair in MOVE_ORDER.windows(2) {
            let d0 = pair[0].abs_diff(CENTER_COL);
            let d1 = pair[1].abs_diff(CENTER_COL);
            assert!(d1 == d0 || d1 == d0 + 1);
        }
    }

    #[test]
    fn empty_board_offers_every_column() {
        let moves = valid_moves(&Board::new());
        assert_eq!(moves.as_slice(), &MOVE_ORDER);
    }

    #[test]
    fn full_columns_are_skipped() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(3, Player::Red);
            board.place(0, Player::Yellow);
        }
        assert_eq!(valid_moves(&board).as_slice(), &[2, 4, 1, 5, 6]);
    }

    #[test]
    fn full_board_has_no_moves() {
        assert!(valid_moves(&drawn_board()).is_empty());
    }
}
