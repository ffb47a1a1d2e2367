use crate::game::{Board, Cell, Location, COLS};

/// One candidate per non-full column, column-ascending: the single cell where
/// a piece dropped there would land. Empty only for a completely full board.
pub fn valid_moves(board: &Board) -> Vec<Location> {
    (0..COLS)
        .filter_map(|col| board.drop_row(col).map(|row| Location::new(row, col)))
        .collect()
}

/// First listed move that would end the game if `cell` played it: a win for
/// `cell`, or the last cell of a drawn board.
pub(crate) fn terminal_placement(
    board: &Board,
    moves: &[Location],
    cell: Cell,
) -> Option<Location> {
    moves.iter().copied().find(|&mv| {
        let simulated = board.with_cell(mv, cell);
        simulated.is_winning_placement(mv.row, mv.col) || simulated.is_full()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;

    #[test]
    fn test_one_candidate_per_open_column() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        for _ in 0..ROWS {
            board.drop_piece(5, Cell::Red).unwrap();
        }

        let moves = valid_moves(&board);
        assert_eq!(moves.len(), COLS - 1); // column 5 is full

        for (i, mv) in moves.iter().enumerate() {
            // Column-ascending, skipping the full column
            let expected_col = if i < 5 { i } else { i + 1 };
            assert_eq!(mv.col, expected_col);
            assert_eq!(board.drop_row(mv.col), Some(mv.row));
        }
    }

    #[test]
    fn test_empty_only_when_board_full() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let cell = if (row + col) % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board.drop_piece(col, cell).unwrap();
            }
        }
        assert!(valid_moves(&board).is_empty());
    }

    #[test]
    fn test_terminal_placement_finds_completing_cell() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }

        let moves = valid_moves(&board);
        let spot = terminal_placement(&board, &moves, Cell::Yellow).unwrap();
        assert_eq!(spot, Location::new(5, 3));

        // Red has nothing to complete
        assert!(terminal_placement(&board, &moves, Cell::Red).is_none());

        // Simulation left the board untouched
        assert_eq!(board.get(5, 3), Cell::Empty);
    }
}
