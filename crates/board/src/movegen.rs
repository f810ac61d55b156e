//! Move generation for dots-and-boxes.
//!
//! A move is any undrawn line. Moves are always produced in row-major order,
//! which fixes the branch order of every tree built on top of them.

use crate::{Board, Cell};

impl Board {
    /// Check if a cell is a line that can still be drawn.
    ///
    /// Off-grid coordinates are simply not valid moves.
    pub fn is_valid_move(&self, cell: Cell) -> bool {
        self.contains(cell) && cell.is_line() && !self.is_drawn(cell)
    }

    /// Generate all valid moves, ordered by row then column
    pub fn valid_moves(&self) -> Vec<Cell> {
        let mut moves = Vec::with_capacity(self.line_count());
        moves.extend(self.lines().filter(|&line| !self.is_drawn(line)));
        moves
    }

    /// Check if drawing `mv` would complete at least one box.
    ///
    /// The board is only read; the move is counted as drawn for the
    /// neighbouring boxes without being placed.
    ///
    /// # Panics
    /// Panics if `mv` is off the grid or is not a line cell.
    pub fn would_complete_square(&self, mv: Cell) -> bool {
        self.neighbor_boxes(mv)
            .any(|box_cell| self.box_side_count_with(box_cell, mv) == 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_moves_fresh_board() {
        let board = Board::new(1).unwrap();
        assert_eq!(
            board.valid_moves(),
            vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_valid_moves_are_row_major() {
        let board = Board::new(3).unwrap().with_moves([Cell::new(3, 2), Cell::new(0, 5)]);
        let moves = board.valid_moves();
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
        assert_eq!(moves.len(), 22);
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::new(1).unwrap().with_move(Cell::new(0, 1));
        assert!(!board.is_valid_move(Cell::new(0, 1))); // drawn
        assert!(board.is_valid_move(Cell::new(1, 0)));
        assert!(!board.is_valid_move(Cell::new(0, 0))); // dot
        assert!(!board.is_valid_move(Cell::new(1, 1))); // box
        assert!(!board.is_valid_move(Cell::new(3, 0))); // off grid
    }

    #[test]
    fn test_would_complete_square_three_sides() {
        // Box (1,1) has every side but (2,1)
        let board = Board::new(2)
            .unwrap()
            .with_moves([Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2)]);
        assert_eq!(board.box_side_count(Cell::new(1, 1)), 3);

        assert!(board.would_complete_square(Cell::new(2, 1)));

        // Moves that do not touch box (1,1)
        assert!(!board.would_complete_square(Cell::new(0, 3)));
        assert!(!board.would_complete_square(Cell::new(4, 3)));
        assert!(!board.would_complete_square(Cell::new(3, 4)));
    }

    #[test]
    fn test_would_complete_square_does_not_mutate() {
        let board = Board::new(1)
            .unwrap()
            .with_moves([Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2)]);
        let before = board.clone();
        assert!(board.would_complete_square(Cell::new(2, 1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_complete_two_boxes_at_once() {
        // Line (1,2) is the last side of both (1,1) and (1,3)
        let board = Board::new(2).unwrap().with_moves([
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(2, 1),
            Cell::new(0, 3),
            Cell::new(1, 4),
            Cell::new(2, 3),
        ]);
        assert!(board.would_complete_square(Cell::new(1, 2)));
        let after = board.with_move(Cell::new(1, 2));
        assert_eq!(after.completed_boxes(), vec![Cell::new(1, 1), Cell::new(1, 3)]);
    }
}
