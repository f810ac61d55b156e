//! Implementation of the ChainGame trait for dots-and-boxes.

use dotsearch_core::{ChainGame, Result};

use crate::{Board, Cell};

/// Dots-and-boxes on an `n x n` box grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotsAndBoxes {
    initial: Board,
}

impl DotsAndBoxes {
    /// # Errors
    /// Returns `SearchError::InvalidGridSize` if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            initial: Board::new(n)?,
        })
    }

    /// Play from a prepared board (seeded moves, presets) instead of an empty one
    pub fn from_board(initial: Board) -> Self {
        Self { initial }
    }

    pub fn n(&self) -> usize {
        self.initial.n()
    }
}

impl ChainGame for DotsAndBoxes {
    type State = Board;
    type Action = Cell;

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn legal_actions(&self, state: &Board) -> Vec<Cell> {
        state.valid_moves()
    }

    fn apply(&self, state: &Board, action: Cell) -> Board {
        state.with_move(action)
    }

    fn grants_extra_move(&self, state: &Board, action: Cell) -> bool {
        state.would_complete_square(action)
    }

    fn max_turn_length(&self, state: &Board) -> usize {
        // Every move of a turn draws a fresh line
        state.line_count() - state.drawn_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_trait_basic() {
        let game = DotsAndBoxes::new(2).unwrap();
        let state = game.initial_state();

        assert_eq!(game.legal_actions(&state).len(), 12);
        assert_eq!(game.max_turn_length(&state), 12);
    }

    #[test]
    fn test_game_apply_move() {
        let game = DotsAndBoxes::new(1).unwrap();
        let state = game.initial_state();
        let actions = game.legal_actions(&state);

        let next = game.apply(&state, actions[0]);
        assert_eq!(game.legal_actions(&next).len(), 3);
        assert_eq!(game.max_turn_length(&next), 3);
        // Original untouched
        assert_eq!(game.legal_actions(&state).len(), 4);
    }

    #[test]
    fn test_game_extra_move() {
        let game = DotsAndBoxes::new(1).unwrap();
        let state = game
            .initial_state()
            .with_moves([Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 2)]);
        assert!(game.grants_extra_move(&state, Cell::new(2, 1)));

        let fresh = game.initial_state();
        assert!(!game.grants_extra_move(&fresh, Cell::new(2, 1)));
    }

    #[test]
    fn test_game_from_board() {
        let seeded = Board::new(1).unwrap().with_move(Cell::new(1, 0));
        let game = DotsAndBoxes::from_board(seeded.clone());
        assert_eq!(game.n(), 1);
        assert_eq!(game.initial_state(), seeded);
    }

    #[test]
    fn test_game_rejects_zero_size() {
        assert!(DotsAndBoxes::new(0).is_err());
    }
}
