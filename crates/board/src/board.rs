//! Dots-and-boxes grid representation.
//!
//! A board for an `N`-box-wide game is a `(2N+1)x(2N+1)` grid of cells.
//! Dots sit on even/even coordinates, boxes on odd/odd coordinates, and every
//! other cell is a line slot that holds 0 (undrawn) or 1 (drawn).

use dotsearch_core::{Result, SearchError};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Cell, CellKind};

/// Value of an undrawn line (and of every dot and box cell)
pub const EMPTY: u8 = 0;
/// Value of a drawn line
pub const DRAWN: u8 = 1;
/// Display value of a box cell on a colored board
pub const BOX_MARKER: u8 = 2;

/// Construction presets for [`Board::with_options`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BoardOptions {
    /// Pre-draw every line on the outer edge of the grid.
    pub boundary: bool,
    /// Display-only markers: boxes show as 2 and lines as 1 in
    /// [`Board::display_value`]. Never affects legality.
    pub colored: bool,
}

/// A dots-and-boxes board.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    n: usize,
    side: usize,
    cells: Vec<u8>,
    colored: bool,
}

impl Board {
    /// Create an empty board with `n` boxes per side.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidGridSize` if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_options(n, BoardOptions::default())
    }

    /// Create a board with the given presets applied.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidGridSize` if `n == 0`.
    pub fn with_options(n: usize, options: BoardOptions) -> Result<Self> {
        if n == 0 {
            return Err(SearchError::InvalidGridSize(n));
        }
        let side = 2 * n + 1;
        let mut board = Board {
            n,
            side,
            cells: vec![EMPTY; side * side],
            colored: options.colored,
        };

        if options.boundary {
            let last = side - 1;
            let edge_lines: Vec<Cell> = board
                .lines()
                .filter(|c| c.row == 0 || c.row == last || c.col == 0 || c.col == last)
                .collect();
            for line in edge_lines {
                board.play(line);
            }
        }

        Ok(board)
    }

    /// Number of boxes along one side
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of cells along one side (`2N+1`)
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// True if the board was created with display markers
    #[inline]
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Check if a coordinate lies on the grid
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.side && cell.col < self.side
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell} is outside a {0}x{0} grid",
            self.side
        );
        cell.row * self.side + cell.col
    }

    /// Game value of a cell: 1 for a drawn line, 0 otherwise.
    ///
    /// # Panics
    /// Panics if the cell is off the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> u8 {
        self.cells[self.index(cell)]
    }

    /// Value of a cell as shown on a display.
    ///
    /// Same as [`Board::get`] unless the board is colored, in which case
    /// boxes read as 2 and lines as 1.
    pub fn display_value(&self, cell: Cell) -> u8 {
        if !self.colored {
            return self.get(cell);
        }
        match cell.kind() {
            CellKind::Dot => EMPTY,
            CellKind::Line => DRAWN,
            CellKind::Box => BOX_MARKER,
        }
    }

    /// Rows of game values, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.side)
    }

    /// Check if a line cell has been drawn
    #[inline]
    pub fn is_drawn(&self, cell: Cell) -> bool {
        self.get(cell) == DRAWN
    }

    /// Draw a line. Drawing an already-drawn line is a no-op.
    ///
    /// # Panics
    /// Panics if the cell is off the grid or is not a line cell.
    pub fn play(&mut self, cell: Cell) {
        assert!(cell.is_line(), "cell {cell} is not a line cell");
        let idx = self.index(cell);
        self.cells[idx] = DRAWN;
    }

    /// Draw a line supplied from outside the search (e.g. seed moves).
    ///
    /// # Errors
    /// Returns `SearchError::OutOfBounds` or `SearchError::NotALine` instead
    /// of panicking.
    pub fn try_play(&mut self, cell: Cell) -> Result<()> {
        if !self.contains(cell) {
            return Err(SearchError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                side: self.side,
            });
        }
        if !cell.is_line() {
            return Err(SearchError::NotALine {
                row: cell.row,
                col: cell.col,
            });
        }
        self.play(cell);
        Ok(())
    }

    /// Copy the board and draw one line on the copy
    #[must_use]
    pub fn with_move(&self, cell: Cell) -> Board {
        let mut next = self.clone();
        next.play(cell);
        next
    }

    /// Copy the board and draw every line in order on the copy
    #[must_use]
    pub fn with_moves<I>(&self, cells: I) -> Board
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = self.clone();
        for cell in cells {
            next.play(cell);
        }
        next
    }

    /// Copy the board and play `count` uniformly chosen valid moves on it.
    ///
    /// Stops early if the board fills up.
    #[must_use]
    pub fn with_random_moves<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Board {
        let mut next = self.clone();
        for _ in 0..count {
            let moves = next.valid_moves();
            match moves.choose(rng) {
                Some(&mv) => next.play(mv),
                None => break,
            }
        }
        next
    }

    /// The box cells flanking a line: two for interior lines, one on the edge.
    ///
    /// # Panics
    /// Panics if the cell is off the grid or is not a line cell.
    pub fn neighbor_boxes(&self, line: Cell) -> impl Iterator<Item = Cell> {
        assert!(line.is_line(), "cell {line} is not a line cell");
        assert!(self.contains(line), "cell {line} is outside the grid");

        let last = self.side - 1;
        let (before, after) = if line.is_horizontal() {
            (
                (line.row != 0).then(|| Cell::new(line.row - 1, line.col)),
                (line.row != last).then(|| Cell::new(line.row + 1, line.col)),
            )
        } else {
            (
                (line.col != 0).then(|| Cell::new(line.row, line.col - 1)),
                (line.col != last).then(|| Cell::new(line.row, line.col + 1)),
            )
        };
        before.into_iter().chain(after)
    }

    /// Number of drawn sides (0-4) around a box cell.
    ///
    /// # Panics
    /// Panics if the cell is off the grid or is not a box cell.
    pub fn box_side_count(&self, box_cell: Cell) -> u8 {
        assert!(box_cell.is_box(), "cell {box_cell} is not a box cell");
        box_cell
            .box_sides()
            .into_iter()
            .filter(|&side| self.is_drawn(side))
            .count() as u8
    }

    /// Side count of a box as if `extra` were drawn as well
    pub(crate) fn box_side_count_with(&self, box_cell: Cell, extra: Cell) -> u8 {
        box_cell
            .box_sides()
            .into_iter()
            .filter(|&side| side == extra || self.is_drawn(side))
            .count() as u8
    }

    /// All line cells in row-major order
    pub fn lines(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.side).flat_map(move |row| {
            let first_col = if row % 2 == 0 { 1 } else { 0 };
            (first_col..self.side)
                .step_by(2)
                .map(move |col| Cell::new(row, col))
        })
    }

    /// All box cells in row-major order
    pub fn boxes(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..self.side)
            .step_by(2)
            .flat_map(move |row| (1..self.side).step_by(2).map(move |col| Cell::new(row, col)))
    }

    /// Total number of line cells (`2N(N+1)`)
    pub fn line_count(&self) -> usize {
        2 * self.n * (self.n + 1)
    }

    /// Number of lines drawn so far
    pub fn drawn_count(&self) -> usize {
        self.lines().filter(|&line| self.is_drawn(line)).count()
    }

    /// Boxes with all four sides drawn
    pub fn completed_boxes(&self) -> Vec<Cell> {
        self.boxes()
            .filter(|&b| self.box_side_count(b) == 4)
            .collect()
    }

    /// Boxes that still have at least one undrawn side
    pub fn open_boxes(&self) -> Vec<Cell> {
        self.boxes()
            .filter(|&b| self.box_side_count(b) < 4)
            .collect()
    }

    /// True when every line has been drawn
    pub fn is_full(&self) -> bool {
        self.drawn_count() == self.line_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_dimensions() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.n(), 3);
        assert_eq!(board.side(), 7);
        assert_eq!(board.rows().count(), 7);
        assert!(board.rows().all(|row| row.len() == 7));
        assert_eq!(board.line_count(), 24);
        assert_eq!(board.lines().count(), 24);
        assert_eq!(board.boxes().count(), 9);
    }

    #[test]
    fn test_board_rejects_zero_size() {
        assert_eq!(Board::new(0), Err(SearchError::InvalidGridSize(0)));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(2).unwrap();
        assert!(board.rows().flatten().all(|&v| v == EMPTY));
        assert_eq!(board.drawn_count(), 0);
        assert!(board.completed_boxes().is_empty());
        assert_eq!(board.open_boxes().len(), 4);
    }

    #[test]
    fn test_boundary_preset() {
        let board = Board::with_options(2, BoardOptions { boundary: true, colored: false }).unwrap();
        let drawn: Vec<Cell> = board.lines().filter(|&l| board.is_drawn(l)).collect();
        assert_eq!(
            drawn,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 3),
                Cell::new(1, 0),
                Cell::new(1, 4),
                Cell::new(3, 0),
                Cell::new(3, 4),
                Cell::new(4, 1),
                Cell::new(4, 3),
            ]
        );
        // Dots stay empty
        for row in (0..5).step_by(2) {
            for col in (0..5).step_by(2) {
                assert_eq!(board.get(Cell::new(row, col)), EMPTY);
            }
        }
    }

    #[test]
    fn test_colored_is_display_only() {
        let plain = Board::new(1).unwrap();
        let colored = Board::with_options(1, BoardOptions { boundary: false, colored: true }).unwrap();

        assert_eq!(colored.display_value(Cell::new(1, 1)), BOX_MARKER);
        assert_eq!(colored.display_value(Cell::new(0, 1)), DRAWN);
        assert_eq!(colored.display_value(Cell::new(0, 0)), EMPTY);
        assert!(colored.is_colored());
        assert!(!plain.is_colored());

        // Game values and legality are unaffected
        assert_eq!(colored.get(Cell::new(1, 1)), EMPTY);
        assert_eq!(colored.get(Cell::new(0, 1)), EMPTY);
        assert_eq!(colored.valid_moves(), plain.valid_moves());
    }

    #[test]
    fn test_play_and_noop_replay() {
        let mut board = Board::new(1).unwrap();
        board.play(Cell::new(0, 1));
        let once = board.clone();
        board.play(Cell::new(0, 1));
        assert_eq!(board, once);
        assert!(board.is_drawn(Cell::new(0, 1)));
        assert_eq!(board.drawn_count(), 1);
    }

    #[test]
    #[should_panic(expected = "not a line cell")]
    fn test_play_dot_panics() {
        let mut board = Board::new(1).unwrap();
        board.play(Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_play_out_of_bounds_panics() {
        let mut board = Board::new(1).unwrap();
        board.play(Cell::new(0, 3));
    }

    #[test]
    fn test_try_play_errors() {
        let mut board = Board::new(1).unwrap();
        assert_eq!(
            board.try_play(Cell::new(5, 1)),
            Err(SearchError::OutOfBounds { row: 5, col: 1, side: 3 })
        );
        assert_eq!(
            board.try_play(Cell::new(1, 1)),
            Err(SearchError::NotALine { row: 1, col: 1 })
        );
        assert!(board.try_play(Cell::new(1, 0)).is_ok());
        assert!(board.is_drawn(Cell::new(1, 0)));
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new(1).unwrap();
        let next = board.with_move(Cell::new(2, 1));
        assert!(!board.is_drawn(Cell::new(2, 1)));
        assert!(next.is_drawn(Cell::new(2, 1)));
    }

    #[test]
    fn test_neighbor_boxes() {
        let board = Board::new(2).unwrap();
        let boxes = |r, c| board.neighbor_boxes(Cell::new(r, c)).collect::<Vec<_>>();

        // Edges: one neighbor
        assert_eq!(boxes(0, 1), vec![Cell::new(1, 1)]);
        assert_eq!(boxes(4, 3), vec![Cell::new(3, 3)]);
        assert_eq!(boxes(1, 0), vec![Cell::new(1, 1)]);
        assert_eq!(boxes(3, 4), vec![Cell::new(3, 3)]);

        // Interior: two neighbors
        assert_eq!(boxes(2, 1), vec![Cell::new(1, 1), Cell::new(3, 1)]);
        assert_eq!(boxes(1, 2), vec![Cell::new(1, 1), Cell::new(1, 3)]);
    }

    #[test]
    fn test_box_side_count() {
        let mut board = Board::new(1).unwrap();
        let center = Cell::new(1, 1);
        assert_eq!(board.box_side_count(center), 0);
        for (i, side) in center.box_sides().into_iter().enumerate() {
            board.play(side);
            assert_eq!(board.box_side_count(center), i as u8 + 1);
        }
        assert_eq!(board.completed_boxes(), vec![center]);
        assert!(board.open_boxes().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_random_moves_stop_when_full() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let board = Board::new(1).unwrap();

        let partial = board.with_random_moves(2, &mut rng);
        assert_eq!(partial.drawn_count(), 2);

        let full = board.with_random_moves(100, &mut rng);
        assert!(full.is_full());
    }
}
