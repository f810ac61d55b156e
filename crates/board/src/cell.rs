use std::fmt;
use std::str::FromStr;

use dotsearch_core::SearchError;

/// What a grid cell represents, derived from the parity of its coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CellKind {
    /// Both coordinates even: an intersection, never a move target.
    Dot,
    /// Exactly one coordinate even: an edge slot that can be drawn.
    Line,
    /// Both coordinates odd: a box, surrounded by four lines.
    Box,
}

/// A grid coordinate, row first.
///
/// Ordering is row-major (row, then column), which is the order moves are
/// enumerated in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Classify the cell by coordinate parity
    #[inline]
    pub const fn kind(self) -> CellKind {
        match (self.row % 2 == 0, self.col % 2 == 0) {
            (true, true) => CellKind::Dot,
            (false, false) => CellKind::Box,
            _ => CellKind::Line,
        }
    }

    #[inline]
    pub const fn is_line(self) -> bool {
        matches!(self.kind(), CellKind::Line)
    }

    #[inline]
    pub const fn is_box(self) -> bool {
        matches!(self.kind(), CellKind::Box)
    }

    /// True for lines on an even row (they run left to right between two dots)
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 1
    }

    /// The four line cells around a box cell: left, right, up, down
    pub const fn box_sides(self) -> [Cell; 4] {
        debug_assert!(self.is_box());
        [
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl FromStr for Cell {
    type Err = SearchError;

    /// Parse `"row,col"`, optionally wrapped in parentheses, e.g. `"(1,2)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| SearchError::InvalidCell(format!("expected \"row,col\", got {s:?}")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| SearchError::InvalidCell(format!("{s:?}: {e}")))
        };

        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}
