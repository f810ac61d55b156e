//! Dotsearch Board - Dots-and-boxes grid and move generation
//!
//! The grid is stored as a flat `(2N+1)x(2N+1)` array of small integers.
//! Cell kinds follow from coordinate parity, see [`CellKind`].

mod board;
mod cell;
mod game_impl;
mod movegen;

pub use board::{Board, BoardOptions, BOX_MARKER, DRAWN, EMPTY};
pub use cell::{Cell, CellKind};
pub use game_impl::DotsAndBoxes;
