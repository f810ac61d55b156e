//! Dotsearch Core - Game abstraction and common types
//!
//! This crate provides the [`ChainGame`] trait that connects a concrete
//! rule set (dots-and-boxes) with the generic turn and game tree builders.
//!
//! # Types
//!
//! - [`ChainGame`] - Trait for games whose turns may chain several moves
//! - [`Depth`] - Validated, non-negative search depth
//! - [`SearchError`] - Errors shared by every crate in the workspace

mod error;
mod game;
mod types;

pub use error::{Result, SearchError};
pub use game::ChainGame;
pub use types::Depth;
