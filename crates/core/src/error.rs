use thiserror::Error;

/// Errors that can occur while building boards or search trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid grid size: {0} (must be at least 1)")]
    InvalidGridSize(usize),

    #[error("Search depth must not be negative, got {0}")]
    NegativeDepth(i64),

    #[error("Cell ({row},{col}) is outside a {side}x{side} grid")]
    OutOfBounds { row: usize, col: usize, side: usize },

    #[error("Cell ({row},{col}) is not a line cell")]
    NotALine { row: usize, col: usize },

    #[error("Invalid cell: {0}")]
    InvalidCell(String),

    #[error("Turn continued past the chain limit of {limit} moves")]
    ChainLimitExceeded { limit: usize },
}

/// Convenience Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
