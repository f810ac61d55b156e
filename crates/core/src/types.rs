//! Search domain types with enforced invariants.

use std::fmt;

use crate::{Result, SearchError};

/// A search depth, counted in full turns (plies).
///
/// Invariant: never negative. Raw depths coming from callers are validated
/// once, before any expansion begins.
///
/// # Example
/// ```
/// use dotsearch_core::Depth;
///
/// let depth = Depth::new(2).unwrap();
/// assert_eq!(depth.get(), 2);
/// assert!(Depth::new(-1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    /// Depth zero: the root is not expanded at all.
    pub const ZERO: Self = Self(0);

    /// Create a depth from a raw, possibly negative value.
    ///
    /// # Errors
    /// Returns `SearchError::NegativeDepth` if `depth < 0`.
    pub fn new(depth: i64) -> Result<Self> {
        if depth < 0 {
            return Err(SearchError::NegativeDepth(depth));
        }
        let depth = u32::try_from(depth).unwrap_or(u32::MAX);
        Ok(Self(depth))
    }

    /// Get the underlying number of plies.
    pub fn get(self) -> u32 {
        self.0
    }

    /// True if expansion should stop here.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The depth remaining for children, or `None` at depth zero.
    pub fn child(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<u32> for Depth {
    fn from(depth: u32) -> Self {
        Self(depth)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
