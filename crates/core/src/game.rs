use std::fmt::Debug;
use std::hash::Hash;

/// A game where a single turn may consist of several moves.
///
/// This trait is the seam between the rules of a concrete game and the
/// generic turn/game tree construction. A move that "grants an extra move"
/// keeps the turn with the same player; any other move ends the turn.
pub trait ChainGame: Clone + Send + Sync {
    /// The game state (e.g., a dots-and-boxes board)
    type State: Clone + Send;

    /// A single move (e.g., the line cell being drawn)
    type Action: Clone + Copy + Send + Eq + Hash + Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns all legal actions from the given state, in a deterministic order
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state (immutable operation)
    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Returns true if playing `action` keeps the turn with the same player.
    ///
    /// Must not observe or leave behind any change to `state`.
    fn grants_extra_move(&self, state: &Self::State, action: Self::Action) -> bool;

    /// Upper bound on the number of moves a single turn can contain from `state`.
    ///
    /// Used as a guard against runaway continuation recursion.
    fn max_turn_length(&self, state: &Self::State) -> usize;
}
