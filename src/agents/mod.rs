//! Decision-makers that drive a match.
//!
//! An [`Agent`] is handed the game and the current state and returns one
//! action. It must pick from `valid_actions`; the match engine checks this
//! when `MatchConfig::validate_actions` is set.

mod random;
mod scripted;

pub use random::RandomAgent;
pub use scripted::ScriptedAgent;

use crate::core::{Action, ArenaError};
use crate::rules::Game;

/// A player seat in a match.
pub trait Agent<G: Game> {
    /// Display name used in errors and logs.
    fn name(&self) -> &str;

    /// Choose an action for the player to move.
    ///
    /// Must not be called on a terminal state.
    fn select_action(&mut self, game: &G, state: &G::State) -> Result<Action, ArenaError>;
}

impl<G: Game, A: Agent<G> + ?Sized> Agent<G> for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_action(&mut self, game: &G, state: &G::State) -> Result<Action, ArenaError> {
        (**self).select_action(game, state)
    }
}
