//! Uniform random baseline agent.

use crate::core::{Action, ArenaError, GameRng};
use crate::rules::Game;

use super::Agent;

/// Baseline agent: uniform over the legal-action set.
///
/// ```
/// use duel_arena::agents::{Agent, RandomAgent};
/// use duel_arena::games::Nim;
/// use duel_arena::rules::Game;
///
/// let game = Nim::new(5, 2);
/// let state = game.reset();
/// let action = RandomAgent::new(7).select_action(&game, &state).unwrap();
///
/// assert!(game.is_legal(&state, &action));
/// ```
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create an agent drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            name: format!("random-{}", rng.seed()),
            rng,
        }
    }

    /// Replace the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, game: &G, state: &G::State) -> Result<Action, ArenaError> {
        let legal = game.valid_actions(state);
        let action = self.rng.choose(&legal).cloned().ok_or_else(|| ArenaError::NoLegalActions {
            agent: self.name.clone(),
        })?;
        tracing::trace!(agent = %self.name, choices = legal.len(), action = %action, "sampled action");
        Ok(action)
    }
}
