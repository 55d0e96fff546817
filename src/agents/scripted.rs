//! Agent replaying a fixed move list.
//!
//! Used by tests and to replay recorded games.

use std::collections::VecDeque;

use crate::core::{Action, ArenaError};
use crate::rules::Game;

use super::Agent;

/// Plays a fixed list of actions in order.
///
/// Nothing is checked against the legal set here; the match engine does
/// that. Running out of actions is reported as `NoLegalActions`.
#[derive(Clone, Debug)]
pub struct ScriptedAgent {
    name: String,
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    pub fn new<I, A>(name: impl Into<String>, script: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Action>,
    {
        Self {
            name: name.into(),
            script: script.into_iter().map(Into::into).collect(),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<G: Game> Agent<G> for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, _game: &G, _state: &G::State) -> Result<Action, ArenaError> {
        self.script.pop_front().ok_or_else(|| ArenaError::NoLegalActions {
            agent: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Nim;

    #[test]
    fn test_plays_in_order_then_runs_out() {
        let game = Nim::new(5, 2);
        let state = game.reset();
        let mut agent = ScriptedAgent::new("script", ["2", "1"]);

        assert_eq!(agent.select_action(&game, &state).unwrap(), Action::new("2"));
        assert_eq!(agent.remaining(), 1);
        assert_eq!(agent.select_action(&game, &state).unwrap(), Action::new("1"));
        assert!(matches!(
            agent.select_action(&game, &state),
            Err(ArenaError::NoLegalActions { .. })
        ));
    }
}
