//! A match advanced one ply at a time.
//!
//! `Match` holds the current state and the seat to move. The seat comes
//! from the game's `TurnPolicy`: flipped by the match after every ply for
//! `ExternalAlternation`, read from the new state for `DerivedFromState`.

use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{ArenaError, MatchConfig, PlayerId, PlayerMap};
use crate::rules::{Game, Outcome, TurnPolicy};

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    InProgress,
    Terminal,
}

/// One match in progress.
#[derive(Debug)]
pub struct Match<'g, G: Game> {
    game: &'g G,
    config: MatchConfig,
    state: G::State,
    current: PlayerId,
    plies: u32,
}

impl<'g, G: Game> Match<'g, G> {
    /// Start from the game's initial position.
    pub fn new(game: &'g G, config: MatchConfig) -> Result<Self, ArenaError> {
        Self::from_state(game, config, game.reset())
    }

    /// Start from an arbitrary position.
    ///
    /// External-alternation games start with player 0 to move. Fails with
    /// `ForeignState` if the game cannot accept `state`.
    pub fn from_state(game: &'g G, config: MatchConfig, state: G::State) -> Result<Self, ArenaError> {
        game.check_state(&state)?;
        let current = match game.turn_policy() {
            TurnPolicy::ExternalAlternation => PlayerId::FIRST,
            TurnPolicy::DerivedFromState => derived_mover(game, &state)?,
        };
        Ok(Self {
            game,
            config,
            state,
            current,
            plies: 0,
        })
    }

    #[must_use]
    pub fn game(&self) -> &'g G {
        self.game
    }

    #[must_use]
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// The seat whose agent is asked next.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Plies played so far.
    #[must_use]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.game.is_terminal(&self.state) {
            MatchPhase::Terminal
        } else {
            MatchPhase::InProgress
        }
    }

    /// Outcome of the current position.
    ///
    /// `Undecided` while in progress. A terminal state without a decided
    /// winner is a game bug and fails with `MissingOutcome`.
    pub fn outcome(&self) -> Result<Outcome, ArenaError> {
        let outcome = self.game.winner(&self.state);
        if self.phase() == MatchPhase::Terminal && !outcome.is_decided() {
            return Err(ArenaError::MissingOutcome {
                game: self.game.name().to_string(),
            });
        }
        Ok(outcome)
    }

    /// Ask the current seat for one action and apply it.
    ///
    /// Does nothing on a terminal state. Any failure leaves the match
    /// unchanged.
    pub fn step<A: Agent<G>>(&mut self, agents: &mut PlayerMap<A>) -> Result<MatchPhase, ArenaError> {
        if self.phase() == MatchPhase::Terminal {
            return Ok(MatchPhase::Terminal);
        }

        let limit = self.config.max_plies;
        if limit != 0 && self.plies >= limit {
            tracing::warn!(game = self.game.name(), limit, "match aborted at ply limit");
            return Err(ArenaError::PlyLimit { limit });
        }

        let player = self.current;
        let agent = &mut agents[player];
        let action = agent.select_action(self.game, &self.state)?;

        if self.config.validate_actions && !self.game.is_legal(&self.state, &action) {
            let legal: Vec<String> = self
                .game
                .valid_actions(&self.state)
                .iter()
                .map(|a| a.as_str().to_string())
                .collect();
            tracing::warn!(
                game = self.game.name(),
                agent = agent.name(),
                action = %action,
                "agent selected an illegal action"
            );
            return Err(ArenaError::IllegalAgentAction {
                agent: agent.name().to_string(),
                action: action.as_str().to_string(),
                legal,
            });
        }

        let next = self.game.apply_action(&self.state, &action)?;
        let terminal = self.game.is_terminal(&next);
        let mover = match self.game.turn_policy() {
            TurnPolicy::ExternalAlternation => player.opponent(),
            TurnPolicy::DerivedFromState if terminal => self.game.current_player(&next).unwrap_or(player),
            TurnPolicy::DerivedFromState => derived_mover(self.game, &next)?,
        };

        self.plies += 1;
        tracing::debug!(
            game = self.game.name(),
            ply = self.plies,
            player = %player,
            action = %action,
            "applied action"
        );
        self.state = next;
        self.current = mover;

        Ok(if terminal {
            MatchPhase::Terminal
        } else {
            MatchPhase::InProgress
        })
    }
}

fn derived_mover<G: Game>(game: &G, state: &G::State) -> Result<PlayerId, ArenaError> {
    game.current_player(state).ok_or_else(|| ArenaError::MissingTurn {
        game: game.name().to_string(),
    })
}
