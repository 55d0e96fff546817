//! Whole-match runner.
//!
//! `MatchEngine` owns a game and a `MatchConfig` and drives a `Match` from
//! the initial position to the end, returning a `MatchReport`.

use serde::{Deserialize, Serialize};

use crate::agents::{Agent, RandomAgent};
use crate::core::{ArenaError, GameRng, MatchConfig, PlayerMap};
use crate::rules::{Game, Outcome};

use super::session::{Match, MatchPhase};

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Registry name of the game.
    pub game: String,
    pub outcome: Outcome,
    pub plies: u32,
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} after {} plies", self.game, self.outcome, self.plies)
    }
}

/// Plays whole matches of one game.
///
/// ## Example
///
/// ```
/// use duel_arena::arena::MatchEngine;
/// use duel_arena::core::MatchConfig;
/// use duel_arena::games::Hex;
///
/// let engine = MatchEngine::new(Hex::new(3), MatchConfig::default().with_seed(9));
/// let report = engine.play_random().unwrap();
///
/// assert_eq!(report.game, "hex");
/// assert!(report.outcome.is_decided());
/// assert_eq!(engine.play_random().unwrap(), report);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine<G: Game> {
    game: G,
    config: MatchConfig,
}

impl<G: Game> MatchEngine<G> {
    pub fn new(game: G, config: MatchConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Start a match from the initial position, to be driven step by step.
    pub fn start(&self) -> Result<Match<'_, G>, ArenaError> {
        Match::new(&self.game, self.config.clone())
    }

    /// Play a match to the end with the given seats.
    pub fn play<A: Agent<G>>(&self, agents: &mut PlayerMap<A>) -> Result<MatchReport, ArenaError> {
        let mut session = self.start()?;
        while session.phase() == MatchPhase::InProgress {
            session.step(agents)?;
        }

        let outcome = session.outcome()?;
        tracing::info!(
            game = self.game.name(),
            plies = session.plies(),
            outcome = %outcome,
            "match finished"
        );
        Ok(MatchReport {
            game: self.game.name().to_string(),
            outcome,
            plies: session.plies(),
        })
    }

    /// Play two `RandomAgent`s seeded from `MatchConfig::seed`.
    pub fn play_random(&self) -> Result<MatchReport, ArenaError> {
        let mut rng = GameRng::new(self.config.seed);
        let first = RandomAgent::from_rng(rng.fork());
        let second = RandomAgent::from_rng(rng.fork());
        self.play(&mut PlayerMap::from_array([first, second]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedAgent;
    use crate::core::PlayerId;
    use crate::games::{Mancala, Nim, TicTacToe};

    #[test]
    fn test_scripted_tictactoe() {
        let engine = MatchEngine::new(TicTacToe::new(), MatchConfig::default());
        let mut agents = PlayerMap::from_array([
            ScriptedAgent::new("x", ["0", "1", "2"]),
            ScriptedAgent::new("o", ["3", "4"]),
        ]);

        let report = engine.play(&mut agents).unwrap();

        assert_eq!(report.outcome, Outcome::Winner(PlayerId::FIRST));
        assert_eq!(report.plies, 5);
        assert_eq!(report.to_string(), "tictactoe: Player 0 wins after 5 plies");
    }

    #[test]
    fn test_random_play_is_reproducible() {
        let engine = MatchEngine::new(Mancala::new(), MatchConfig::default().with_seed(5));

        assert_eq!(engine.play_random().unwrap(), engine.play_random().unwrap());
    }

    #[test]
    fn test_boxed_agents_mix_kinds() {
        let engine = MatchEngine::new(Nim::new(3, 3), MatchConfig::default());
        let mut agents: PlayerMap<Box<dyn Agent<Nim>>> = PlayerMap::from_array([
            Box::new(ScriptedAgent::new("script", ["3"])),
            Box::new(RandomAgent::new(0)),
        ]);

        let report = engine.play(&mut agents).unwrap();

        assert_eq!(report.outcome, Outcome::Winner(PlayerId::FIRST));
        assert_eq!(report.plies, 1);
    }

    #[test]
    fn test_report_serializes() {
        let report = MatchReport {
            game: "nim".into(),
            outcome: Outcome::Draw,
            plies: 0,
        };
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(serde_json::from_str::<MatchReport>(&json).unwrap(), report);
    }
}
