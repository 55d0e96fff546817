//! # duel-arena
//!
//! Rule engines for deterministic, perfect-information, two-player board
//! games, plus a match runner that drives them with pluggable agents.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `Game::apply_action` takes a state by reference
//!    and returns a new one. States are never mutated once handed out.
//!
//! 2. **Canonical actions**: every action is a string token with one
//!    canonical spelling, legal only if it appears in `valid_actions`.
//!
//! 3. **Declared turns**: each game states whether the engine alternates
//!    seats or the state names the mover (`TurnPolicy`).
//!
//! ## Modules
//!
//! - `core`: players, actions, errors, RNG, configuration
//! - `rules`: the `Game` trait and shared rule helpers (grids,
//!   connectivity search, bounded capture, sowing)
//! - `games`: the game catalog, type erasure and the name registry
//! - `agents`: the `Agent` trait, a uniform random baseline and a scripted
//!   agent
//! - `arena`: match sessions and the match engine
//!
//! ## Example
//!
//! ```
//! use duel_arena::{GameRegistry, GameSettings, MatchConfig, MatchEngine};
//!
//! let registry = GameRegistry::with_builtin_games();
//! let game = registry.create("connect_four", &GameSettings::default()).unwrap();
//!
//! let report = MatchEngine::new(game, MatchConfig::default().with_seed(1))
//!     .play_random()
//!     .unwrap();
//! assert!(report.outcome.is_decided());
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod agents;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ArenaConfig, ArenaError, ConfigError, GameRng, GameSettings, MatchConfig,
    PlayerId, PlayerMap,
};

pub use crate::rules::{Game, Outcome, TurnPolicy};

pub use crate::games::{BoxedGame, BoxedState, GameRegistry};

pub use crate::agents::{Agent, RandomAgent, ScriptedAgent};

pub use crate::arena::{Match, MatchEngine, MatchPhase, MatchReport};
