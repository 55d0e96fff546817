//! Core engine types: players, actions, errors, RNG, configuration.
//!
//! This module contains the building blocks shared by every game, agent and
//! the match engine. None of it knows about a particular game.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{InvalidPlayerId, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{
    ArenaConfig, ConnectFourSettings, DotsAndBoxesSettings, GameSettings, HexSettings, MatchConfig,
    MultiHeapNimSettings, NimSettings, OthelloSettings, QuoridorSettings, WordLadderSettings,
};
pub use action::{actions, Action};
pub use error::{ActionError, ArenaError, ConfigError};
