//! Error types.
//!
//! `ActionError` is what a game returns from `apply_action`. `ArenaError`
//! covers everything a match can fail with, including contract violations
//! by agents and games. Nothing here is recovered from inside the crate.

use std::path::PathBuf;

/// An action rejected by `Game::apply_action`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The token does not parse under the game's action grammar.
    #[error("malformed action {action:?}: expected {expected}")]
    Malformed {
        action: String,
        expected: &'static str,
    },

    /// Well-formed, but not in the legal-action set of the state.
    #[error("illegal action {action:?}")]
    Illegal { action: String },

    /// The state is terminal; no action is legal.
    #[error("action {action:?} played after the game ended")]
    GameOver { action: String },
}

impl ActionError {
    /// The offending action token.
    #[must_use]
    pub fn action(&self) -> &str {
        match self {
            ActionError::Malformed { action, .. }
            | ActionError::Illegal { action }
            | ActionError::GameOver { action } => action,
        }
    }

    /// True for grammar failures.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ActionError::Malformed { .. })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Errors that abort a match.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error(transparent)]
    InvalidAction(#[from] ActionError),

    #[error("{agent} selected illegal action {action:?} (legal: {legal:?})")]
    IllegalAgentAction {
        agent: String,
        action: String,
        legal: Vec<String>,
    },

    #[error("{agent} was asked to move but no legal action exists")]
    NoLegalActions { agent: String },

    #[error("{game} reached a terminal state with no outcome")]
    MissingOutcome { game: String },

    #[error("{game} derives turns from state but named no player to move")]
    MissingTurn { game: String },

    #[error("match exceeded {limit} plies")]
    PlyLimit { limit: u32 },

    #[error("state does not belong to game {game}")]
    ForeignState { game: String },

    #[error("unknown game: {name}")]
    UnknownGame { name: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
