//! Configuration types.
//!
//! - `MatchConfig`: how a single match is run (seed, ply limit, validation)
//! - `GameSettings`: construction parameters for every catalog game
//! - `ArenaConfig`: both of the above, loadable from TOML
//!
//! Every field has a default so a partial TOML file is valid:
//!
//! ```
//! use duel_arena::core::ArenaConfig;
//!
//! let config = ArenaConfig::from_toml_str("[games.hex]\nsize = 5\n").unwrap();
//! assert_eq!(config.games.hex.size, 5);
//! assert_eq!(config.games.othello.size, 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Parameters for running one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for the random agents created by `MatchEngine::play_random`.
    pub seed: u64,

    /// Maximum plies before the match is aborted (0 = unlimited).
    pub max_plies: u32,

    /// Check every agent action against the legal set before applying it.
    pub validate_actions: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 10_000,
            validate_actions: true,
        }
    }
}

impl MatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the ply limit.
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Enable or disable engine-side validation of agent actions.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_actions = validate;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexSettings {
    pub size: usize,
}

impl Default for HexSettings {
    fn default() -> Self {
        Self { size: 3 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OthelloSettings {
    pub size: usize,
}

impl Default for OthelloSettings {
    fn default() -> Self {
        Self { size: 8 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectFourSettings {
    pub rows: usize,
    pub cols: usize,
    pub connect: usize,
}

impl Default for ConnectFourSettings {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            connect: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsAndBoxesSettings {
    pub size: usize,
}

impl Default for DotsAndBoxesSettings {
    fn default() -> Self {
        Self { size: 2 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoridorSettings {
    pub size: usize,
    pub walls_per_player: u32,
}

impl Default for QuoridorSettings {
    fn default() -> Self {
        Self {
            size: 5,
            walls_per_player: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NimSettings {
    pub total: u32,
    pub max_take: u32,
}

impl Default for NimSettings {
    fn default() -> Self {
        Self { total: 12, max_take: 3 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiHeapNimSettings {
    pub heaps: Vec<u32>,
    /// `None` lets a player take a whole heap.
    pub max_take: Option<u32>,
}

impl Default for MultiHeapNimSettings {
    fn default() -> Self {
        Self {
            heaps: vec![3, 4, 5],
            max_take: Some(3),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLadderSettings {
    pub start: String,
    pub goal: String,
    /// `None` accepts any lowercase one-letter change.
    pub dictionary: Option<Vec<String>>,
}

impl Default for WordLadderSettings {
    fn default() -> Self {
        let words = ["cold", "cord", "card", "ward", "warm", "word", "worm", "form", "corm", "calm"];
        Self {
            start: "cold".into(),
            goal: "warm".into(),
            dictionary: Some(words.iter().map(|w| w.to_string()).collect()),
        }
    }
}

/// Construction parameters for the game catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub hex: HexSettings,
    pub othello: OthelloSettings,
    pub connect_four: ConnectFourSettings,
    pub dots_and_boxes: DotsAndBoxesSettings,
    pub quoridor: QuoridorSettings,
    pub nim: NimSettings,
    pub multiheap_nim: MultiHeapNimSettings,
    pub word_ladder: WordLadderSettings,
}

impl GameSettings {
    /// Validate settings values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hex.size == 0 {
            return Err(ConfigError::Validation("hex.size must be > 0".into()));
        }
        if self.othello.size < 4 || self.othello.size % 2 != 0 {
            return Err(ConfigError::Validation(
                "othello.size must be even and >= 4".into(),
            ));
        }
        let c4 = &self.connect_four;
        if c4.rows == 0 || c4.cols == 0 || c4.connect < 2 {
            return Err(ConfigError::Validation(
                "connect_four needs rows, cols > 0 and connect >= 2".into(),
            ));
        }
        if self.dots_and_boxes.size == 0 {
            return Err(ConfigError::Validation("dots_and_boxes.size must be > 0".into()));
        }
        if self.quoridor.size < 2 {
            return Err(ConfigError::Validation("quoridor.size must be >= 2".into()));
        }
        if self.nim.total == 0 || self.nim.max_take == 0 {
            return Err(ConfigError::Validation(
                "nim.total and nim.max_take must be > 0".into(),
            ));
        }
        if self.multiheap_nim.heaps.is_empty() || self.multiheap_nim.max_take == Some(0) {
            return Err(ConfigError::Validation(
                "multiheap_nim needs at least one heap and max_take > 0".into(),
            ));
        }
        let ladder = &self.word_ladder;
        if ladder.start.is_empty() || ladder.start.chars().count() != ladder.goal.chars().count() {
            return Err(ConfigError::Validation(
                "word_ladder.start and goal must be non-empty and the same length".into(),
            ));
        }
        let letters = |word: &str| word.chars().all(|ch| ch.is_ascii_alphabetic());
        if !letters(&ladder.start) || !letters(&ladder.goal) {
            return Err(ConfigError::Validation(
                "word_ladder.start and goal must be ASCII letters".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    pub games: GameSettings,
}

impl ArenaConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.games.validate()
    }
}
