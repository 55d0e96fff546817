//! Game registry for lookup by name.
//!
//! The `GameRegistry` maps a game name to a factory that builds the game
//! from `GameSettings`. It is filled explicitly: each game module exposes a
//! `register` function and `with_builtin_games` calls them in turn.

use rustc_hash::FxHashMap;

use crate::core::{ArenaError, GameSettings};

use super::BoxedGame;

/// Builds a game from its settings.
pub type GameFactory = fn(&GameSettings) -> BoxedGame;

/// Registry of game factories.
///
/// ## Example
///
/// ```
/// use duel_arena::core::GameSettings;
/// use duel_arena::games::GameRegistry;
/// use duel_arena::rules::Game;
///
/// let registry = GameRegistry::with_builtin_games();
/// let game = registry.create("othello", &GameSettings::default()).unwrap();
///
/// assert_eq!(game.name(), "othello");
/// assert!(registry.create("go", &GameSettings::default()).is_err());
/// ```
#[derive(Clone, Default)]
pub struct GameRegistry {
    factories: FxHashMap<String, GameFactory>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every game in the catalog.
    #[must_use]
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        for register in super::BUILTIN_GAMES {
            register(&mut registry);
        }
        registry
    }

    /// Register a factory under `name`.
    ///
    /// Panics if a game with the same name already exists.
    pub fn register(&mut self, name: impl Into<String>, factory: GameFactory) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Game {name:?} already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Build the game registered under `name`.
    ///
    /// `settings` are validated first, so factories never see values their
    /// constructors reject.
    pub fn create(&self, name: &str, settings: &GameSettings) -> Result<BoxedGame, ArenaError> {
        let factory = self.factories.get(name).ok_or_else(|| ArenaError::UnknownGame {
            name: name.to_string(),
        })?;
        settings.validate()?;
        Ok(factory(settings))
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check if a game name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Get the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRegistry").field("games", &self.names()).finish()
    }
}
