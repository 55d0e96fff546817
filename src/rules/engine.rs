//! Game trait for rule implementations.
//!
//! Games implement `Game` to define their rules:
//! - The initial position
//! - What actions are legal
//! - How actions produce new states
//! - Terminal and win conditions

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::error::{ActionError, ArenaError};
use crate::core::player::PlayerId;

/// Result of a game position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet.
    Undecided,
    /// Single winner.
    Winner(PlayerId),
    /// Terminal with no winner.
    Draw,
}

impl Outcome {
    /// Majority rule: the higher score wins, equal scores draw.
    #[must_use]
    pub fn by_score(first: u32, second: u32) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => Outcome::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Check if the outcome is a win or a draw.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => f.write_str("undecided"),
            Outcome::Winner(p) => write!(f, "{p} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// How the player to move is determined.
///
/// The match engine consults this instead of assuming, so a game that
/// tracks its own turn and the engine never both flip it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// The state does not name a mover; the engine alternates seats,
    /// starting with player 0. Neither legality nor the outcome may depend
    /// on which seat moved.
    ExternalAlternation,
    /// `Game::current_player` names the mover, either from a turn stored in
    /// the state or from its structure (e.g. parity of placed markers).
    DerivedFromState,
}

/// Game trait.
///
/// ## Implementation Notes
///
/// - `apply_action` takes the state by reference and returns a new one;
///   states are never mutated once handed out.
/// - `apply_action` must reject exactly the actions missing from
///   `valid_actions`, with `ActionError::GameOver` on terminal states.
/// - `valid_actions` is empty only on terminal states.
/// - `winner` returns `Outcome::Undecided` on non-terminal states and never
///   on terminal ones.
/// - The mover seen by `valid_actions` and `apply_action` must come from the
///   same derivation, the one named by `turn_policy`.
pub trait Game {
    /// One immutable position.
    type State: Clone + Debug + PartialEq;

    /// Registry name of the game.
    fn name(&self) -> &str;

    /// How the player to move is determined.
    fn turn_policy(&self) -> TurnPolicy;

    /// The player to move, for `TurnPolicy::DerivedFromState` games.
    fn current_player(&self, _state: &Self::State) -> Option<PlayerId> {
        None
    }

    /// The canonical initial position.
    fn reset(&self) -> Self::State;

    /// Every action legal for the player to move.
    fn valid_actions(&self, state: &Self::State) -> Vec<Action>;

    /// Produce the state after `action`.
    fn apply_action(&self, state: &Self::State, action: &Action) -> Result<Self::State, ActionError>;

    /// Check if no further actions are meaningful.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Outcome of the position.
    fn winner(&self, state: &Self::State) -> Outcome;

    /// Display form for debugging. Carries no game logic.
    fn render(&self, state: &Self::State) -> String;

    /// Check that `state` can be handed to this game's methods.
    ///
    /// Concrete state types always can. Type-erased games override this.
    fn check_state(&self, _state: &Self::State) -> Result<(), ArenaError> {
        Ok(())
    }

    // === Convenience Methods ===

    /// Check membership in the legal-action set.
    fn is_legal(&self, state: &Self::State, action: &Action) -> bool {
        self.valid_actions(state).contains(action)
    }

    /// Reject `action` unless it is in the legal-action set.
    ///
    /// For games that check legality by membership after parsing.
    fn ensure_legal(&self, state: &Self::State, action: &Action) -> Result<(), ActionError> {
        if self.is_terminal(state) {
            Err(action.game_over())
        } else if self.is_legal(state, action) {
            Ok(())
        } else {
            Err(action.illegal())
        }
    }

    /// Apply a sequence of actions from `state`.
    fn apply_all<'a, I>(&self, state: &Self::State, actions: I) -> Result<Self::State, ActionError>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .try_fold(state.clone(), |current, action| self.apply_action(&current, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        assert!(!Outcome::Draw.is_winner(PlayerId::new(0)));
        assert!(Outcome::Draw.is_decided());
        assert!(!Outcome::Undecided.is_decided());
    }

    #[test]
    fn test_outcome_by_score() {
        assert_eq!(Outcome::by_score(5, 3), Outcome::Winner(PlayerId::FIRST));
        assert_eq!(Outcome::by_score(3, 5), Outcome::Winner(PlayerId::SECOND));
        assert_eq!(Outcome::by_score(4, 4), Outcome::Draw);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(PlayerId::new(0)).to_string(), "Player 0 wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
