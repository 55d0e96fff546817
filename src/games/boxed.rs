//! Type-erased games for the registry.
//!
//! `BoxedGame` wraps any `Game` behind `Game<State = BoxedState>`, so games
//! with unrelated state types can share one registry, one agent type and
//! one match engine.
//!
//! ## State ownership
//!
//! A `BoxedState` remembers its concrete type. Handing a state produced by
//! one game to another is a programming error. `Game::check_state` reports
//! it as `ArenaError::ForeignState` and `Match::from_state` calls it before
//! play starts. The other `Game` methods panic on a foreign state.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::core::{Action, ActionError, ArenaError, PlayerId};
use crate::rules::{Game, Outcome, TurnPolicy};

/// Object-safe view of a game state.
trait AnyState: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn eq_state(&self, other: &dyn AnyState) -> bool;
}

impl<T> AnyState for T
where
    T: Clone + Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_state(&self, other: &dyn AnyState) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }
}

/// An immutable state of some game, shared by reference count.
#[derive(Clone, Debug)]
pub struct BoxedState(Arc<dyn AnyState>);

impl BoxedState {
    fn new<T>(state: T) -> Self
    where
        T: Clone + Debug + PartialEq + Send + Sync + 'static,
    {
        Self(Arc::new(state))
    }

    /// The concrete state, if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for BoxedState {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_state(&*other.0)
    }
}

/// Object-safe mirror of `Game` over boxed states.
trait DynGame: Send + Sync {
    fn name(&self) -> &str;
    fn turn_policy(&self) -> TurnPolicy;
    fn owns(&self, state: &BoxedState) -> bool;
    fn current_player(&self, state: &BoxedState) -> Option<PlayerId>;
    fn reset(&self) -> BoxedState;
    fn valid_actions(&self, state: &BoxedState) -> Vec<Action>;
    fn apply_action(&self, state: &BoxedState, action: &Action) -> Result<BoxedState, ActionError>;
    fn is_terminal(&self, state: &BoxedState) -> bool;
    fn winner(&self, state: &BoxedState) -> Outcome;
    fn render(&self, state: &BoxedState) -> String;
}

struct Erased<G>(G);

impl<G> Erased<G>
where
    G: Game,
    G::State: 'static,
{
    fn unbox<'s>(&self, state: &'s BoxedState) -> &'s G::State {
        match state.downcast_ref::<G::State>() {
            Some(inner) => inner,
            None => panic!("state does not belong to game {}", self.0.name()),
        }
    }
}

impl<G> DynGame for Erased<G>
where
    G: Game + Send + Sync + 'static,
    G::State: Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.0.name()
    }

    fn turn_policy(&self) -> TurnPolicy {
        self.0.turn_policy()
    }

    fn owns(&self, state: &BoxedState) -> bool {
        state.downcast_ref::<G::State>().is_some()
    }

    fn current_player(&self, state: &BoxedState) -> Option<PlayerId> {
        self.0.current_player(self.unbox(state))
    }

    fn reset(&self) -> BoxedState {
        BoxedState::new(self.0.reset())
    }

    fn valid_actions(&self, state: &BoxedState) -> Vec<Action> {
        self.0.valid_actions(self.unbox(state))
    }

    fn apply_action(&self, state: &BoxedState, action: &Action) -> Result<BoxedState, ActionError> {
        self.0.apply_action(self.unbox(state), action).map(BoxedState::new)
    }

    fn is_terminal(&self, state: &BoxedState) -> bool {
        self.0.is_terminal(self.unbox(state))
    }

    fn winner(&self, state: &BoxedState) -> Outcome {
        self.0.winner(self.unbox(state))
    }

    fn render(&self, state: &BoxedState) -> String {
        self.0.render(self.unbox(state))
    }
}

/// A game with its state type erased.
///
/// Cloning is cheap; clones share the same rules object.
///
/// # Panics
///
/// Every `Game` method except `check_state` panics when given a state
/// produced by a different game.
///
/// ## Example
///
/// ```
/// use duel_arena::games::{BoxedGame, Nim};
/// use duel_arena::rules::Game;
///
/// let game = BoxedGame::new(Nim::new(5, 2));
/// let state = game.reset();
///
/// assert_eq!(game.name(), "nim");
/// assert_eq!(game.valid_actions(&state).len(), 2);
/// ```
#[derive(Clone)]
pub struct BoxedGame(Arc<dyn DynGame>);

impl BoxedGame {
    /// Erase `game`.
    pub fn new<G>(game: G) -> Self
    where
        G: Game + Send + Sync + 'static,
        G::State: Send + Sync + 'static,
    {
        Self(Arc::new(Erased(game)))
    }

}

impl Debug for BoxedGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BoxedGame").field(&self.0.name()).finish()
    }
}

impl Game for BoxedGame {
    type State = BoxedState;

    fn name(&self) -> &str {
        self.0.name()
    }

    fn turn_policy(&self) -> TurnPolicy {
        self.0.turn_policy()
    }

    fn current_player(&self, state: &BoxedState) -> Option<PlayerId> {
        self.0.current_player(state)
    }

    fn check_state(&self, state: &BoxedState) -> Result<(), ArenaError> {
        if self.0.owns(state) {
            Ok(())
        } else {
            Err(ArenaError::ForeignState {
                game: self.0.name().to_string(),
            })
        }
    }

    fn reset(&self) -> BoxedState {
        self.0.reset()
    }

    fn valid_actions(&self, state: &BoxedState) -> Vec<Action> {
        self.0.valid_actions(state)
    }

    fn apply_action(&self, state: &BoxedState, action: &Action) -> Result<BoxedState, ActionError> {
        self.0.apply_action(state, action)
    }

    fn is_terminal(&self, state: &BoxedState) -> bool {
        self.0.is_terminal(state)
    }

    fn winner(&self, state: &BoxedState) -> Outcome {
        self.0.winner(state)
    }

    fn render(&self, state: &BoxedState) -> String {
        self.0.render(state)
    }
}
