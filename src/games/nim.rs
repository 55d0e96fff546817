//! Single-heap Nim.
//!
//! Players alternately take between 1 and `max_take` objects from one heap;
//! whoever takes the last object wins. The state counts plies, and the
//! parity of that count names both the player to move and the player who
//! made the final move.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

/// Nim position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    pub remaining: u32,
    pub plies: u32,
}

/// Single-heap Nim rules.
#[derive(Clone, Debug)]
pub struct Nim {
    total: u32,
    max_take: u32,
}

impl Nim {
    /// Panics if `max_take` is 0.
    #[must_use]
    pub fn new(total: u32, max_take: u32) -> Self {
        assert!(max_take > 0, "Nim max_take must be positive");
        Self { total, max_take }
    }

    fn limit(&self, state: &NimState) -> u32 {
        self.max_take.min(state.remaining)
    }
}

impl Default for Nim {
    fn default() -> Self {
        Self::new(12, 3)
    }
}

impl Game for Nim {
    type State = NimState;

    fn name(&self) -> &str {
        "nim"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &NimState) -> Option<PlayerId> {
        Some(PlayerId::from_parity(state.plies as usize))
    }

    fn reset(&self) -> NimState {
        NimState {
            remaining: self.total,
            plies: 0,
        }
    }

    fn valid_actions(&self, state: &NimState) -> Vec<Action> {
        (1..=self.limit(state)).map(|take| Action::new(take.to_string())).collect()
    }

    fn apply_action(&self, state: &NimState, action: &Action) -> Result<NimState, ActionError> {
        let [take] = action.fields_exact::<1>(',', "count to take")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        let take = u32::try_from(take).map_err(|_| action.illegal())?;
        if take == 0 || take > self.limit(state) {
            return Err(action.illegal());
        }
        Ok(NimState {
            remaining: state.remaining - take,
            plies: state.plies + 1,
        })
    }

    fn is_terminal(&self, state: &NimState) -> bool {
        state.remaining == 0
    }

    fn winner(&self, state: &NimState) -> Outcome {
        match (state.remaining, state.plies) {
            (0, 0) => Outcome::Draw,
            (0, plies) => Outcome::Winner(PlayerId::from_parity(plies as usize - 1)),
            _ => Outcome::Undecided,
        }
    }

    fn render(&self, state: &NimState) -> String {
        format!("Remaining: {}\n{}", state.remaining, "|".repeat(state.remaining as usize))
    }
}

/// Register Nim under `"nim"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("nim", |settings: &GameSettings| {
        BoxedGame::new(Nim::new(settings.nim.total, settings.nim.max_take))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions;

    #[test]
    fn test_take_all_wins() {
        let game = Nim::new(3, 3);
        let state = game.apply_action(&game.reset(), &Action::new("3")).unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::FIRST));
    }

    #[test]
    fn test_winner_is_last_mover_not_count_taken() {
        // Seven objects taken in two plies: player 1 moved last.
        let game = Nim::new(7, 4);
        let state = game.apply_all(&game.reset(), &actions(["3", "4"])).unwrap();

        assert_eq!(state.plies, 2);
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
    }

    #[test]
    fn test_mover_follows_ply_parity() {
        let game = Nim::new(5, 3);
        let state = game.reset();

        assert_eq!(game.turn_policy(), TurnPolicy::DerivedFromState);
        assert_eq!(game.current_player(&state), Some(PlayerId::FIRST));
        let state = game.apply_action(&state, &Action::new("2")).unwrap();
        assert_eq!(game.current_player(&state), Some(PlayerId::SECOND));

        // Whoever the state names as mover is credited with the last take.
        let state = game.apply_action(&state, &Action::new("3")).unwrap();
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
    }

    #[test]
    fn test_actions_capped_by_remaining() {
        let game = Nim::new(5, 3);
        let state = game.apply_action(&game.reset(), &Action::new("3")).unwrap();

        assert_eq!(game.valid_actions(&state), actions(["1", "2"]));
        assert!(matches!(
            game.apply_action(&state, &Action::new("3")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(matches!(
            game.apply_action(&state, &Action::new("0")),
            Err(ActionError::Illegal { .. })
        ));
    }

    #[test]
    fn test_terminal_has_no_actions() {
        let game = Nim::new(1, 3);
        let state = game.apply_action(&game.reset(), &Action::new("1")).unwrap();

        assert!(game.valid_actions(&state).is_empty());
        assert!(matches!(
            game.apply_action(&state, &Action::new("1")),
            Err(ActionError::GameOver { .. })
        ));
    }

    #[test]
    fn test_empty_heap_at_start_is_a_draw() {
        let game = Nim::new(0, 3);

        assert!(game.is_terminal(&game.reset()));
        assert_eq!(game.winner(&game.reset()), Outcome::Draw);
    }
}
