//! Nim over several heaps.
//!
//! An action `"heap,take"` removes `take` objects from one heap, at most
//! `max_take` when a cap is set. Whoever empties the last heap wins. Like
//! single-heap Nim the state counts plies, and the mover is their parity.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

/// Heap sizes; most configurations have a handful of heaps.
pub type Heaps = SmallVec<[u32; 4]>;

/// Multi-heap Nim position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiHeapNimState {
    pub heaps: Heaps,
    pub plies: u32,
}

/// Multi-heap Nim rules.
#[derive(Clone, Debug)]
pub struct MultiHeapNim {
    heaps: Heaps,
    max_take: Option<u32>,
}

impl MultiHeapNim {
    /// Panics if `max_take` is `Some(0)`.
    #[must_use]
    pub fn new(heaps: impl IntoIterator<Item = u32>, max_take: Option<u32>) -> Self {
        assert!(max_take != Some(0), "MultiHeapNim max_take must be positive");
        Self {
            heaps: heaps.into_iter().collect(),
            max_take,
        }
    }

    fn limit(&self, heap: u32) -> u32 {
        self.max_take.map_or(heap, |cap| cap.min(heap))
    }
}

impl Default for MultiHeapNim {
    fn default() -> Self {
        Self::new([3, 4, 5], Some(3))
    }
}

impl Game for MultiHeapNim {
    type State = MultiHeapNimState;

    fn name(&self) -> &str {
        "multiheap_nim"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &MultiHeapNimState) -> Option<PlayerId> {
        Some(PlayerId::from_parity(state.plies as usize))
    }

    fn reset(&self) -> MultiHeapNimState {
        MultiHeapNimState {
            heaps: self.heaps.clone(),
            plies: 0,
        }
    }

    fn valid_actions(&self, state: &MultiHeapNimState) -> Vec<Action> {
        state
            .heaps
            .iter()
            .enumerate()
            .flat_map(|(i, &heap)| (1..=self.limit(heap)).map(move |take| Action::new(format!("{i},{take}"))))
            .collect()
    }

    fn apply_action(&self, state: &MultiHeapNimState, action: &Action) -> Result<MultiHeapNimState, ActionError> {
        let [heap, take] = action.fields_exact::<2>(',', "heap,take")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        let Some(&size) = state.heaps.get(heap) else {
            return Err(action.illegal());
        };
        if take == 0 || take > self.limit(size) as usize {
            return Err(action.illegal());
        }

        let mut heaps = state.heaps.clone();
        heaps[heap] -= take as u32;
        Ok(MultiHeapNimState {
            heaps,
            plies: state.plies + 1,
        })
    }

    fn is_terminal(&self, state: &MultiHeapNimState) -> bool {
        state.heaps.iter().all(|&h| h == 0)
    }

    fn winner(&self, state: &MultiHeapNimState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Undecided;
        }
        match state.plies {
            0 => Outcome::Draw,
            plies => Outcome::Winner(PlayerId::from_parity(plies as usize - 1)),
        }
    }

    fn render(&self, state: &MultiHeapNimState) -> String {
        state
            .heaps
            .iter()
            .enumerate()
            .map(|(i, &heap)| format!("{i}: {}", "|".repeat(heap as usize)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Register multi-heap Nim under `"multiheap_nim"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("multiheap_nim", |settings: &GameSettings| {
        let nim = &settings.multiheap_nim;
        BoxedGame::new(MultiHeapNim::new(nim.heaps.iter().copied(), nim.max_take))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions;

    #[test]
    fn test_last_taker_wins() {
        let game = MultiHeapNim::new([1, 2], Some(2));
        let state = game
            .apply_all(&game.reset(), &actions(["0,1", "1,1", "1,1"]))
            .unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::FIRST));
    }

    #[test]
    fn test_cap_limits_actions() {
        let game = MultiHeapNim::new([1, 5], Some(2));

        assert_eq!(game.valid_actions(&game.reset()), actions(["0,1", "1,1", "1,2"]));
    }

    #[test]
    fn test_uncapped_allows_whole_heap() {
        let game = MultiHeapNim::new([3], None);
        let state = game.apply_action(&game.reset(), &Action::new("0,3")).unwrap();

        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::FIRST));
    }

    #[test]
    fn test_invalid_actions() {
        let game = MultiHeapNim::new([1, 2], Some(2));
        let state = game.reset();

        assert!(matches!(
            game.apply_action(&state, &Action::new("2,1")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(matches!(
            game.apply_action(&state, &Action::new("0,2")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(game.apply_action(&state, &Action::new("0")).unwrap_err().is_malformed());
    }

    #[test]
    fn test_winner_counts_plies_not_objects() {
        // Five objects in two plies: player 1 empties the last heap.
        let game = MultiHeapNim::new([2, 3], None);
        let state = game.apply_all(&game.reset(), &actions(["0,2", "1,3"])).unwrap();

        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
    }
}
