//! Hex implementation.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::games::{BoxedGame, GameRegistry};
use crate::rules::connectivity::connects;
use crate::rules::grid::{Cell, Grid, HEX_DIRECTIONS};
use crate::rules::{Game, Outcome, TurnPolicy};

/// Hex position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexState {
    pub board: Grid<Cell>,
}

impl HexState {
    /// Player to move: player 0 when both have placed equally many markers.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        let placed = self.board.stones(PlayerId::FIRST) + self.board.stones(PlayerId::SECOND);
        PlayerId::from_parity(placed)
    }
}

/// Hex rules.
#[derive(Clone, Debug)]
pub struct Hex {
    size: usize,
}

impl Hex {
    /// Create a Hex game on a `size` x `size` board.
    ///
    /// Panics if `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Hex board size must be positive");
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if `player` has a chain between their two edges.
    #[must_use]
    pub fn is_connected(&self, state: &HexState, player: PlayerId) -> bool {
        let last = self.size - 1;
        if player == PlayerId::FIRST {
            connects(&state.board, player, &HEX_DIRECTIONS, |_, c| c == 0, |_, c| c == last)
        } else {
            connects(&state.board, player, &HEX_DIRECTIONS, |r, _| r == 0, |r, _| r == last)
        }
    }

    fn parse(&self, action: &Action) -> Result<(usize, usize), ActionError> {
        let [r, c] = action.fields_exact::<2>(',', "row,col")?;
        Ok((r, c))
    }
}

impl Default for Hex {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Game for Hex {
    type State = HexState;

    fn name(&self) -> &str {
        "hex"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &HexState) -> Option<PlayerId> {
        Some(state.to_move())
    }

    fn reset(&self) -> HexState {
        HexState {
            board: Grid::square(self.size, Cell::Empty),
        }
    }

    fn valid_actions(&self, state: &HexState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        state.board.empty_cells().map(|(r, c)| Action::cell(r, c)).collect()
    }

    fn apply_action(&self, state: &HexState, action: &Action) -> Result<HexState, ActionError> {
        let (r, c) = self.parse(action)?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if !state.board.in_bounds(r, c) || !state.board.get(r, c).is_empty() {
            return Err(action.illegal());
        }

        let mut board = state.board.clone();
        board.set(r, c, Cell::of(state.to_move()));
        Ok(HexState { board })
    }

    fn is_terminal(&self, state: &HexState) -> bool {
        self.winner(state).is_decided() || state.board.is_full()
    }

    fn winner(&self, state: &HexState) -> Outcome {
        // Both checks always run so an impossible double connection still
        // resolves deterministically to the last mover.
        let first = self.is_connected(state, PlayerId::FIRST);
        let second = self.is_connected(state, PlayerId::SECOND);
        match (first, second) {
            (true, true) => Outcome::Winner(state.to_move().opponent()),
            (true, false) => Outcome::Winner(PlayerId::FIRST),
            (false, true) => Outcome::Winner(PlayerId::SECOND),
            (false, false) if state.board.is_full() => Outcome::Draw,
            (false, false) => Outcome::Undecided,
        }
    }

    fn render(&self, state: &HexState) -> String {
        (0..self.size)
            .map(|r| {
                let row: Vec<String> = state.board.row(r).iter().map(|c| c.symbol().to_string()).collect();
                format!("{}{}", " ".repeat(r), row.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Register Hex under `"hex"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("hex", |settings: &GameSettings| BoxedGame::new(Hex::new(settings.hex.size)));
}
