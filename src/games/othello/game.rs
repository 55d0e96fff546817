//! Othello implementation.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::games::{BoxedGame, GameRegistry};
use crate::rules::capture::{captures_any, place_and_capture};
use crate::rules::grid::{Cell, Grid, KING_DIRECTIONS};
use crate::rules::{Game, Outcome, TurnPolicy};

/// Othello position: the board and the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OthelloState {
    pub board: Grid<Cell>,
    pub to_move: PlayerId,
}

impl OthelloState {
    /// Every capturing placement for `player`, in row-major order.
    #[must_use]
    pub fn placements(&self, player: PlayerId) -> Vec<(usize, usize)> {
        self.board
            .empty_cells()
            .filter(|&(r, c)| captures_any(&self.board, r, c, player, &KING_DIRECTIONS))
            .collect()
    }

    /// Check if `player` has a capturing placement.
    #[must_use]
    pub fn can_place(&self, player: PlayerId) -> bool {
        self.board
            .empty_cells()
            .any(|(r, c)| captures_any(&self.board, r, c, player, &KING_DIRECTIONS))
    }
}

/// Othello rules.
#[derive(Clone, Debug)]
pub struct Othello {
    size: usize,
}

impl Othello {
    /// Create an Othello game on a `size` x `size` board.
    ///
    /// Panics unless `size` is even and at least 4.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 4 && size % 2 == 0, "Othello board size must be even and >= 4");
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Game for Othello {
    type State = OthelloState;

    fn name(&self) -> &str {
        "othello"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &OthelloState) -> Option<PlayerId> {
        Some(state.to_move)
    }

    fn reset(&self) -> OthelloState {
        let x = Cell::of(PlayerId::FIRST);
        let o = Cell::of(PlayerId::SECOND);
        let mid = self.size / 2 - 1;

        let mut board = Grid::square(self.size, Cell::Empty);
        board.set(mid, mid, o);
        board.set(mid + 1, mid + 1, o);
        board.set(mid, mid + 1, x);
        board.set(mid + 1, mid, x);

        OthelloState {
            board,
            to_move: PlayerId::FIRST,
        }
    }

    fn valid_actions(&self, state: &OthelloState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        let placements = state.placements(state.to_move);
        if placements.is_empty() {
            return vec![Action::pass()];
        }
        placements.into_iter().map(|(r, c)| Action::cell(r, c)).collect()
    }

    fn apply_action(&self, state: &OthelloState, action: &Action) -> Result<OthelloState, ActionError> {
        let mover = state.to_move;

        if action.is_pass() {
            if self.is_terminal(state) {
                return Err(action.game_over());
            }
            if state.can_place(mover) {
                return Err(action.illegal());
            }
            return Ok(OthelloState {
                board: state.board.clone(),
                to_move: mover.opponent(),
            });
        }

        let [r, c] = action.fields_exact::<2>(',', "row,col or pass")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if !state.board.in_bounds(r, c) || !captures_any(&state.board, r, c, mover, &KING_DIRECTIONS) {
            return Err(action.illegal());
        }

        Ok(OthelloState {
            board: place_and_capture(&state.board, r, c, mover, &KING_DIRECTIONS),
            to_move: mover.opponent(),
        })
    }

    fn is_terminal(&self, state: &OthelloState) -> bool {
        state.board.is_full() || PlayerId::both().all(|p| !state.can_place(p))
    }

    fn winner(&self, state: &OthelloState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Undecided;
        }
        let count = |p| state.board.stones(p) as u32;
        Outcome::by_score(count(PlayerId::FIRST), count(PlayerId::SECOND))
    }

    fn render(&self, state: &OthelloState) -> String {
        state.board.render_with("|", |cell| cell.symbol().to_string())
    }
}

/// Register Othello under `"othello"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("othello", |settings: &GameSettings| {
        BoxedGame::new(Othello::new(settings.othello.size))
    });
}
