//! Connect Four on a configurable board.
//!
//! The action is a column index; the marker drops to the lowest empty row.
//! A column is playable while its top cell is empty. The first player with
//! `connect` markers in a horizontal, vertical or diagonal line wins.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::rules::grid::{Cell, Direction, Grid};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

/// Line directions scanned from each marker.
const LINE_DIRECTIONS: [Direction; 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Connect Four position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourState {
    pub board: Grid<Cell>,
}

impl ConnectFourState {
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        let placed = self.board.rows() * self.board.cols() - self.board.count(Cell::Empty);
        PlayerId::from_parity(placed)
    }
}

/// Connect Four rules.
#[derive(Clone, Debug)]
pub struct ConnectFour {
    rows: usize,
    cols: usize,
    connect: usize,
}

impl ConnectFour {
    /// Panics if the board is empty or `connect` is below 2.
    #[must_use]
    pub fn new(rows: usize, cols: usize, connect: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Connect Four board must be non-empty");
        assert!(connect >= 2, "Connect Four needs connect >= 2");
        Self { rows, cols, connect }
    }

    fn column_open(state: &ConnectFourState, col: usize) -> bool {
        state.board.get(0, col).is_empty()
    }

    fn top_full(state: &ConnectFourState) -> bool {
        state.board.row(0).iter().all(|cell| !cell.is_empty())
    }

    fn line_from(&self, board: &Grid<Cell>, r: usize, c: usize, (dr, dc): Direction) -> bool {
        let piece = board.get(r, c);
        let (mut rr, mut cc) = (r, c);
        for _ in 1..self.connect {
            match board.offset(rr, cc, dr, dc) {
                Some((nr, nc)) if board.get(nr, nc) == piece => (rr, cc) = (nr, nc),
                _ => return false,
            }
        }
        true
    }

    fn line_owner(&self, state: &ConnectFourState) -> Option<PlayerId> {
        state.board.cells().find_map(|((r, c), cell)| {
            let owner = cell.owner()?;
            LINE_DIRECTIONS
                .iter()
                .any(|&dir| self.line_from(&state.board, r, c, dir))
                .then_some(owner)
        })
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new(6, 7, 4)
    }
}

impl Game for ConnectFour {
    type State = ConnectFourState;

    fn name(&self) -> &str {
        "connect_four"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &ConnectFourState) -> Option<PlayerId> {
        Some(state.to_move())
    }

    fn reset(&self) -> ConnectFourState {
        ConnectFourState {
            board: Grid::new(self.rows, self.cols, Cell::Empty),
        }
    }

    fn valid_actions(&self, state: &ConnectFourState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        (0..self.cols)
            .filter(|&col| Self::column_open(state, col))
            .map(|col| Action::new(col.to_string()))
            .collect()
    }

    fn apply_action(&self, state: &ConnectFourState, action: &Action) -> Result<ConnectFourState, ActionError> {
        let [col] = action.fields_exact::<1>(',', "column index")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if col >= self.cols || !Self::column_open(state, col) {
            return Err(action.illegal());
        }

        let mut board = state.board.clone();
        if let Some(row) = (0..self.rows).rev().find(|&r| board.get(r, col).is_empty()) {
            board.set(row, col, Cell::of(state.to_move()));
        }
        Ok(ConnectFourState { board })
    }

    fn is_terminal(&self, state: &ConnectFourState) -> bool {
        self.line_owner(state).is_some() || Self::top_full(state)
    }

    fn winner(&self, state: &ConnectFourState) -> Outcome {
        match self.line_owner(state) {
            Some(player) => Outcome::Winner(player),
            None if Self::top_full(state) => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }

    fn render(&self, state: &ConnectFourState) -> String {
        state.board.render_with("|", |cell| cell.symbol().to_string())
    }
}

/// Register Connect Four under `"connect_four"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("connect_four", |settings: &GameSettings| {
        let c4 = &settings.connect_four;
        BoxedGame::new(ConnectFour::new(c4.rows, c4.cols, c4.connect))
    });
}
