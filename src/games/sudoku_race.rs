//! Race to fill a 4x4 Sudoku.
//!
//! Players alternately write a digit 1-4 into an empty cell with action
//! `"r,c,v"`; the digit must not repeat in the row, the column or the 2x2
//! box. The game ends when the grid is full or no placement remains, and
//! the player who made the last placement wins. The mover is the parity of
//! the placements made so far.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::rules::grid::Grid;
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

const SIZE: usize = 4;
const BOX: usize = 2;

/// The fixed starting puzzle. 0 marks an empty cell.
pub const PUZZLE: [[u8; SIZE]; SIZE] = [[1, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0], [3, 0, 0, 2]];

/// Sudoku race position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SudokuState {
    pub grid: Grid<u8>,
    pub plies: u32,
}

impl SudokuState {
    /// Check if `value` may be written at (row, col).
    #[must_use]
    pub fn allows(&self, row: usize, col: usize, value: u8) -> bool {
        let g = &self.grid;
        let (br, bc) = (row / BOX * BOX, col / BOX * BOX);
        g.get(row, col) == 0
            && (0..SIZE).all(|i| g.get(row, i) != value && g.get(i, col) != value)
            && (br..br + BOX).all(|r| (bc..bc + BOX).all(|c| g.get(r, c) != value))
    }

    fn placements(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.grid
            .cells()
            .filter(|&(_, v)| v == 0)
            .flat_map(|((r, c), _)| (1..=SIZE as u8).map(move |v| (r, c, v)))
            .filter(|&(r, c, v)| self.allows(r, c, v))
    }
}

/// Sudoku race rules.
#[derive(Clone, Debug, Default)]
pub struct SudokuRace;

impl SudokuRace {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Game for SudokuRace {
    type State = SudokuState;

    fn name(&self) -> &str {
        "sudoku_race"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &SudokuState) -> Option<PlayerId> {
        Some(PlayerId::from_parity(state.plies as usize))
    }

    fn reset(&self) -> SudokuState {
        SudokuState {
            grid: Grid::from_rows(PUZZLE.iter().map(|row| row.to_vec()).collect()),
            plies: 0,
        }
    }

    fn valid_actions(&self, state: &SudokuState) -> Vec<Action> {
        state
            .placements()
            .map(|(r, c, v)| Action::new(format!("{r},{c},{v}")))
            .collect()
    }

    fn apply_action(&self, state: &SudokuState, action: &Action) -> Result<SudokuState, ActionError> {
        let [r, c, v] = action.fields_exact::<3>(',', "row,col,value")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        let value = match u8::try_from(v) {
            Ok(value) if (1..=SIZE as u8).contains(&value) => value,
            _ => return Err(action.illegal()),
        };
        if r >= SIZE || c >= SIZE || !state.allows(r, c, value) {
            return Err(action.illegal());
        }

        let mut grid = state.grid.clone();
        grid.set(r, c, value);
        Ok(SudokuState {
            grid,
            plies: state.plies + 1,
        })
    }

    fn is_terminal(&self, state: &SudokuState) -> bool {
        state.placements().next().is_none()
    }

    fn winner(&self, state: &SudokuState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Undecided;
        }
        match state.plies {
            0 => Outcome::Draw,
            plies => Outcome::Winner(PlayerId::from_parity(plies as usize - 1)),
        }
    }

    fn render(&self, state: &SudokuState) -> String {
        state
            .grid
            .render_with(" ", |v| if v == 0 { ".".to_string() } else { v.to_string() })
    }
}

/// Register the Sudoku race under `"sudoku_race"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("sudoku_race", |_| BoxedGame::new(SudokuRace::new()));
}
