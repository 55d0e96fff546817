//! Tic-tac-toe on a 3x3 board.
//!
//! Cells are numbered 0-8 in row-major order; the action is the cell
//! number. The player to move is derived from the marker counts.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::rules::grid::{Cell, Grid};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

const SIDE: usize = 3;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Grid<Cell>,
}

impl TicTacToeState {
    fn at(&self, index: usize) -> Cell {
        self.board.get(index / SIDE, index % SIDE)
    }

    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        PlayerId::from_parity(SIDE * SIDE - self.board.count(Cell::Empty))
    }
}

/// Tic-tac-toe rules.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn line_owner(state: &TicTacToeState) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = state.at(a).owner()?;
            (state.at(b) == state.at(a) && state.at(c) == state.at(a)).then_some(owner)
        })
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;

    fn name(&self) -> &str {
        "tictactoe"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &TicTacToeState) -> Option<PlayerId> {
        Some(state.to_move())
    }

    fn reset(&self) -> TicTacToeState {
        TicTacToeState {
            board: Grid::square(SIDE, Cell::Empty),
        }
    }

    fn valid_actions(&self, state: &TicTacToeState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        state
            .board
            .empty_cells()
            .map(|(r, c)| Action::new((r * SIDE + c).to_string()))
            .collect()
    }

    fn apply_action(&self, state: &TicTacToeState, action: &Action) -> Result<TicTacToeState, ActionError> {
        let [index] = action.fields_exact::<1>(',', "cell 0-8")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if index >= SIDE * SIDE || !state.at(index).is_empty() {
            return Err(action.illegal());
        }

        let mut board = state.board.clone();
        board.set(index / SIDE, index % SIDE, Cell::of(state.to_move()));
        Ok(TicTacToeState { board })
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        Self::line_owner(state).is_some() || state.board.is_full()
    }

    fn winner(&self, state: &TicTacToeState) -> Outcome {
        match Self::line_owner(state) {
            Some(player) => Outcome::Winner(player),
            None if state.board.is_full() => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }

    fn render(&self, state: &TicTacToeState) -> String {
        state
            .board
            .render_with("|", |cell| cell.symbol().to_string())
            .replace('\n', "\n-----\n")
    }
}

/// Register tic-tac-toe under `"tictactoe"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("tictactoe", |_| BoxedGame::new(TicTacToe::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions;

    #[test]
    fn test_row_win() {
        let game = TicTacToe::new();
        let state = game
            .apply_all(&game.reset(), &actions(["0", "3", "1", "4", "2"]))
            .unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::FIRST));
        assert!(game.valid_actions(&state).is_empty());
    }

    #[test]
    fn test_diagonal_win_for_second() {
        let game = TicTacToe::new();
        let state = game
            .apply_all(&game.reset(), &actions(["0", "2", "1", "4", "8", "6"]))
            .unwrap();

        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
    }

    #[test]
    fn test_full_board_draw() {
        let game = TicTacToe::new();
        // X O X / X O O / O X X
        let state = game
            .apply_all(&game.reset(), &actions(["0", "1", "2", "4", "3", "5", "7", "6", "8"]))
            .unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Draw);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let game = TicTacToe::new();
        let state = game.apply_action(&game.reset(), &Action::new("4")).unwrap();

        assert_eq!(game.current_player(&state), Some(PlayerId::SECOND));
        assert!(matches!(
            game.apply_action(&state, &Action::new("4")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(matches!(
            game.apply_action(&state, &Action::new("9")),
            Err(ActionError::Illegal { .. })
        ));
    }

    #[test]
    fn test_render() {
        let game = TicTacToe::new();
        let state = game.apply_action(&game.reset(), &Action::new("0")).unwrap();

        assert_eq!(game.render(&state), "X| | \n-----\n | | \n-----\n | | ");
    }
}
