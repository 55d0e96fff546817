//! Checkers on an 8x8 board.
//!
//! ## Rules
//!
//! - Player 0 (black, `b`) starts on rows 0-2 and moves down the board;
//!   player 1 (red, `r`) starts on rows 5-7 and moves up
//! - Men step one square diagonally forward, or jump a single adjacent
//!   enemy piece onto the empty square behind it; capturing is optional
//! - A man reaching the far row becomes a king (`B`/`R`) and moves in all
//!   four diagonal directions
//! - A side with no pieces left, or no move on its turn, loses
//!
//! Actions are `"r,c->r,c"`.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::rules::grid::{Direction, Grid, DIAGONAL_DIRECTIONS};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

const SIZE: usize = 8;

const BLACK_FORWARD: [Direction; 2] = [(1, -1), (1, 1)];
const RED_FORWARD: [Direction; 2] = [(-1, -1), (-1, 1)];

/// A checkers piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Man(PlayerId),
    King(PlayerId),
}

impl Piece {
    #[must_use]
    pub fn owner(self) -> PlayerId {
        match self {
            Piece::Man(p) | Piece::King(p) => p,
        }
    }

    fn directions(self) -> &'static [Direction] {
        match self {
            Piece::King(_) => &DIAGONAL_DIRECTIONS,
            Piece::Man(PlayerId(0)) => &BLACK_FORWARD,
            Piece::Man(_) => &RED_FORWARD,
        }
    }

    fn symbol(self) -> char {
        match self {
            Piece::Man(PlayerId(0)) => 'b',
            Piece::King(PlayerId(0)) => 'B',
            Piece::Man(_) => 'r',
            Piece::King(_) => 'R',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Piece::Man(PlayerId::FIRST)),
            'B' => Some(Piece::King(PlayerId::FIRST)),
            'r' => Some(Piece::Man(PlayerId::SECOND)),
            'R' => Some(Piece::King(PlayerId::SECOND)),
            _ => None,
        }
    }
}

type Square = (usize, usize);

/// Checkers position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersState {
    pub board: Grid<Option<Piece>>,
    pub to_move: PlayerId,
}

impl CheckersState {
    /// Build a position from eight rows of eight symbols (`b`, `B`, `r`,
    /// `R`, anything else empty).
    ///
    /// Panics if a row is not eight characters long.
    #[must_use]
    pub fn from_rows(rows: [&str; SIZE], to_move: PlayerId) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                let cells: Vec<_> = row.chars().map(Piece::from_symbol).collect();
                assert_eq!(cells.len(), SIZE, "Checkers rows must have 8 squares");
                cells
            })
            .collect();
        Self {
            board: Grid::from_rows(rows),
            to_move,
        }
    }

    fn has_pieces(&self, player: PlayerId) -> bool {
        self.board.cells().any(|(_, piece)| piece.map(Piece::owner) == Some(player))
    }

    fn moves(&self) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for ((r, c), piece) in self.board.cells() {
            let Some(piece) = piece.filter(|p| p.owner() == self.to_move) else {
                continue;
            };
            for &(dr, dc) in piece.directions() {
                let Some((nr, nc)) = self.board.offset(r, c, dr, dc) else {
                    continue;
                };
                match self.board.get(nr, nc) {
                    None => moves.push(((r, c), (nr, nc))),
                    Some(other) if other.owner() != self.to_move => {
                        if let Some((jr, jc)) = self.board.offset(nr, nc, dr, dc) {
                            if self.board.get(jr, jc).is_none() {
                                moves.push(((r, c), (jr, jc)));
                            }
                        }
                    }
                    Some(_) => {}
                }
            }
        }
        moves
    }
}

fn format_move(((r1, c1), (r2, c2)): (Square, Square)) -> Action {
    Action::new(format!("{r1},{c1}->{r2},{c2}"))
}

fn parse_move(action: &Action) -> Result<(Square, Square), ActionError> {
    const EXPECTED: &str = "r,c->r,c";
    let (from, to) = action.as_str().split_once("->").ok_or_else(|| action.malformed(EXPECTED))?;
    let square = |token: &str| {
        Action::new(token)
            .fields_exact::<2>(',', EXPECTED)
            .map(|[r, c]| (r, c))
            .map_err(|_| action.malformed(EXPECTED))
    };
    Ok((square(from)?, square(to)?))
}

/// Checkers rules.
#[derive(Clone, Debug, Default)]
pub struct Checkers;

impl Checkers {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Game for Checkers {
    type State = CheckersState;

    fn name(&self) -> &str {
        "checkers"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &CheckersState) -> Option<PlayerId> {
        Some(state.to_move)
    }

    fn reset(&self) -> CheckersState {
        let mut board = Grid::square(SIZE, None);
        for r in (0..3).chain(5..SIZE) {
            let owner = if r < 3 { PlayerId::FIRST } else { PlayerId::SECOND };
            for c in (0..SIZE).filter(|c| (r + c) % 2 == 1) {
                board.set(r, c, Some(Piece::Man(owner)));
            }
        }
        CheckersState {
            board,
            to_move: PlayerId::FIRST,
        }
    }

    fn valid_actions(&self, state: &CheckersState) -> Vec<Action> {
        if !PlayerId::both().all(|p| state.has_pieces(p)) {
            return Vec::new();
        }
        state.moves().into_iter().map(format_move).collect()
    }

    fn apply_action(&self, state: &CheckersState, action: &Action) -> Result<CheckersState, ActionError> {
        let ((r1, c1), (r2, c2)) = parse_move(action)?;
        self.ensure_legal(state, action)?;

        let mut board = state.board.clone();
        let mut piece = board.get(r1, c1);
        board.set(r1, c1, None);
        if r1.abs_diff(r2) == 2 {
            board.set((r1 + r2) / 2, (c1 + c2) / 2, None);
        }
        piece = match piece {
            Some(Piece::Man(p)) if (p == PlayerId::FIRST && r2 == SIZE - 1) || (p == PlayerId::SECOND && r2 == 0) => {
                Some(Piece::King(p))
            }
            other => other,
        };
        board.set(r2, c2, piece);

        Ok(CheckersState {
            board,
            to_move: state.to_move.opponent(),
        })
    }

    fn is_terminal(&self, state: &CheckersState) -> bool {
        self.winner(state).is_decided()
    }

    fn winner(&self, state: &CheckersState) -> Outcome {
        if !state.has_pieces(PlayerId::FIRST) {
            Outcome::Winner(PlayerId::SECOND)
        } else if !state.has_pieces(PlayerId::SECOND) {
            Outcome::Winner(PlayerId::FIRST)
        } else if state.moves().is_empty() {
            Outcome::Winner(state.to_move.opponent())
        } else {
            Outcome::Undecided
        }
    }

    fn render(&self, state: &CheckersState) -> String {
        state
            .board
            .render_with("|", |square| square.map_or(' ', Piece::symbol).to_string())
    }
}

/// Register checkers under `"checkers"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("checkers", |_| BoxedGame::new(Checkers::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "        ";

    #[test]
    fn test_opening_position() {
        let game = Checkers::new();
        let state = game.reset();

        assert_eq!(state.board.count(Some(Piece::Man(PlayerId::FIRST))), 12);
        assert_eq!(state.board.count(Some(Piece::Man(PlayerId::SECOND))), 12);
        // Four front-row men, two steps each except the edge man.
        assert_eq!(game.valid_actions(&state).len(), 7);
    }

    #[test]
    fn test_jump_capturing_last_piece_wins() {
        let game = Checkers::new();
        let state = CheckersState::from_rows(
            [EMPTY, EMPTY, " b      ", "  r     ", EMPTY, EMPTY, EMPTY, EMPTY],
            PlayerId::FIRST,
        );

        let next = game.apply_action(&state, &Action::new("2,1->4,3")).unwrap();

        assert_eq!(next.board.get(3, 2), None);
        assert_eq!(next.board.get(4, 3), Some(Piece::Man(PlayerId::FIRST)));
        assert!(game.is_terminal(&next));
        assert_eq!(game.winner(&next), Outcome::Winner(PlayerId::FIRST));
        assert!(game.valid_actions(&next).is_empty());
    }

    #[test]
    fn test_men_only_move_forward() {
        let game = Checkers::new();
        let state = CheckersState::from_rows(
            [EMPTY, EMPTY, EMPTY, "   b    ", EMPTY, EMPTY, EMPTY, "r       "],
            PlayerId::FIRST,
        );

        let moves = game.valid_actions(&state);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Action::new("3,3->4,2")));
        assert!(!moves.contains(&Action::new("3,3->2,2")));
    }

    #[test]
    fn test_promotion_and_king_moves() {
        let game = Checkers::new();
        let state = CheckersState::from_rows(
            [EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, " b      ", "       r"],
            PlayerId::FIRST,
        );

        let next = game.apply_action(&state, &Action::new("6,1->7,0")).unwrap();
        assert_eq!(next.board.get(7, 0), Some(Piece::King(PlayerId::FIRST)));

        let king = CheckersState::from_rows(
            [EMPTY, EMPTY, EMPTY, "   B    ", EMPTY, EMPTY, EMPTY, "r       "],
            PlayerId::FIRST,
        );
        assert_eq!(game.valid_actions(&king).len(), 4);
    }

    #[test]
    fn test_blocked_side_loses() {
        let game = Checkers::new();
        // Red's only man sits on row 0 facing the edge.
        let state = CheckersState::from_rows(
            ["r       ", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "B       "],
            PlayerId::SECOND,
        );

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::FIRST));
    }

    #[test]
    fn test_rejections() {
        let game = Checkers::new();
        let state = game.reset();

        assert!(matches!(
            game.apply_action(&state, &Action::new("2,1->4,3")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(matches!(
            game.apply_action(&state, &Action::new("5,0->4,1")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(game.apply_action(&state, &Action::new("2,1-3,2")).unwrap_err().is_malformed());
        assert!(game.apply_action(&state, &Action::new("2,1->3")).unwrap_err().is_malformed());
    }
}
