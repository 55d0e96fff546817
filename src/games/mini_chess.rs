//! Chess on a 6x6 board (Los Alamos layout).
//!
//! White (player 0, uppercase) starts on rows 4-5 and moves first; black
//! (player 1, lowercase) starts on rows 0-1. Pieces are king, queen, rook,
//! knight and pawn; there are no bishops, no castling, no double pawn step,
//! no en passant and no promotion. Check is not enforced: the game is won by
//! capturing the enemy king. A side to move with no move ends the game as
//! a draw.
//!
//! Moves are written as two squares, e.g. `"b4b6"`. Files run `a`-`f` from
//! column 0; rank `n` is row `6 - n`.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::rules::grid::{Direction, Grid, DIAGONAL_DIRECTIONS, KING_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

const SIZE: usize = 6;

const KNIGHT_JUMPS: [Direction; 8] = [(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    King,
    Queen,
    Rook,
    Knight,
    Pawn,
}

/// A chess piece and its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    pub kind: Kind,
    pub owner: PlayerId,
}

impl ChessPiece {
    fn from_symbol(symbol: char) -> Option<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => Kind::King,
            'q' => Kind::Queen,
            'r' => Kind::Rook,
            'n' => Kind::Knight,
            'p' => Kind::Pawn,
            _ => return None,
        };
        let owner = if symbol.is_ascii_uppercase() { PlayerId::FIRST } else { PlayerId::SECOND };
        Some(Self { kind, owner })
    }

    fn symbol(self) -> char {
        let symbol = match self.kind {
            Kind::King => 'k',
            Kind::Queen => 'q',
            Kind::Rook => 'r',
            Kind::Knight => 'n',
            Kind::Pawn => 'p',
        };
        if self.owner == PlayerId::FIRST {
            symbol.to_ascii_uppercase()
        } else {
            symbol
        }
    }
}

type Square = (usize, usize);

/// MiniChess position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MiniChessState {
    pub board: Grid<Option<ChessPiece>>,
    pub to_move: PlayerId,
}

impl MiniChessState {
    /// Build a position from six rows of six symbols (`KQRNP` for white,
    /// `kqrnp` for black, anything else empty), row 0 first.
    ///
    /// Panics if a row is not six characters long.
    #[must_use]
    pub fn from_rows(rows: [&str; SIZE], to_move: PlayerId) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                let cells: Vec<_> = row.chars().map(ChessPiece::from_symbol).collect();
                assert_eq!(cells.len(), SIZE, "MiniChess rows must have 6 squares");
                cells
            })
            .collect();
        Self {
            board: Grid::from_rows(rows),
            to_move,
        }
    }

    fn has_king(&self, player: PlayerId) -> bool {
        self.board.contains(Some(ChessPiece {
            kind: Kind::King,
            owner: player,
        }))
    }

    fn is_enemy(&self, (r, c): Square) -> bool {
        self.board.get(r, c).is_some_and(|p| p.owner != self.to_move)
    }

    fn is_empty(&self, (r, c): Square) -> bool {
        self.board.get(r, c).is_none()
    }

    fn targets(&self, from: Square, piece: ChessPiece) -> Vec<Square> {
        let (r, c) = from;
        let open = |sq: Square| self.is_empty(sq) || self.is_enemy(sq);
        match piece.kind {
            Kind::Pawn => {
                let dr = if piece.owner == PlayerId::FIRST { -1 } else { 1 };
                let mut targets: Vec<Square> = self
                    .board
                    .offset(r, c, dr, 0)
                    .filter(|&sq| self.is_empty(sq))
                    .into_iter()
                    .collect();
                targets.extend(
                    [-1, 1]
                        .into_iter()
                        .filter_map(|dc| self.board.offset(r, c, dr, dc))
                        .filter(|&sq| self.is_enemy(sq)),
                );
                targets
            }
            Kind::Knight => KNIGHT_JUMPS
                .iter()
                .filter_map(|&(dr, dc)| self.board.offset(r, c, dr, dc))
                .filter(|&sq| open(sq))
                .collect(),
            Kind::King => KING_DIRECTIONS
                .iter()
                .filter_map(|&(dr, dc)| self.board.offset(r, c, dr, dc))
                .filter(|&sq| open(sq))
                .collect(),
            Kind::Rook => self.slides(from, &ORTHOGONAL_DIRECTIONS),
            Kind::Queen => {
                let mut targets = self.slides(from, &ORTHOGONAL_DIRECTIONS);
                targets.extend(self.slides(from, &DIAGONAL_DIRECTIONS));
                targets
            }
        }
    }

    fn slides(&self, (r, c): Square, directions: &[Direction]) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(dr, dc) in directions {
            let mut at = (r, c);
            while let Some(sq) = self.board.offset(at.0, at.1, dr, dc) {
                if self.is_empty(sq) {
                    targets.push(sq);
                } else {
                    if self.is_enemy(sq) {
                        targets.push(sq);
                    }
                    break;
                }
                at = sq;
            }
        }
        targets
    }

    fn moves(&self) -> Vec<(Square, Square)> {
        self.board
            .cells()
            .filter_map(|(from, square)| square.filter(|p| p.owner == self.to_move).map(|p| (from, p)))
            .flat_map(|(from, piece)| self.targets(from, piece).into_iter().map(move |to| (from, to)))
            .collect()
    }
}

fn format_square((r, c): Square) -> String {
    format!("{}{}", char::from(b'a' + c as u8), SIZE - r)
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    let c = file.checked_sub(b'a')? as usize;
    let rank = rank.checked_sub(b'0')? as usize;
    (c < SIZE && (1..=SIZE).contains(&rank)).then_some((SIZE - rank, c))
}

fn parse_move(action: &Action) -> Result<(Square, Square), ActionError> {
    let malformed = || action.malformed("two squares such as b4b6");
    match action.as_str().as_bytes() {
        &[f1, r1, f2, r2] => Ok((
            parse_square(f1, r1).ok_or_else(malformed)?,
            parse_square(f2, r2).ok_or_else(malformed)?,
        )),
        _ => Err(malformed()),
    }
}

/// MiniChess rules.
#[derive(Clone, Debug, Default)]
pub struct MiniChess;

impl MiniChess {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Game for MiniChess {
    type State = MiniChessState;

    fn name(&self) -> &str {
        "mini_chess"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &MiniChessState) -> Option<PlayerId> {
        Some(state.to_move)
    }

    fn reset(&self) -> MiniChessState {
        MiniChessState::from_rows(
            ["rnqknr", "pppppp", "      ", "      ", "PPPPPP", "RNQKNR"],
            PlayerId::FIRST,
        )
    }

    fn valid_actions(&self, state: &MiniChessState) -> Vec<Action> {
        if !PlayerId::both().all(|p| state.has_king(p)) {
            return Vec::new();
        }
        state
            .moves()
            .into_iter()
            .map(|(from, to)| Action::new(format_square(from) + &format_square(to)))
            .collect()
    }

    fn apply_action(&self, state: &MiniChessState, action: &Action) -> Result<MiniChessState, ActionError> {
        let ((r1, c1), (r2, c2)) = parse_move(action)?;
        self.ensure_legal(state, action)?;

        let mut board = state.board.clone();
        board.set(r2, c2, board.get(r1, c1));
        board.set(r1, c1, None);
        Ok(MiniChessState {
            board,
            to_move: state.to_move.opponent(),
        })
    }

    fn is_terminal(&self, state: &MiniChessState) -> bool {
        self.winner(state).is_decided()
    }

    fn winner(&self, state: &MiniChessState) -> Outcome {
        if !state.has_king(PlayerId::FIRST) {
            Outcome::Winner(PlayerId::SECOND)
        } else if !state.has_king(PlayerId::SECOND) {
            Outcome::Winner(PlayerId::FIRST)
        } else if state.moves().is_empty() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    fn render(&self, state: &MiniChessState) -> String {
        let side = if state.to_move == PlayerId::FIRST { "white" } else { "black" };
        let board = state
            .board
            .render_with("|", |square| square.map_or(' ', ChessPiece::symbol).to_string());
        format!("Turn: {side}\n{board}")
    }
}

/// Register MiniChess under `"mini_chess"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("mini_chess", |_| BoxedGame::new(MiniChess::new()));
}
