//! Quoridor on an N x N board.
//!
//! ## Rules
//!
//! - Player 0 starts at (0, N/2) and must reach row N-1; player 1 starts at
//!   (N-1, N/2) and must reach row 0
//! - A turn is a pawn step `U`/`D`/`L`/`R` or a wall placement
//! - Pawns may not step onto the other pawn
//! - `"H r c"` places a wall below square (r, c), blocking (r, c)-(r+1, c);
//!   `"V r c"` places a wall right of square (r, c), blocking
//!   (r, c)-(r, c+1). Both need r, c < N-1 and a wall left in stock
//! - A player with no legal action ends the game as a draw

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId, PlayerMap};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

type Square = (usize, usize);

/// Orientation of a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wall {
    Horizontal,
    Vertical,
}

/// Quoridor position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoridorState {
    pub pawns: PlayerMap<Square>,
    pub h_walls: OrdSet<Square>,
    pub v_walls: OrdSet<Square>,
    pub walls_left: PlayerMap<u32>,
    pub to_move: PlayerId,
}

/// Quoridor rules.
#[derive(Clone, Debug)]
pub struct Quoridor {
    size: usize,
    walls_per_player: u32,
}

impl Quoridor {
    /// Panics if `size` is below 2.
    #[must_use]
    pub fn new(size: usize, walls_per_player: u32) -> Self {
        assert!(size >= 2, "Quoridor board size must be >= 2");
        Self { size, walls_per_player }
    }

    fn goal_row(&self, player: PlayerId) -> usize {
        if player == PlayerId::FIRST {
            self.size - 1
        } else {
            0
        }
    }

    /// Destination of a pawn step, if the step is allowed.
    fn step(&self, state: &QuoridorState, direction: char) -> Option<Square> {
        let (r, c) = state.pawns[state.to_move];
        let target = match direction {
            'U' if r > 0 && !state.h_walls.contains(&(r - 1, c)) => (r - 1, c),
            'D' if r + 1 < self.size && !state.h_walls.contains(&(r, c)) => (r + 1, c),
            'L' if c > 0 && !state.v_walls.contains(&(r, c - 1)) => (r, c - 1),
            'R' if c + 1 < self.size && !state.v_walls.contains(&(r, c)) => (r, c + 1),
            _ => return None,
        };
        (target != state.pawns[state.to_move.opponent()]).then_some(target)
    }

    fn can_place(&self, state: &QuoridorState, wall: Wall, (r, c): Square) -> bool {
        let walls = match wall {
            Wall::Horizontal => &state.h_walls,
            Wall::Vertical => &state.v_walls,
        };
        state.walls_left[state.to_move] > 0 && r + 1 < self.size && c + 1 < self.size && !walls.contains(&(r, c))
    }

    fn legal_actions(&self, state: &QuoridorState) -> Vec<Action> {
        let mut actions: Vec<Action> = ['U', 'D', 'L', 'R']
            .into_iter()
            .filter(|&d| self.step(state, d).is_some())
            .map(|d| Action::new(d.to_string()))
            .collect();
        for r in 0..self.size - 1 {
            for c in 0..self.size - 1 {
                if self.can_place(state, Wall::Horizontal, (r, c)) {
                    actions.push(Action::new(format!("H {r} {c}")));
                }
                if self.can_place(state, Wall::Vertical, (r, c)) {
                    actions.push(Action::new(format!("V {r} {c}")));
                }
            }
        }
        actions
    }

    fn reached_goal(&self, state: &QuoridorState) -> Option<PlayerId> {
        PlayerId::both().find(|&p| state.pawns[p].0 == self.goal_row(p))
    }
}

impl Default for Quoridor {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

enum Move {
    Step(char),
    Place(Wall, Square),
}

fn parse(action: &Action) -> Result<Move, ActionError> {
    const EXPECTED: &str = "U, D, L, R, \"H r c\" or \"V r c\"";
    let token = action.as_str();
    let step = match token {
        "U" => Some('U'),
        "D" => Some('D'),
        "L" => Some('L'),
        "R" => Some('R'),
        _ => None,
    };
    if let Some(direction) = step {
        return Ok(Move::Step(direction));
    }
    let (wall, rest) = match token.split_once(' ') {
        Some(("H", rest)) => (Wall::Horizontal, rest),
        Some(("V", rest)) => (Wall::Vertical, rest),
        _ => return Err(action.malformed(EXPECTED)),
    };
    let [r, c] = Action::new(rest)
        .fields_exact::<2>(' ', EXPECTED)
        .map_err(|_| action.malformed(EXPECTED))?;
    Ok(Move::Place(wall, (r, c)))
}

impl Game for Quoridor {
    type State = QuoridorState;

    fn name(&self) -> &str {
        "quoridor"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &QuoridorState) -> Option<PlayerId> {
        Some(state.to_move)
    }

    fn reset(&self) -> QuoridorState {
        let mid = self.size / 2;
        QuoridorState {
            pawns: PlayerMap::new(|p| if p == PlayerId::FIRST { (0, mid) } else { (self.size - 1, mid) }),
            h_walls: OrdSet::new(),
            v_walls: OrdSet::new(),
            walls_left: PlayerMap::with_value(self.walls_per_player),
            to_move: PlayerId::FIRST,
        }
    }

    fn valid_actions(&self, state: &QuoridorState) -> Vec<Action> {
        if self.reached_goal(state).is_some() {
            return Vec::new();
        }
        self.legal_actions(state)
    }

    fn apply_action(&self, state: &QuoridorState, action: &Action) -> Result<QuoridorState, ActionError> {
        let parsed = parse(action)?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }

        let mut next = state.clone();
        match parsed {
            Move::Step(direction) => {
                let target = self.step(state, direction).ok_or_else(|| action.illegal())?;
                next.pawns[state.to_move] = target;
            }
            Move::Place(wall, square) => {
                if !self.can_place(state, wall, square) {
                    return Err(action.illegal());
                }
                match wall {
                    Wall::Horizontal => next.h_walls.insert(square),
                    Wall::Vertical => next.v_walls.insert(square),
                };
                next.walls_left[state.to_move] -= 1;
            }
        }
        next.to_move = state.to_move.opponent();
        Ok(next)
    }

    fn is_terminal(&self, state: &QuoridorState) -> bool {
        self.reached_goal(state).is_some() || self.legal_actions(state).is_empty()
    }

    fn winner(&self, state: &QuoridorState) -> Outcome {
        match self.reached_goal(state) {
            Some(player) => Outcome::Winner(player),
            None if self.legal_actions(state).is_empty() => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }

    fn render(&self, state: &QuoridorState) -> String {
        let mut rows = Vec::with_capacity(self.size + 3);
        for r in 0..self.size {
            let row: Vec<&str> = (0..self.size)
                .map(|c| match PlayerId::both().find(|&p| state.pawns[p] == (r, c)) {
                    Some(PlayerId(0)) => "0",
                    Some(_) => "1",
                    None => ".",
                })
                .collect();
            rows.push(row.join(" "));
        }
        rows.push(format!("H walls: {:?}", state.h_walls.iter().collect::<Vec<_>>()));
        rows.push(format!("V walls: {:?}", state.v_walls.iter().collect::<Vec<_>>()));
        rows.push(format!(
            "Remaining: [{}, {}]",
            state.walls_left[PlayerId::FIRST],
            state.walls_left[PlayerId::SECOND]
        ));
        rows.join("\n")
    }
}

/// Register Quoridor under `"quoridor"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("quoridor", |settings: &GameSettings| {
        let q = &settings.quoridor;
        BoxedGame::new(Quoridor::new(q.size, q.walls_per_player))
    });
}
