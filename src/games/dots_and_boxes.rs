//! Dots and boxes on an N x N grid of boxes.
//!
//! ## Edges
//!
//! Edges are numbered with horizontal edges first: the horizontal edge
//! above box row `r` (0..=N), column `c` is `r*N + c`; the vertical edge
//! left of box column `c` (0..=N), row `r` is `H + r*(N+1) + c`, where
//! `H = N*(N+1)`.
//!
//! ## Turns
//!
//! The player to move is the parity of the drawn edge count, so completing
//! a box does not earn an extra move. Every box completed by an edge goes to
//! the player who drew it.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameSettings, PlayerId};
use crate::rules::{Game, Outcome, TurnPolicy};

use super::{BoxedGame, GameRegistry};

/// Dots and boxes position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotsState {
    pub edges: OrdSet<usize>,
    pub boxes: Vec<Option<PlayerId>>,
}

impl DotsState {
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        PlayerId::from_parity(self.edges.len())
    }

    /// Boxes owned by `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.boxes.iter().filter(|&&owner| owner == Some(player)).count() as u32
    }
}

/// Dots and boxes rules.
#[derive(Clone, Debug)]
pub struct DotsAndBoxes {
    size: usize,
    box_edges: Vec<[usize; 4]>,
}

impl DotsAndBoxes {
    /// Panics if `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Dots and boxes size must be positive");
        let mut game = Self {
            size,
            box_edges: Vec::with_capacity(size * size),
        };
        for r in 0..size {
            for c in 0..size {
                let edges = [
                    game.h_edge(r, c),
                    game.h_edge(r + 1, c),
                    game.v_edge(r, c),
                    game.v_edge(r, c + 1),
                ];
                game.box_edges.push(edges);
            }
        }
        game
    }

    fn h_edges(&self) -> usize {
        self.size * (self.size + 1)
    }

    fn total_edges(&self) -> usize {
        2 * self.h_edges()
    }

    fn h_edge(&self, r: usize, c: usize) -> usize {
        r * self.size + c
    }

    fn v_edge(&self, r: usize, c: usize) -> usize {
        self.h_edges() + r * (self.size + 1) + c
    }
}

impl Default for DotsAndBoxes {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Game for DotsAndBoxes {
    type State = DotsState;

    fn name(&self) -> &str {
        "dots_and_boxes"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &DotsState) -> Option<PlayerId> {
        Some(state.to_move())
    }

    fn reset(&self) -> DotsState {
        DotsState {
            edges: OrdSet::new(),
            boxes: vec![None; self.size * self.size],
        }
    }

    fn valid_actions(&self, state: &DotsState) -> Vec<Action> {
        (0..self.total_edges())
            .filter(|edge| !state.edges.contains(edge))
            .map(|edge| Action::new(edge.to_string()))
            .collect()
    }

    fn apply_action(&self, state: &DotsState, action: &Action) -> Result<DotsState, ActionError> {
        let [edge] = action.fields_exact::<1>(',', "edge index")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if edge >= self.total_edges() || state.edges.contains(&edge) {
            return Err(action.illegal());
        }

        let mover = state.to_move();
        let edges = state.edges.update(edge);
        let boxes = state
            .boxes
            .iter()
            .zip(&self.box_edges)
            .map(|(&owner, sides)| match owner {
                None if sides.iter().all(|e| edges.contains(e)) => Some(mover),
                owner => owner,
            })
            .collect();
        Ok(DotsState { edges, boxes })
    }

    fn is_terminal(&self, state: &DotsState) -> bool {
        state.edges.len() == self.total_edges()
    }

    fn winner(&self, state: &DotsState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Undecided;
        }
        Outcome::by_score(state.score(PlayerId::FIRST), state.score(PlayerId::SECOND))
    }

    fn render(&self, state: &DotsState) -> String {
        let drawn = |edge| state.edges.contains(&edge);
        let mut lines = Vec::with_capacity(2 * self.size + 1);
        for r in 0..=self.size {
            let mut line = String::new();
            for c in 0..self.size {
                line.push('*');
                line.push_str(if drawn(self.h_edge(r, c)) { "---" } else { "   " });
            }
            line.push('*');
            lines.push(line);

            if r < self.size {
                let mut line = String::new();
                for c in 0..=self.size {
                    line.push(if drawn(self.v_edge(r, c)) { '|' } else { ' ' });
                    if c < self.size {
                        let token = match state.boxes[r * self.size + c] {
                            Some(PlayerId(0)) => 'X',
                            Some(_) => 'O',
                            None => ' ',
                        };
                        line.push(' ');
                        line.push(token);
                        line.push(' ');
                    }
                }
                lines.push(line);
            }
        }
        lines.join("\n")
    }
}

/// Register dots and boxes under `"dots_and_boxes"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("dots_and_boxes", |settings: &GameSettings| {
        BoxedGame::new(DotsAndBoxes::new(settings.dots_and_boxes.size))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions;

    #[test]
    fn test_edge_numbering() {
        let game = DotsAndBoxes::new(2);

        assert_eq!(game.total_edges(), 12);
        assert_eq!(game.box_edges[0], [0, 2, 6, 7]);
        assert_eq!(game.box_edges[3], [3, 5, 10, 11]);
    }

    #[test]
    fn test_single_box_goes_to_closer() {
        let game = DotsAndBoxes::new(1);
        let state = game.apply_all(&game.reset(), &actions(["0", "2", "1", "3"])).unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(state.boxes, vec![Some(PlayerId::SECOND)]);
        assert_eq!(game.winner(&state), Outcome::Winner(PlayerId::SECOND));
        assert!(game.valid_actions(&state).is_empty());
    }

    #[test]
    fn test_no_extra_turn_after_completing_box() {
        let game = DotsAndBoxes::new(2);
        // Box 0 edges 0, 2, 6, 7; player 1 draws the fourth.
        let state = game.apply_all(&game.reset(), &actions(["0", "2", "6", "7"])).unwrap();

        assert_eq!(state.boxes[0], Some(PlayerId::SECOND));
        assert_eq!(game.current_player(&state), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_one_edge_can_close_two_boxes() {
        let game = DotsAndBoxes::new(2);
        // Edge 7 is shared by boxes 0 and 1.
        let state = game
            .apply_all(&game.reset(), &actions(["0", "2", "6", "1", "3", "8", "7"]))
            .unwrap();

        assert_eq!(state.boxes[0], Some(PlayerId::FIRST));
        assert_eq!(state.boxes[1], Some(PlayerId::FIRST));
        assert_eq!(state.score(PlayerId::FIRST), 2);
    }

    #[test]
    fn test_drawn_and_out_of_range_edges_rejected() {
        let game = DotsAndBoxes::new(1);
        let state = game.apply_action(&game.reset(), &Action::new("0")).unwrap();

        assert!(matches!(
            game.apply_action(&state, &Action::new("0")),
            Err(ActionError::Illegal { .. })
        ));
        assert!(matches!(
            game.apply_action(&state, &Action::new("4")),
            Err(ActionError::Illegal { .. })
        ));
    }

    #[test]
    fn test_equal_boxes_draw() {
        let game = DotsAndBoxes::new(2);
        let state = game
            .apply_all(&game.reset(), &actions(["0", "2", "6", "7", "1", "3", "8", "4", "5", "9", "10", "11"]))
            .unwrap();

        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Outcome::Draw);
    }

    #[test]
    fn test_render() {
        let game = DotsAndBoxes::new(1);
        let state = game.apply_all(&game.reset(), &actions(["0", "2", "1", "3"])).unwrap();

        assert_eq!(game.render(&state), "*---*\n| O |\n*---*");
    }
}
