//! Mancala implementation.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::games::{BoxedGame, GameRegistry};
use crate::rules::sowing::{SowingBoard, BOARD_LEN, PITS_PER_SIDE};
use crate::rules::{Game, Outcome, TurnPolicy};

/// Seeds per pit at the start.
pub const STARTING_SEEDS: u32 = 4;

/// Mancala position: the pit counters and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MancalaState {
    pub board: SowingBoard,
    pub to_move: PlayerId,
}

impl MancalaState {
    /// Position from raw counters in cycle order, for analysis and tests.
    #[must_use]
    pub fn from_pits(pits: [u32; BOARD_LEN], to_move: PlayerId) -> Self {
        Self {
            board: SowingBoard::from_pits(pits),
            to_move,
        }
    }
}

/// Mancala rules.
#[derive(Clone, Debug, Default)]
pub struct Mancala;

impl Mancala {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Final score of `player`: their store plus any seeds left on their side.
    fn score(state: &MancalaState, player: PlayerId) -> u32 {
        state.board.store(player) + state.board.side(player).iter().sum::<u32>()
    }
}

impl Game for Mancala {
    type State = MancalaState;

    fn name(&self) -> &str {
        "mancala"
    }

    fn turn_policy(&self) -> TurnPolicy {
        TurnPolicy::DerivedFromState
    }

    fn current_player(&self, state: &MancalaState) -> Option<PlayerId> {
        Some(state.to_move)
    }

    fn reset(&self) -> MancalaState {
        MancalaState {
            board: SowingBoard::new(STARTING_SEEDS),
            to_move: PlayerId::FIRST,
        }
    }

    fn valid_actions(&self, state: &MancalaState) -> Vec<Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        (0..PITS_PER_SIDE)
            .filter(|&pit| state.board.seeds(state.to_move, pit) > 0)
            .map(|pit| Action::new(pit.to_string()))
            .collect()
    }

    fn apply_action(&self, state: &MancalaState, action: &Action) -> Result<MancalaState, ActionError> {
        let [pit] = action.fields_exact::<1>(',', "pit 0-5")?;
        if self.is_terminal(state) {
            return Err(action.game_over());
        }
        if pit >= PITS_PER_SIDE || state.board.seeds(state.to_move, pit) == 0 {
            return Err(action.illegal());
        }

        let (board, report) = state.board.sow(state.to_move, pit);
        tracing::trace!(
            player = state.to_move.index(),
            pit,
            last = report.last_index,
            captured = report.captured,
            swept = report.swept,
            "sowed"
        );
        Ok(MancalaState {
            board,
            to_move: state.to_move.opponent(),
        })
    }

    fn is_terminal(&self, state: &MancalaState) -> bool {
        state.board.any_side_empty()
    }

    fn winner(&self, state: &MancalaState) -> Outcome {
        if !self.is_terminal(state) {
            return Outcome::Undecided;
        }
        Outcome::by_score(Self::score(state, PlayerId::FIRST), Self::score(state, PlayerId::SECOND))
    }

    fn render(&self, state: &MancalaState) -> String {
        let top: Vec<String> = state.board.side(PlayerId::SECOND).iter().rev().map(u32::to_string).collect();
        let bottom: Vec<String> = state.board.side(PlayerId::FIRST).iter().map(u32::to_string).collect();
        format!(
            " {} | {}\n{} | {}",
            state.board.store(PlayerId::SECOND),
            top.join(" "),
            bottom.join(" "),
            state.board.store(PlayerId::FIRST)
        )
    }
}

/// Register Mancala under `"mancala"`.
pub fn register(registry: &mut GameRegistry) {
    registry.register("mancala", |_| BoxedGame::new(Mancala::new()));
}
