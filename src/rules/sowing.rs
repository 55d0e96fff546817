//! Sowing with capture on a two-row pit board.
//!
//! ## Layout
//!
//! Fourteen counters in cycle order: player 0's six pits (0-5), player 0's
//! store (6), player 1's six pits (7-12), player 1's store (13). Pit `i`
//! faces pit `12 - i`.
//!
//! ## Move
//!
//! A mover lifts every seed from one of their non-empty pits and drops them
//! one at a time into the following counters, skipping the opponent's store.
//! If the last seed lands in an empty pit of the mover's side and the facing
//! pit holds seeds, both are moved into the mover's store. After the whole
//! move has resolved, if either side's pits are all empty, every remaining
//! seed is swept into the store of the side it sits on.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Playing pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Total counters: two sides of pits plus two stores.
pub const BOARD_LEN: usize = 2 * (PITS_PER_SIDE + 1);

/// What happened during one sowing move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SowReport {
    /// Index of the counter that received the last seed.
    pub last_index: usize,
    /// Seeds moved to the mover's store by the capture rule (0 if none).
    pub captured: u32,
    /// Whether the end-of-game sweep ran.
    pub swept: bool,
}

/// Pit counters of a sowing game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SowingBoard {
    pits: [u32; BOARD_LEN],
}

impl SowingBoard {
    /// Board with `seeds` in every playing pit and empty stores.
    #[must_use]
    pub fn new(seeds: u32) -> Self {
        let mut pits = [seeds; BOARD_LEN];
        for player in PlayerId::both() {
            pits[Self::store_index(player)] = 0;
        }
        Self { pits }
    }

    /// Board from raw counters in cycle order.
    #[must_use]
    pub fn from_pits(pits: [u32; BOARD_LEN]) -> Self {
        Self { pits }
    }

    /// Raw counters in cycle order.
    #[must_use]
    pub fn pits(&self) -> &[u32; BOARD_LEN] {
        &self.pits
    }

    /// Index of `player`'s store.
    #[must_use]
    pub const fn store_index(player: PlayerId) -> usize {
        player.index() * (PITS_PER_SIDE + 1) + PITS_PER_SIDE
    }

    /// Index of `player`'s `pit`-th playing pit (0-5).
    #[must_use]
    pub const fn pit_index(player: PlayerId, pit: usize) -> usize {
        player.index() * (PITS_PER_SIDE + 1) + pit
    }

    /// Owner of a playing pit; `None` for stores.
    #[must_use]
    pub fn pit_owner(index: usize) -> Option<PlayerId> {
        PlayerId::both().find(|&p| {
            let first = Self::pit_index(p, 0);
            (first..first + PITS_PER_SIDE).contains(&index)
        })
    }

    /// The pit facing `index` across the board.
    #[must_use]
    pub const fn opposite(index: usize) -> usize {
        2 * PITS_PER_SIDE - index
    }

    /// Seeds in `player`'s `pit`-th pit.
    #[must_use]
    pub fn seeds(&self, player: PlayerId, pit: usize) -> u32 {
        self.pits[Self::pit_index(player, pit)]
    }

    /// Seeds in `player`'s store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.pits[Self::store_index(player)]
    }

    /// Both stores.
    #[must_use]
    pub fn stores(&self) -> PlayerMap<u32> {
        PlayerMap::new(|p| self.store(p))
    }

    /// `player`'s six playing pits.
    #[must_use]
    pub fn side(&self, player: PlayerId) -> &[u32] {
        let first = Self::pit_index(player, 0);
        &self.pits[first..first + PITS_PER_SIDE]
    }

    /// Check if all of `player`'s playing pits are empty.
    #[must_use]
    pub fn side_empty(&self, player: PlayerId) -> bool {
        self.side(player).iter().all(|&n| n == 0)
    }

    /// Check if either side is exhausted.
    #[must_use]
    pub fn any_side_empty(&self) -> bool {
        PlayerId::both().any(|p| self.side_empty(p))
    }

    /// Total seeds on the board, stores included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Sow from `player`'s `pit`-th pit and return the new board.
    ///
    /// Panics if the pit index is out of range or the pit is empty; callers
    /// check legality first.
    #[must_use]
    pub fn sow(&self, player: PlayerId, pit: usize) -> (Self, SowReport) {
        assert!(pit < PITS_PER_SIDE, "Pit index must be 0-5");
        let start = Self::pit_index(player, pit);
        let mut seeds = self.pits[start];
        assert!(seeds > 0, "Cannot sow from an empty pit");

        let skip = Self::store_index(player.opponent());
        let mut next = *self;
        next.pits[start] = 0;

        let mut i = start;
        while seeds > 0 {
            i = (i + 1) % BOARD_LEN;
            if i == skip {
                continue;
            }
            next.pits[i] += 1;
            seeds -= 1;
        }

        let captured = next.capture(player, i);
        let swept = next.sweep_if_exhausted();

        (
            next,
            SowReport {
                last_index: i,
                captured,
                swept,
            },
        )
    }

    fn capture(&mut self, player: PlayerId, last: usize) -> u32 {
        if Self::pit_owner(last) != Some(player) || self.pits[last] != 1 {
            return 0;
        }
        let facing = Self::opposite(last);
        if self.pits[facing] == 0 {
            return 0;
        }
        let taken = self.pits[facing] + 1;
        self.pits[facing] = 0;
        self.pits[last] = 0;
        self.pits[Self::store_index(player)] += taken;
        taken
    }

    fn sweep_if_exhausted(&mut self) -> bool {
        if !self.any_side_empty() {
            return false;
        }
        for player in PlayerId::both() {
            let first = Self::pit_index(player, 0);
            let remaining: u32 = self.pits[first..first + PITS_PER_SIDE].iter().sum();
            self.pits[first..first + PITS_PER_SIDE].fill(0);
            self.pits[Self::store_index(player)] += remaining;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_layout() {
        assert_eq!(SowingBoard::store_index(P0), 6);
        assert_eq!(SowingBoard::store_index(P1), 13);
        assert_eq!(SowingBoard::pit_index(P1, 0), 7);
        assert_eq!(SowingBoard::opposite(0), 12);
        assert_eq!(SowingBoard::opposite(5), 7);
        assert_eq!(SowingBoard::pit_owner(6), None);
        assert_eq!(SowingBoard::pit_owner(12), Some(P1));
    }

    #[test]
    fn test_simple_sow() {
        let board = SowingBoard::new(4);
        let (next, report) = board.sow(P0, 2);

        assert_eq!(&next.pits()[..7], &[4, 4, 0, 5, 5, 5, 1]);
        assert_eq!(report.last_index, 6);
        assert_eq!(report.captured, 0);
        assert!(!report.swept);
        assert_eq!(next.total(), 48);
        // Input board untouched.
        assert_eq!(board.seeds(P0, 2), 4);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        let mut pits = [1u32; BOARD_LEN];
        pits[6] = 0;
        pits[13] = 0;
        pits[5] = 9;
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 5);

        // 9 seeds: store 6, pits 7-12, skip 13, then pits 0 and 1.
        assert_eq!(next.store(P0), 1);
        assert_eq!(next.store(P1), 0);
        assert_eq!(report.last_index, 1);
        assert_eq!(next.seeds(P0, 1), 2);
    }

    #[test]
    fn test_player_one_skips_store_zero() {
        let mut pits = [1u32; BOARD_LEN];
        pits[6] = 0;
        pits[13] = 0;
        pits[12] = 9;
        let (next, report) = SowingBoard::from_pits(pits).sow(P1, 5);

        // 9 seeds: store 13, pits 0-5, skip 6, then pits 7 and 8.
        assert_eq!(next.store(P1), 1);
        assert_eq!(next.store(P0), 0);
        assert_eq!(report.last_index, 8);
        assert_eq!(next.seeds(P1, 1), 2);
    }

    #[test]
    fn test_capture_into_empty_own_pit() {
        // Pit 1 holds one seed, pit 2 is empty and faces pit 10 with 5.
        let mut pits = [0u32; BOARD_LEN];
        pits[0] = 3;
        pits[1] = 1;
        pits[10] = 5;
        pits[11] = 1;
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 1);

        assert_eq!(report.last_index, 2);
        assert_eq!(report.captured, 6);
        assert_eq!(next.store(P0), 6);
        assert_eq!(next.seeds(P0, 2), 0);
        assert_eq!(next.seeds(P1, 3), 0);
        assert!(!report.swept);
    }

    #[test]
    fn test_no_capture_when_facing_pit_empty() {
        let mut pits = [0u32; BOARD_LEN];
        pits[0] = 2;
        pits[1] = 1;
        pits[8] = 1;
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 1);

        assert_eq!(report.captured, 0);
        assert_eq!(next.seeds(P0, 2), 1);
    }

    #[test]
    fn test_no_capture_when_landing_pit_was_occupied() {
        let mut pits = [0u32; BOARD_LEN];
        pits[1] = 1;
        pits[2] = 2;
        pits[10] = 4;
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 1);

        assert_eq!(report.captured, 0);
        assert_eq!(next.seeds(P0, 2), 3);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        let mut pits = [0u32; BOARD_LEN];
        pits[5] = 2;
        pits[0] = 1;
        pits[12] = 3;
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 5);

        assert_eq!(report.last_index, 7);
        assert_eq!(report.captured, 0);
        assert_eq!(next.seeds(P1, 0), 1);
    }

    #[test]
    fn test_sweep_after_side_empties() {
        let pits = [0, 0, 0, 0, 0, 1, 10, 0, 0, 0, 0, 0, 0, 7];
        let (next, report) = SowingBoard::from_pits(pits).sow(P0, 5);

        assert!(report.swept);
        assert!(next.side_empty(P0));
        assert!(next.side_empty(P1));
        assert_eq!(next.store(P0), 11);
        assert_eq!(next.store(P1), 7);
    }

    #[test]
    fn test_sweep_moves_opponent_seeds_to_their_store() {
        let pits = [0, 0, 0, 0, 0, 1, 3, 2, 0, 4, 0, 0, 0, 5];
        let (next, _) = SowingBoard::from_pits(pits).sow(P0, 5);

        assert_eq!(next.store(P0), 4);
        assert_eq!(next.store(P1), 11);
        assert_eq!(next.total(), 15);
    }

    #[test]
    #[should_panic(expected = "empty pit")]
    fn test_sow_empty_pit_panics() {
        let _ = SowingBoard::from_pits([0; BOARD_LEN]).sow(P0, 0);
    }
}
