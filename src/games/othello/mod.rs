//! Othello (Reversi) on an even N x N board.
//!
//! ## Rules
//!
//! - Play starts from the four centre markers, player 0 (X) to move
//! - A placement must capture: it bounds a run of opponent markers in at
//!   least one of the eight directions, and every bounded run flips
//! - A player with no capturing placement must play `"pass"`
//! - The game ends on a full board or when neither side can place;
//!   more markers wins, equal counts draw

mod game;

pub use game::{register, Othello, OthelloState};
