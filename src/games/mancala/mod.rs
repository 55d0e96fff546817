//! Mancala (Kalah) with six pits per side and four seeds per pit.
//!
//! Sowing, capture and the end-of-game sweep live in
//! [`crate::rules::sowing`]. This variant has no extra turn for ending in
//! one's own store: turns always alternate.

mod game;

pub use game::{register, Mancala, MancalaState};
