//! Running matches.
//!
//! [`Match`] is one game in progress: a state, the seat to move and a ply
//! counter, advanced one agent decision at a time with [`Match::step`].
//! [`MatchEngine`] owns a game and a [`MatchConfig`](crate::core::MatchConfig)
//! and plays whole matches to a [`MatchReport`].
//!
//! ## Turn attribution
//!
//! The engine never assumes who moves next. After each ply it asks the
//! game's [`TurnPolicy`](crate::rules::TurnPolicy): external-alternation
//! games flip the seat, state-derived games name the mover through
//! `Game::current_player`.

mod engine;
mod session;

pub use engine::{MatchEngine, MatchReport};
pub use session::{Match, MatchPhase};
