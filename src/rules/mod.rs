//! Game trait and the rule algorithms shared by the catalog.
//!
//! Games implement `Game` to define:
//! - The initial position and legal actions
//! - How actions produce new states
//! - Terminal and win conditions
//!
//! The match engine calls into `Game` but never interprets game-specific
//! concepts directly. The remaining modules hold the reusable rule
//! algorithms: board storage, connection search, bounded capture and
//! sowing.

pub mod engine;
pub mod grid;
pub mod connectivity;
pub mod capture;
pub mod sowing;

pub use engine::{Game, Outcome, TurnPolicy};
