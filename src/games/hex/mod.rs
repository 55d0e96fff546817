//! Hex on an N x N rhombus.
//!
//! - Players alternate placing a marker on any empty cell
//! - Player 0 connects the left and right edges (column 0 to column N-1)
//! - Player 1 connects the top and bottom edges (row 0 to row N-1)
//! - Cells touch their six hex neighbours
//!
//! The player to move is derived from the marker counts, so the state is
//! just the board.

mod game;

pub use game::{register, Hex, HexState};
