//! The game catalog.
//!
//! Every game implements [`crate::rules::Game`] with its own state type and
//! registers itself by name. [`GameRegistry::with_builtin_games`] builds a
//! registry holding all of them, each wrapped as a [`BoxedGame`].
//!
//! | Name             | Turn policy          | Ends when                              |
//! |------------------|----------------------|----------------------------------------|
//! | `hex`            | derived (parity)     | an edge-to-edge chain exists           |
//! | `othello`        | derived (stored)     | board full or neither side can place   |
//! | `mancala`        | derived (stored)     | one side's pits are empty              |
//! | `dots_and_boxes` | derived (edges)      | every edge drawn                       |
//! | `tictactoe`      | derived (parity)     | three in a row or full board           |
//! | `connect_four`   | derived (parity)     | a run of `connect` or full board       |
//! | `nim`            | derived (plies)      | the pile is empty                      |
//! | `multiheap_nim`  | derived (plies)      | every heap is empty                    |
//! | `sudoku_race`    | derived (plies)      | no placement remains                   |
//! | `word_ladder`    | derived (plies)      | goal reached or dead end               |
//! | `checkers`       | derived (stored)     | a side has no pieces or no moves       |
//! | `quoridor`       | derived (stored)     | a pawn reaches the far row             |
//! | `mini_chess`     | derived (stored)     | a king is captured or no moves         |

mod boxed;
mod registry;

pub mod checkers;
pub mod connect_four;
pub mod dots_and_boxes;
pub mod hex;
pub mod mancala;
pub mod mini_chess;
pub mod multiheap_nim;
pub mod nim;
pub mod othello;
pub mod quoridor;
pub mod sudoku_race;
pub mod tictactoe;
pub mod word_ladder;

pub use boxed::{BoxedGame, BoxedState};
pub use registry::{GameFactory, GameRegistry};

pub use checkers::{Checkers, CheckersState, Piece};
pub use connect_four::{ConnectFour, ConnectFourState};
pub use dots_and_boxes::{DotsAndBoxes, DotsState};
pub use hex::{Hex, HexState};
pub use mancala::{Mancala, MancalaState};
pub use mini_chess::{ChessPiece, MiniChess, MiniChessState};
pub use multiheap_nim::{MultiHeapNim, MultiHeapNimState};
pub use nim::{Nim, NimState};
pub use othello::{Othello, OthelloState};
pub use quoridor::{Quoridor, QuoridorState};
pub use sudoku_race::{SudokuRace, SudokuState};
pub use tictactoe::{TicTacToe, TicTacToeState};
pub use word_ladder::{WordLadderDuel, WordLadderState};

/// Register functions of every catalog game.
pub(crate) const BUILTIN_GAMES: &[fn(&mut GameRegistry)] = &[
    hex::register,
    othello::register,
    mancala::register,
    dots_and_boxes::register,
    tictactoe::register,
    connect_four::register,
    nim::register,
    multiheap_nim::register,
    sudoku_race::register,
    word_ladder::register,
    checkers::register,
    quoridor::register,
    mini_chess::register,
];
