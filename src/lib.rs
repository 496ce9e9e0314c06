//! Reversi/Othello rules engine.
//!
//! - [`Board`] stores the 8x8 grid and knows nothing about the rules.
//! - [`flip::captures`] resolves which disks a placement would flip.
//! - [`GameState`] applies moves, resolves passes, and decides the winner.
//!
//! The engine performs no I/O. [`wasm::ReversiSession`] exposes it to
//! JavaScript.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod flip;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell, Player, Position};
pub use error::{IllegalMove, MoveError, OutOfBounds};
pub use game::{GameState, LastMove, Status};

/// Squares along one edge.
pub const BOARD_SIZE: usize = 8;

/// Squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Unit steps `(dx, dy)` for the eight capture directions.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
