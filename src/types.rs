//! Plain snapshots handed to JavaScript and other external callers.
//!
//! Colors are encoded as `0` = none, `1` = black, `2` = white.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Player, Position};
use crate::game::GameState;

pub const CODE_NONE: u8 = 0;
pub const CODE_BLACK: u8 = 1;
pub const CODE_WHITE: u8 = 2;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl From<Position> for Coord {
    fn from(pos: Position) -> Self {
        Self {
            x: pos.x(),
            y: pos.y(),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub placed_count: u8,
    pub is_game_over: bool,
    /// Row-major indices flipped by the last move; empty before the first move.
    pub flipped: Vec<u8>,
    /// Player whose turn was skipped right after the last move, or `0`.
    pub skipped: u8,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// `0` on a draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

impl From<&GameState> for StateView {
    fn from(state: &GameState) -> Self {
        let (black_count, white_count) = state.counts();
        let last = state.last_move();
        Self {
            board: state.board().to_array().iter().map(|&c| cell_code(c)).collect(),
            current_player: player_code(Some(state.current_player())),
            black_count,
            white_count,
            placed_count: state.placed_count(),
            is_game_over: state.is_terminal(),
            flipped: last
                .map(|m| m.flipped.iter().map(|p| p.index() as u8).collect())
                .unwrap_or_default(),
            skipped: player_code(last.and_then(|m| m.skipped)),
        }
    }
}

pub fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => CODE_NONE,
        Cell::Black => CODE_BLACK,
        Cell::White => CODE_WHITE,
    }
}

pub fn player_code(player: Option<Player>) -> u8 {
    match player {
        None => CODE_NONE,
        Some(Player::Black) => CODE_BLACK,
        Some(Player::White) => CODE_WHITE,
    }
}
