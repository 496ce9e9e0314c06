use tracing::{debug, instrument};

use crate::board::{Board, Cell, Player, Position};
use crate::error::{IllegalMove, MoveError};
use crate::flip::{self, captures, decide_winner};
use crate::types::{GameResult, player_code};
use crate::NUM_SQUARES;

/// Whether moves are still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    InProgress,
    Finished,
}

/// The most recent committed placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub player: Player,
    pub position: Position,
    /// Captured disks in ascending row-major order. Never empty.
    pub flipped: Vec<Position>,
    /// Set when the next player had no legal move and was skipped.
    pub skipped: Option<Player>,
}

/// Complete state of one game session.
///
/// Values are never mutated in place by the rules: [`GameState::make_move`]
/// returns the next state and leaves `self` untouched, so a half-applied move
/// cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    placed_count: u8,
    status: Status,
    winner: Option<Player>,
    last_move: Option<LastMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::init()
    }
}

impl GameState {
    /// Standard opening with Black to move.
    #[instrument(level = "trace")]
    pub fn init() -> Self {
        Self::from_position(Board::initial(), Player::Black)
    }

    /// Starts a session from an arbitrary position.
    ///
    /// A full board, or one where neither side can move, is finished at
    /// once. If only `to_move` is blocked, the turn goes to the opponent.
    #[instrument(level = "debug", skip(board))]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            placed_count: board.occupied(),
            status: Status::InProgress,
            winner: None,
            last_move: None,
        };
        state.resolve_turn();
        state
    }

    /// Places a disk for the current player and returns the resulting state.
    ///
    /// Passes are resolved here: if the opponent cannot answer, the turn
    /// stays with the mover, and if neither side can move the game ends.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is finished.
    /// - [`MoveError::OutOfBounds`] for coordinates outside the board.
    /// - [`IllegalMove::CellOccupied`] or [`IllegalMove::NoCaptures`] when
    ///   the placement is not allowed.
    #[instrument(level = "debug", skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&self, x: i32, y: i32) -> Result<Self, MoveError> {
        if self.is_terminal() {
            debug!("move rejected: game over");
            return Err(MoveError::GameOver);
        }

        let pos = Position::new(x, y)?;
        if self.board.at(pos) != Cell::Empty {
            debug!("move rejected: occupied");
            return Err(IllegalMove::CellOccupied {
                x: pos.x(),
                y: pos.y(),
            }
            .into());
        }

        let mover = self.current_player;
        let flipped = captures(&self.board, x, y, mover)?;
        if flipped.is_empty() {
            debug!("move rejected: no captures");
            return Err(IllegalMove::NoCaptures {
                x: pos.x(),
                y: pos.y(),
            }
            .into());
        }

        let mut next = self.clone();
        next.board.put(pos, mover.cell());
        for &captured in &flipped {
            next.board.put(captured, mover.cell());
        }
        next.placed_count += 1;
        debug!(flipped = flipped.len(), "move committed");

        let mut last = LastMove {
            player: mover,
            position: pos,
            flipped,
            skipped: None,
        };

        if next.board.is_full() {
            next.finish();
        } else {
            next.current_player = mover.opponent();
            last.skipped = next.resolve_turn();
        }

        next.last_move = Some(last);
        Ok(next)
    }

    /// Every square where the current player may place, in row-major order.
    /// Empty once the game is finished.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        flip::legal_positions(&self.board, self.current_player)
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..NUM_SQUARES)
            .filter_map(Position::from_index)
            .any(|pos| flip::is_legal(&self.board, pos, player))
    }

    pub fn is_terminal(&self) -> bool {
        self.status == Status::Finished
    }

    /// The frozen winner. `None` while in progress and on a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Final score, available once the game is finished.
    pub fn result(&self) -> Option<GameResult> {
        self.is_terminal().then(|| {
            let (black_count, white_count) = self.counts();
            GameResult {
                winner: player_code(self.winner),
                black_count,
                white_count,
            }
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of occupied squares.
    pub fn placed_count(&self) -> u8 {
        self.placed_count
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (u8, u8) {
        (
            self.board.count_disks(Player::Black),
            self.board.count_disks(Player::White),
        )
    }

    /// Hands the turn on when the player to move is blocked.
    /// Returns the skipped player, if any.
    fn resolve_turn(&mut self) -> Option<Player> {
        if self.board.is_full() {
            self.finish();
            return None;
        }
        if self.has_legal_move(self.current_player) {
            return None;
        }

        let blocked = self.current_player;
        self.current_player = blocked.opponent();
        if !self.has_legal_move(self.current_player) {
            debug!("both players blocked");
            self.finish();
            return None;
        }

        debug!(?blocked, "pass");
        Some(blocked)
    }

    fn finish(&mut self) {
        self.status = Status::Finished;
        self.winner = decide_winner(&self.board);
        let (black, white) = self.counts();
        debug!(black, white, winner = ?self.winner, "game finished");
    }
}
