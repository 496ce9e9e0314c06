use crate::error::OutOfBounds;
use crate::{BOARD_SIZE, NUM_SQUARES};

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value this player's disks occupy.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A validated board coordinate. `x` is the column, `y` the row.
///
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Result<Self, OutOfBounds> {
        if in_bounds(x, y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(OutOfBounds { x, y })
        }
    }

    /// Converts a row-major index (`y * 8 + x`). Returns `None` past the last square.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < NUM_SQUARES).then(|| Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }
}

/// Reversi board state represented by two bitboards, one per color.
///
/// A square is set in at most one of the two masks, so every cell holds
/// exactly one [`Cell`] value. The board knows nothing about the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the starting position:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn initial() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from row-major cells.
    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        let mut board = Self::new();
        for (index, cell) in cells.into_iter().enumerate() {
            board.put_index(index, cell);
        }
        board
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Cell, OutOfBounds> {
        Position::new(x, y).map(|pos| self.at(pos))
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), OutOfBounds> {
        let pos = Position::new(x, y)?;
        self.put(pos, cell);
        Ok(())
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.at_index(pos.index())
    }

    pub fn put(&mut self, pos: Position, cell: Cell) {
        self.put_index(pos.index(), cell);
    }

    /// Number of disks of the given color.
    pub fn count_disks(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black.count_ones() as u8,
            Player::White => self.white.count_ones() as u8,
        }
    }

    /// Number of non-empty squares.
    pub fn occupied(&self) -> u8 {
        (self.black | self.white).count_ones() as u8
    }

    pub fn is_full(&self) -> bool {
        self.occupied() as usize == NUM_SQUARES
    }

    /// Returns a copy with every Black disk turned White and vice versa.
    pub fn inverted(&self) -> Self {
        Self {
            black: self.white,
            white: self.black,
        }
    }

    /// Converts board to row-major cells.
    pub fn to_array(&self) -> [Cell; NUM_SQUARES] {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = self.at_index(index);
        }
        cells
    }

    pub(crate) fn at_index(&self, index: usize) -> Cell {
        let square = bit(index);
        if (self.black & square) != 0 {
            Cell::Black
        } else if (self.white & square) != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    fn put_index(&mut self, index: usize, cell: Cell) {
        let square = bit(index);
        self.black &= !square;
        self.white &= !square;
        match cell {
            Cell::Empty => {}
            Cell::Black => self.black |= square,
            Cell::White => self.white |= square,
        }
    }
}

fn bit(index: usize) -> u64 {
    if index < NUM_SQUARES { 1u64 << index } else { 0 }
}

pub(crate) fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}
