//! Directional capture resolution.

use tracing::instrument;

use crate::board::{Board, Cell, Player, Position, in_bounds};
use crate::error::OutOfBounds;
use crate::{BOARD_SIZE, DIRECTIONS, NUM_SQUARES};

/// Returns the opponent disks captured if `player` places at `(x, y)`.
///
/// Each of the eight directions is walked outward from the origin, collecting
/// opponent disks into a run. The run is kept only when it is closed by one of
/// `player`'s disks; reaching an empty square or the edge discards it. The
/// result is the union of all kept runs in ascending row-major order.
///
/// Whether the origin is empty is not checked here. An empty result means the
/// placement is illegal.
pub fn captures(
    board: &Board,
    x: i32,
    y: i32,
    player: Player,
) -> Result<Vec<Position>, OutOfBounds> {
    let origin = Position::new(x, y)?;
    Ok(mask_to_positions(capture_mask(board, origin, player)))
}

/// Whether `player` may place at `pos`: the square is empty and at least one
/// direction captures.
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    board.at(pos) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| run_in_direction(board, pos, player, dx, dy) != 0)
}

/// Every empty square where `player` captures at least one disk.
pub fn legal_positions(board: &Board, player: Player) -> Vec<Position> {
    (0..NUM_SQUARES)
        .filter_map(Position::from_index)
        .filter(|&pos| is_legal(board, pos, player))
        .collect()
}

/// Strictly more disks wins; equal counts are a draw (`None`).
#[instrument(level = "trace", skip(board), ret)]
pub fn decide_winner(board: &Board) -> Option<Player> {
    let black = board.count_disks(Player::Black);
    let white = board.count_disks(Player::White);
    if black > white {
        Some(Player::Black)
    } else if white > black {
        Some(Player::White)
    } else {
        None
    }
}

pub(crate) fn capture_mask(board: &Board, origin: Position, player: Player) -> u64 {
    DIRECTIONS
        .iter()
        .fold(0u64, |flips, &(dx, dy)| {
            flips | run_in_direction(board, origin, player, dx, dy)
        })
}

pub(crate) fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(mask.count_ones() as usize);

    while bits != 0 {
        let index = bits.trailing_zeros() as usize;
        out.extend(Position::from_index(index));
        bits &= bits - 1;
    }

    out
}

fn run_in_direction(board: &Board, origin: Position, player: Player, dx: i32, dy: i32) -> u64 {
    let me = player.cell();
    let opp = player.opponent().cell();

    let mut x = origin.x() as i32 + dx;
    let mut y = origin.y() as i32 + dy;
    let mut line = 0u64;

    while in_bounds(x, y) {
        let index = y as usize * BOARD_SIZE + x as usize;
        match board.at_index(index) {
            cell if cell == opp => line |= 1u64 << index,
            cell if cell == me => return line,
            _ => return 0,
        }

        x += dx;
        y += dy;
    }

    // Ran off the edge without closing the run.
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    fn board_with(black: &[(i32, i32)], white: &[(i32, i32)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in black {
            board.set(x, y, Cell::Black).unwrap();
        }
        for &(x, y) in white {
            board.set(x, y, Cell::White).unwrap();
        }
        board
    }

    #[test]
    fn t01_initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::initial();

        // d3, c4, f5, e6
        let expected = vec![pos(3, 2), pos(2, 3), pos(5, 4), pos(4, 5)];

        assert_eq!(legal_positions(&board, Player::Black), expected);
    }

    #[test]
    fn opening_move_captures_a_single_disk() {
        let board = Board::initial();

        assert_eq!(captures(&board, 3, 2, Player::Black), Ok(vec![pos(3, 3)]));
    }

    #[test]
    fn captures_in_all_eight_directions() {
        let mut white = Vec::new();
        let mut black = Vec::new();
        for (dx, dy) in DIRECTIONS {
            white.push((3 + dx, 3 + dy));
            black.push((3 + 2 * dx, 3 + 2 * dy));
        }
        let board = board_with(&black, &white);

        let got = captures(&board, 3, 3, Player::Black).unwrap();

        let mut expected: Vec<_> = white.iter().map(|&(x, y)| pos(x, y)).collect();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn long_run_is_captured_whole() {
        let white: Vec<_> = (1..7).map(|x| (x, 0)).collect();
        let board = board_with(&[(7, 0)], &white);

        let got = captures(&board, 0, 0, Player::Black).unwrap();

        assert_eq!(got.len(), 6);
        assert_eq!(got.first(), Some(&pos(1, 0)));
        assert_eq!(got.last(), Some(&pos(6, 0)));
    }

    #[test]
    fn run_ending_at_the_edge_is_discarded() {
        let white: Vec<_> = (1..8).map(|x| (x, 0)).collect();
        let board = board_with(&[], &white);

        assert_eq!(captures(&board, 0, 0, Player::Black), Ok(vec![]));
    }

    #[test]
    fn run_ending_at_an_empty_square_is_discarded() {
        // White run at (4,3),(5,3) then a gap at (6,3) and a black disk after it.
        let board = board_with(&[(7, 3)], &[(4, 3), (5, 3)]);

        assert_eq!(captures(&board, 3, 3, Player::Black), Ok(vec![]));
    }

    #[test]
    fn adjacent_own_disk_captures_nothing() {
        let board = board_with(&[(4, 3), (6, 3)], &[(5, 3)]);

        assert_eq!(captures(&board, 3, 3, Player::Black), Ok(vec![]));
    }

    #[test]
    fn closed_run_depends_on_who_moves() {
        let board = board_with(&[(3, 0)], &[(0, 0), (1, 0), (2, 0)]);

        // Black's own disk is the first step west.
        assert_eq!(captures(&board, 4, 0, Player::Black), Ok(vec![]));
        // For White the black disk is closed by (2,0).
        assert_eq!(captures(&board, 4, 0, Player::White), Ok(vec![pos(3, 0)]));
    }

    #[test]
    fn out_of_bounds_origin_is_an_error() {
        let board = Board::initial();

        assert_eq!(
            captures(&board, 8, 3, Player::Black),
            Err(OutOfBounds { x: 8, y: 3 })
        );
    }

    #[test]
    fn occupied_square_is_never_legal() {
        let board = Board::initial();

        assert!(!is_legal(&board, pos(3, 3), Player::Black));
    }

    #[test]
    fn winner_by_strict_majority_or_draw() {
        assert_eq!(decide_winner(&Board::initial()), None);
        assert_eq!(
            decide_winner(&board_with(&[(0, 0), (1, 0)], &[(2, 0)])),
            Some(Player::Black)
        );
        assert_eq!(
            decide_winner(&board_with(&[(0, 0)], &[(2, 0), (3, 3)])),
            Some(Player::White)
        );
        // Empty squares count for nobody.
        assert_eq!(decide_winner(&board_with(&[(0, 0)], &[])), Some(Player::Black));
    }
}
