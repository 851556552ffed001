use tinyvec::ArrayVec;

use crate::board::{Board, Side, Square};

/// A piece can only ever jump forward-right or forward-left.
pub type JumpLandings = ArrayVec<[Square; 2]>;

/// Column deltas in the order they are examined. The order numbers the continuation options shown
/// to a player, so it must not change.
const COLUMN_DIRECTIONS: [i8; 2] = [1, -1];

impl Board {
    /// Landing squares of every jump available to the piece at `piece`, forward-right first.
    pub fn jump_landings(&self, side: Side, piece: Square) -> JumpLandings {
        let mut landings = JumpLandings::new();
        let forward = side.forward();

        for col_delta in COLUMN_DIRECTIONS {
            let adjacent = piece.offset(forward, col_delta);
            let landing = piece.offset(2 * forward, 2 * col_delta);

            // The adjacent square is always in bounds when the landing is
            if self.is_in_bounds(landing)
                && self.get(adjacent).owner() == Some(side.other())
                && self.is_empty(landing)
            {
                landings.push(landing);
            }
        }

        landings
    }

    pub fn can_move_here(&self, square: Square) -> bool {
        self.is_in_bounds(square) && self.is_empty(square)
    }

    /// Destinations of the single forward steps available to the piece, forward-right first.
    pub fn step_destinations(&self, side: Side, piece: Square) -> impl Iterator<Item = Square> + '_ {
        COLUMN_DIRECTIONS
            .into_iter()
            .map(move |col_delta| piece.offset(side.forward(), col_delta))
            .filter(move |s| self.can_move_here(*s))
    }

    pub fn piece_can_move(&self, side: Side, piece: Square) -> bool {
        self.step_destinations(side, piece).next().is_some() || !self.jump_landings(side, piece).is_empty()
    }

    /// Every square holding a piece of `side` that has at least one step or jump, in row-major order.
    pub fn movable_pieces(&self, side: Side) -> Vec<Square> {
        Square::all()
            .filter(|s| self.get(*s).owner() == Some(side) && self.piece_can_move(side, *s))
            .collect()
    }

    pub fn can_move(&self, side: Side) -> bool {
        Square::all().any(|s| self.get(s).owner() == Some(side) && self.piece_can_move(side, s))
    }
}

#[cfg(test)]
mod move_generator_tests {
    use super::*;

    #[test]
    pub fn no_jumps_from_starting_position() {
        let board = Board::default();

        for square in Square::all() {
            assert!(board.jump_landings(Side::A, square).is_empty() || board.get(square).owner() != Some(Side::A));
        }
    }

    #[test]
    pub fn two_landings_come_right_first() {
        let board = Board::from_layout("8/8/8/2o1o3/3x4/8/8/8").unwrap();
        let landings = board.jump_landings(Side::A, Square::new(4, 3));

        assert_eq!(&[Square::new(2, 5), Square::new(2, 1)], landings.as_slice());
    }

    #[test]
    pub fn blocked_landing_is_not_a_candidate() {
        let board = Board::from_layout("8/8/5o2/2o1o3/3x4/8/8/8").unwrap();
        let landings = board.jump_landings(Side::A, Square::new(4, 3));

        assert_eq!(&[Square::new(2, 1)], landings.as_slice());
    }

    #[test]
    pub fn landing_off_the_board_is_not_a_candidate() {
        let board = Board::from_layout("8/o7/1x6/8/8/8/8/8").unwrap();

        assert!(board.jump_landings(Side::A, Square::new(2, 1)).is_empty());
        assert!(board.piece_can_move(Side::A, Square::new(2, 1)));
    }

    #[test]
    pub fn side_b_jumps_toward_higher_rows() {
        let board = Board::from_layout("8/8/8/8/3o4/2x1x3/8/8").unwrap();
        let landings = board.jump_landings(Side::B, Square::new(4, 3));

        assert_eq!(&[Square::new(6, 5), Square::new(6, 1)], landings.as_slice());
        assert_eq!(&[Square::new(3, 4)], board.jump_landings(Side::A, Square::new(5, 2)).as_slice());
    }

    #[test]
    pub fn starting_position_movable_pieces() {
        let board = Board::default();

        let a: Vec<Square> = board.movable_pieces(Side::A);
        assert_eq!(4, a.len());
        assert!(a.iter().all(|s| s.row == 5));

        let b: Vec<Square> = board.movable_pieces(Side::B);
        assert_eq!(4, b.len());
        assert!(b.iter().all(|s| s.row == 2));
    }

    #[test]
    pub fn blocked_piece_can_still_jump() {
        // A at (4, 3): (3, 4) own piece, (3, 2) enemy with (2, 1) empty
        let board = Board::from_layout("8/8/8/2o1x3/3x4/8/8/8").unwrap();

        assert!(board.piece_can_move(Side::A, Square::new(4, 3)));
        assert_eq!(0, board.step_destinations(Side::A, Square::new(4, 3)).count());
    }

    #[test]
    pub fn left_jump_counts_even_when_right_neighbour_is_an_enemy() {
        // A at (7, 2). Right: enemy at (6, 3) but (5, 4) blocked. Left: enemy at (6, 1), (5, 0) empty.
        let board = Board::from_layout("8/8/8/8/8/4o3/1o1o4/2x5").unwrap();

        assert!(board.can_move(Side::A));
        assert_eq!(&[Square::new(5, 0)], board.jump_landings(Side::A, Square::new(7, 2)).as_slice());
    }

    #[test]
    pub fn piece_on_last_rank_cannot_move() {
        let board = Board::from_layout("x7/8/8/8/8/8/8/7o").unwrap();

        assert!(!board.can_move(Side::A));
        assert!(!board.can_move(Side::B));
        assert!(board.movable_pieces(Side::A).is_empty());
    }
}
