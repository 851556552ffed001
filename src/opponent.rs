use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    board::{Board, Side},
    moves::Move,
};

/// Greedy one-ply opponent: takes the first capture it finds, otherwise steps a random piece.
pub struct HeuristicOpponent<R: Rng = StdRng> {
    side: Side,
    rng: R,
}

impl HeuristicOpponent<StdRng> {
    /// Seeds from the OS when no seed is given.
    pub fn from_seed(side: Side, seed: Option<u64>) -> HeuristicOpponent<StdRng> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        HeuristicOpponent::new(side, rng)
    }
}

impl<R: Rng> HeuristicOpponent<R> {
    pub fn new(side: Side, rng: R) -> HeuristicOpponent<R> {
        HeuristicOpponent { side, rng }
    }

    /// Picks a move for this opponent's side, or `None` when none of its pieces can move.
    pub fn take_turn(&mut self, board: &Board) -> Option<Move> {
        let movable_pieces = board.movable_pieces(self.side);
        if movable_pieces.is_empty() {
            warn!("{:?} has no movable pieces", self.side);
            return None;
        }

        for piece in &movable_pieces {
            if let Some(landing) = board.jump_landings(self.side, *piece).first() {
                debug!("{:?} found a capture", self.side);
                return Some(Move::new(*piece, *landing));
            }
        }

        let piece = movable_pieces[self.rng.gen_range(0..movable_pieces.len())];
        // Forward-right is examined before forward-left
        let destination = board.step_destinations(self.side, piece).next()?;

        Some(Move::new(piece, destination))
    }
}

#[cfg(test)]
mod opponent_tests {
    use crate::board::Square;

    use super::*;

    #[test]
    pub fn prefers_capture_over_step() {
        let board = Board::from_layout("8/8/1o6/8/8/3o4/4x3/8").unwrap();
        let mut opponent = HeuristicOpponent::from_seed(Side::B, Some(7));

        for _ in 0..20 {
            let m = opponent.take_turn(&board).unwrap();
            assert_eq!(Move::new(Square::new(5, 3), Square::new(7, 5)), m);
        }
    }

    #[test]
    pub fn capture_uses_first_landing() {
        let board = Board::from_layout("8/8/8/8/3o4/2x1x3/8/8").unwrap();
        let mut opponent = HeuristicOpponent::from_seed(Side::B, Some(1));

        let m = opponent.take_turn(&board).unwrap();

        assert_eq!(Move::new(Square::new(4, 3), Square::new(6, 5)), m);
    }

    #[test]
    pub fn random_fallback_is_a_legal_step() {
        let board = Board::default();
        let mut opponent = HeuristicOpponent::from_seed(Side::B, Some(42));

        for _ in 0..50 {
            let m = opponent.take_turn(&board).unwrap();
            assert!(!m.is_jump());
            assert!(board.is_legal_move(Side::B, &m), "{m} is not legal");
        }
    }

    #[test]
    pub fn same_seed_gives_same_moves() {
        let board = Board::default();
        let mut first = HeuristicOpponent::from_seed(Side::B, Some(1234));
        let mut second = HeuristicOpponent::from_seed(Side::B, Some(1234));

        for _ in 0..10 {
            assert_eq!(first.take_turn(&board), second.take_turn(&board));
        }
    }

    #[test]
    pub fn prefers_forward_right_then_left() {
        // Only piece is on the right edge so forward-right is off the board
        let board = Board::from_layout("8/7o/8/8/8/8/8/8").unwrap();
        let mut opponent = HeuristicOpponent::from_seed(Side::B, Some(3));
        assert_eq!(
            Some(Move::new(Square::new(1, 7), Square::new(2, 6))),
            opponent.take_turn(&board)
        );

        let board = Board::from_layout("8/3o4/8/8/8/8/8/8").unwrap();
        assert_eq!(
            Some(Move::new(Square::new(1, 3), Square::new(2, 4))),
            opponent.take_turn(&board)
        );
    }

    #[test]
    pub fn works_for_side_a() {
        let board = Board::default();
        let mut opponent = HeuristicOpponent::from_seed(Side::A, Some(9));

        let m = opponent.take_turn(&board).unwrap();

        assert_eq!(5, m.from.row);
        assert_eq!(4, m.to.row);
    }

    #[test]
    pub fn nothing_to_move() {
        let board = Board::from_layout("8/8/8/8/8/8/8/o7").unwrap();
        let mut opponent = HeuristicOpponent::from_seed(Side::B, None);

        assert_eq!(None, opponent.take_turn(&board));
    }
}
