use crate::board::Side;

/// Who decides the moves for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    Human,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    controller: Controller,
    piece_count: u8,
}

impl Player {
    pub fn with_piece_count(side: Side, controller: Controller, piece_count: u8) -> Player {
        Player {
            side,
            controller,
            piece_count,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn icon(&self) -> char {
        self.side.icon()
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn piece_count(&self) -> u8 {
        self.piece_count
    }

    pub fn remove_piece(&mut self) {
        debug_assert!(self.piece_count > 0, "removing a piece from {:?} which has none left", self.side);
        self.piece_count = self.piece_count.saturating_sub(1);
    }
}

#[cfg(test)]
mod player_tests {
    use crate::board::STARTING_PIECE_COUNT;

    use super::*;

    #[test]
    fn player_icon_follows_side() {
        let player = Player::with_piece_count(Side::A, Controller::Human, STARTING_PIECE_COUNT);

        assert_eq!(12, player.piece_count());
        assert_eq!('x', player.icon());
        assert_eq!('o', Player::with_piece_count(Side::B, Controller::Human, 1).icon());
    }

    #[test]
    fn remove_piece_counts_down() {
        let mut player = Player::with_piece_count(Side::B, Controller::Heuristic, 2);
        player.remove_piece();

        assert_eq!(1, player.piece_count());
        assert_eq!(Controller::Heuristic, player.controller());
    }

    #[test]
    fn other_side_is_symmetric() {
        assert_eq!(Side::B, Side::A.other());
        assert_eq!(Side::A, Side::B.other());
        assert_eq!(-Side::A.forward(), Side::B.forward());
    }
}
