use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{
    board::{BOARD_SIZE, Board, Cell, Side, Square},
    error::MoveError,
};

/// Rank digit, file letter, '-', rank digit, file letter. e.g. "3a-4b"
static MOVE_TEXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([1-8][a-h])-([1-8][a-h])$").unwrap());

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Parses text such as "3a-4b". Anything other than exactly that shape is an
    /// [MoveError::InvalidMove].
    pub fn from_move_text(text: &str) -> Result<Move, MoveError> {
        let Some(captures) = MOVE_TEXT_PATTERN.captures(text) else {
            debug!("Move text '{text}' is not of the form <rank><file>-<rank><file>");
            return Err(MoveError::InvalidMove(String::from(text)));
        };

        match (pos_str_to_square(&captures[1]), pos_str_to_square(&captures[2])) {
            (Some(from), Some(to)) => Ok(Move { from, to }),
            _ => Err(MoveError::InvalidMove(String::from(text))),
        }
    }

    pub fn move_text(&self) -> String {
        format!("{}-{}", square_to_pos_str(self.from), square_to_pos_str(self.to))
    }

    pub fn is_jump(&self) -> bool {
        (self.to.row - self.from.row).abs() > 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.move_text())
    }
}

fn rank_file_to_square(rank: u8, file: u8) -> Square {
    Square::new(BOARD_SIZE - (rank - b'0') as i8, (file - b'a') as i8)
}

/// Renders a square as rank digit then file letter, e.g. row 5 col 0 is "3a".
pub fn square_to_pos_str(square: Square) -> String {
    debug_assert!(square.is_in_bounds());
    format!("{}{}", BOARD_SIZE - square.row, (b'a' + square.col as u8) as char)
}

pub fn pos_str_to_square(pos: &str) -> Option<Square> {
    match pos.as_bytes() {
        [rank @ b'1'..=b'8', file @ b'a'..=b'h'] => Some(rank_file_to_square(*rank, *file)),
        _ => None,
    }
}

impl Board {
    pub fn is_legal_move(&self, side: Side, r#move: &Move) -> bool {
        let Move { from, to } = *r#move;

        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return false;
        }

        if self.get(from).owner() != Some(side) {
            return false;
        }

        if from == to || !self.is_empty(to) {
            return false;
        }

        let row_delta = to.row - from.row;
        let col_delta = to.col - from.col;

        // Holds for jumps too, there are no backward captures.
        if row_delta.signum() != side.forward() {
            return false;
        }

        if row_delta.abs() == 1 && col_delta.abs() == 1 {
            return true;
        }

        self.jump_landings(side, from).contains(&to)
    }

    /// Moves the piece without any capture. The origin is left empty.
    pub fn relocate_piece(&mut self, side: Side, from: Square, to: Square) {
        self.set(to, Cell::piece(side));
        self.set(from, Cell::Empty);
    }

    /// Clears the piece jumped over on the way from `from` to `to` and returns its square.
    ///
    /// The piece itself must already have been relocated; only the captured cell is touched here.
    pub fn remove_jumped_piece(&mut self, side: Side, from: Square, to: Square) -> Square {
        let col_step = if to.col > from.col { 1 } else { -1 };
        let captured = from.offset(side.forward(), col_step);

        debug_assert_eq!(self.get(captured).owner(), Some(side.other()));
        self.set(captured, Cell::Empty);

        captured
    }
}
