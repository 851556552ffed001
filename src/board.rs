use std::fmt::{Debug, Display};

pub const BOARD_SIZE: i8 = 8;
pub const STARTING_PIECE_COUNT: u8 = 12;

pub static STARTING_LAYOUT: &str = "_o_o_o_o/o_o_o_o_/_o_o_o_o/8/8/x_x_x_x_/_x_x_x_x/x_x_x_x_";

pub const ICON_EMPTY: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Moves first, toward row 0
    A,
    /// Moves toward row 7
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn icon(self) -> char {
        match self {
            Side::A => 'x',
            Side::B => 'o',
        }
    }

    /// Row delta of a single forward step. Pieces never move backwards.
    pub fn forward(self) -> i8 {
        match self {
            Side::A => -1,
            Side::B => 1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PieceA,
    PieceB,
}

impl Cell {
    pub fn piece(side: Side) -> Cell {
        match side {
            Side::A => Cell::PieceA,
            Side::B => Cell::PieceB,
        }
    }

    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::PieceA => Some(Side::A),
            Cell::PieceB => Some(Side::B),
        }
    }

    pub fn icon(self) -> char {
        match self.owner() {
            Some(side) => side.icon(),
            None => ICON_EMPTY,
        }
    }
}

/// A board coordinate. May lie outside the grid when derived from an offset, so check
/// [Square::is_in_bounds] before reading the board with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    pub fn offset(self, row_delta: i8, col_delta: i8) -> Square {
        Square::new(self.row + row_delta, self.col + col_delta)
    }

    pub fn is_in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Reads a layout of 8 '/'-separated rows, row 0 first. Each row is made of 'x', 'o' and '_'
    /// characters, with digits standing in for runs of empty cells the way FEN does.
    pub fn from_layout(layout: &str) -> Result<Board, String> {
        if !layout.is_ascii() {
            return Err(String::from("Expected layout to only contain ASCII characters"));
        }

        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(format!(
                "Expected layout to have {BOARD_SIZE} '/'-delimited rows but it had {}",
                rows.len()
            ));
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: i8 = 0;
            for c in row_str.chars() {
                if col >= BOARD_SIZE {
                    return Err(format!("Row {row} of the layout '{row_str}' is longer than {BOARD_SIZE} cells"));
                }

                match c {
                    '1'..='8' => {
                        col += (c as u8 - b'0') as i8;
                        continue;
                    }
                    '_' => {}
                    'x' => board.set(Square::new(row as i8, col), Cell::PieceA),
                    'o' => board.set(Square::new(row as i8, col), Cell::PieceB),
                    _ => {
                        return Err(format!(
                            "Encountered unexpected character {c} while processing row {row} of the layout"
                        ));
                    }
                }
                col += 1;
            }

            if col != BOARD_SIZE {
                return Err(format!("Row {row} of the layout '{row_str}' does not describe {BOARD_SIZE} cells"));
            }
        }

        Ok(board)
    }

    pub fn get(&self, square: Square) -> Cell {
        debug_assert!(square.is_in_bounds(), "read of out of bounds square {square:?}");
        self.cells[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, value: Cell) {
        debug_assert!(square.is_in_bounds(), "write of out of bounds square {square:?}");
        self.cells[square.row as usize][square.col as usize] = value;
    }

    pub fn is_in_bounds(&self, square: Square) -> bool {
        square.is_in_bounds()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    pub fn count(&self, side: Side) -> u8 {
        Square::all().filter(|s| self.get(*s).owner() == Some(side)).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        match Board::from_layout(STARTING_LAYOUT) {
            Ok(board) => board,
            Err(msg) => unreachable!("starting layout is malformed: {msg}"),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", BOARD_SIZE as usize - row)?;
            for cell in cells {
                write!(f, " {} |", cell.icon())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h ")
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pretty_rows = self
            .cells
            .iter()
            .map(|cells| cells.iter().map(|c| c.icon()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/");

        f.debug_struct("Board")
            .field("cells", &pretty_rows)
            .field("count_a", &self.count(Side::A))
            .field("count_b", &self.count(Side::B))
            .finish()
    }
}
