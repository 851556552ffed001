use std::{fmt::Display, str::FromStr};

use log::{debug, info, trace};

use crate::{
    board::{Board, Side, Square},
    error::{ConfigError, MoveError},
    move_generator::JumpLandings,
    moves::{Move, square_to_pos_str},
    player::{Controller, Player},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    PlayerVsPlayer,
    /// Side B is played by the heuristic opponent
    PlayerVsComputer,
    /// Both sides are played by heuristic opponents
    ComputerVsComputer,
}

impl GameMode {
    pub fn controller(self, side: Side) -> Controller {
        match (self, side) {
            (GameMode::PlayerVsComputer, Side::B) | (GameMode::ComputerVsComputer, _) => Controller::Heuristic,
            _ => Controller::Human,
        }
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "pvc" => Ok(GameMode::PlayerVsComputer),
            "cvc" => Ok(GameMode::ComputerVsComputer),
            _ => Err(ConfigError::UnknownMode(String::from(s))),
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "PvP"),
            GameMode::PlayerVsComputer => write!(f, "PvC"),
            GameMode::ComputerVsComputer => write!(f, "CvC"),
        }
    }
}

/// A jump that landed where two further jumps are available. The side to move has to pick one
/// before anything else can happen this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingContinuation {
    piece: Square,
    landings: JumpLandings,
    options_text: String,
}

impl PendingContinuation {
    fn new(piece: Square, landings: JumpLandings) -> PendingContinuation {
        let options_text = landings
            .iter()
            .enumerate()
            .map(|(i, landing)| format!("Option {}: {}\n", i + 1, square_to_pos_str(*landing)))
            .collect();

        PendingContinuation {
            piece,
            landings,
            options_text,
        }
    }

    /// Where the jumping piece currently stands
    pub fn piece(&self) -> Square {
        self.piece
    }

    pub fn landings(&self) -> &[Square] {
        self.landings.as_slice()
    }

    /// One "Option N: <square>" line per landing, numbered from 1.
    pub fn options_text(&self) -> &str {
        &self.options_text
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: Side,
    pending: Option<PendingContinuation>,
}

impl Game {
    pub fn new(mode: GameMode) -> Game {
        Game::from_board(Board::default(), mode)
    }

    /// Starts from an arbitrary position with side A to move. Piece counts are taken from the board.
    pub fn from_board(board: Board, mode: GameMode) -> Game {
        let players = [Side::A, Side::B]
            .map(|side| Player::with_piece_count(side, mode.controller(side), board.count(side)));

        Game {
            board,
            players,
            current: Side::A,
            pending: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn pending_continuation(&self) -> Option<&PendingContinuation> {
        self.pending.as_ref()
    }

    /// True while the side to move still owes a continuation choice.
    pub fn go_again(&self) -> bool {
        self.pending.is_some()
    }

    /// Plays a move such as "3a-4b" for the side to move.
    ///
    /// A jump that lands where exactly one further jump exists keeps jumping on its own. Landing
    /// where two exist leaves a [PendingContinuation] for [Game::select_double_option].
    pub fn apply_move(&mut self, move_text: &str) -> Result<(), MoveError> {
        if self.pending.is_some() {
            debug!("Rejected move '{move_text}' while a continuation is pending");
            return Err(MoveError::ContinuationPending);
        }

        let r#move = Move::from_move_text(move_text)?;
        if !self.board.is_legal_move(self.current, &r#move) {
            debug!("Move '{move_text}' is well formed but illegal for {:?}", self.current);
            trace!("{:?}", self.board);
            return Err(MoveError::InvalidMove(String::from(move_text)));
        }

        info!("{:?} plays {move_text}", self.current);
        self.board.relocate_piece(self.current, r#move.from, r#move.to);

        if r#move.is_jump() {
            self.jump(r#move.from, r#move.to);
            self.continue_jumps(r#move.to);
        }

        trace!("{:?}", self.board);
        Ok(())
    }

    /// Finishes the pending continuation with the 1-based `selection`.
    ///
    /// Unlike the jump made through [Game::apply_move], the landing square is not checked for yet
    /// another jump here. Whether it should be is an open rules question, so only the one branch
    /// point is resolved.
    pub fn select_double_option(&mut self, selection: usize) -> Result<(), MoveError> {
        let Some(pending) = &self.pending else {
            return Err(MoveError::SelectionOutOfRange { selection, options: 0 });
        };

        let options = pending.landings.len();
        if selection == 0 || selection > options {
            debug!("Continuation selection {selection} is outside 1..={options}");
            return Err(MoveError::SelectionOutOfRange { selection, options });
        }

        let from = pending.piece;
        let to = pending.landings[selection - 1];

        info!(
            "{:?} continues {}-{}",
            self.current,
            square_to_pos_str(from),
            square_to_pos_str(to)
        );
        self.board.relocate_piece(self.current, from, to);
        self.jump(from, to);
        self.pending = None;

        trace!("{:?}", self.board);
        Ok(())
    }

    pub fn swap_turn(&mut self) -> Result<(), MoveError> {
        if self.pending.is_some() {
            return Err(MoveError::ContinuationPending);
        }

        self.current = self.current.other();
        debug!("Turn passes to {:?}", self.current);
        Ok(())
    }

    /// Whether the side to move has just won: its opponent has no pieces left or nothing it can move.
    pub fn check_win(&self) -> bool {
        let opponent = self.player(self.current.other());

        opponent.piece_count() == 0 || !self.board.can_move(opponent.side())
    }

    /// Removes the piece jumped over. The jumping piece must already stand on `to`.
    fn jump(&mut self, from: Square, to: Square) {
        let captured = self.board.remove_jumped_piece(self.current, from, to);
        self.players[self.current.other().index()].remove_piece();

        debug!(
            "{:?} captured {}, {} left",
            self.current,
            square_to_pos_str(captured),
            self.player(self.current.other()).piece_count()
        );
    }

    fn continue_jumps(&mut self, mut piece: Square) {
        loop {
            let landings = self.board.jump_landings(self.current, piece);

            match landings.len() {
                0 => return,
                1 => {
                    let landing = landings[0];
                    info!(
                        "{:?} jumps again {}-{}",
                        self.current,
                        square_to_pos_str(piece),
                        square_to_pos_str(landing)
                    );
                    self.board.relocate_piece(self.current, piece, landing);
                    self.jump(piece, landing);
                    piece = landing;
                }
                _ => {
                    debug!("{:?} must choose between {} continuations", self.current, landings.len());
                    self.pending = Some(PendingContinuation::new(piece, landings));
                    return;
                }
            }
        }
    }
}
