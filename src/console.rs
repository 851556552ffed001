use std::io::{self, BufRead, Write};

use log::{error, info};

use crate::{
    board::Side,
    game::{Game, GameMode},
    opponent::HeuristicOpponent,
    player::Controller,
};

/// Text front end. Reads move commands line by line and prints the board between turns.
pub struct ConsoleInterface<R: BufRead, W: Write> {
    input: R,
    output: W,
    game: Game,
    /// Indexed by [Side::index]. Only consulted for heuristic-controlled sides.
    opponents: [HeuristicOpponent; 2],
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(game: Game, opponents: [HeuristicOpponent; 2], input: R, output: W) -> Self {
        Self {
            input,
            output,
            game,
            opponents,
        }
    }

    pub fn with_mode(mode: GameMode, seed: Option<u64>, input: R, output: W) -> Self {
        Self::new(Game::new(mode), seeded_opponents(seed), input, output)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until one side wins or the input runs out. Returns the winner, if any.
    pub fn run(&mut self) -> io::Result<Option<Side>> {
        loop {
            write!(self.output, "\n{}\n", self.game.board())?;

            let finished_turn = match self.game.current_player().controller() {
                Controller::Human => self.human_turn()?,
                Controller::Heuristic => self.computer_turn()?,
            };
            if !finished_turn {
                return Ok(None);
            }

            if self.game.check_win() {
                let winner = self.game.current_player();
                info!("{:?} wins", winner.side());
                if winner.controller() == Controller::Heuristic {
                    write!(self.output, "\n{}\n", self.game.board())?;
                }
                writeln!(self.output, "Player {} Wins!", winner.icon())?;
                let winner = winner.side();
                return Ok(Some(winner));
            }

            if let Err(err) = self.game.swap_turn() {
                error!("Could not pass the turn: {err}");
                return Err(io::Error::other(err));
            }
        }
    }

    /// Returns false when input ran out before the turn was complete.
    fn human_turn(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Player {} - your turn.", self.game.current_player().icon())?;
        writeln!(
            self.output,
            "Choose a cell position of piece to be moved and the new position. e.g., 3a-4b"
        )?;

        loop {
            write!(self.output, "Your Move: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match self.game.apply_move(&line) {
                Ok(()) => break,
                Err(_) => writeln!(self.output, "The move command given has an incorrect format, try again.")?,
            }
        }

        while let Some(pending) = self.game.pending_continuation() {
            let options_text = pending.options_text().to_owned();
            writeln!(
                self.output,
                "There are double jump options, please select one by typing it's respective number. i.e. 1"
            )?;
            write!(self.output, "{options_text}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let accepted = match line.parse::<usize>() {
                Ok(selection) => self.game.select_double_option(selection).is_ok(),
                Err(_) => false,
            };
            if !accepted {
                writeln!(self.output, "Selected double jump has an incorrect format, try again.")?;
            }
        }

        Ok(true)
    }

    fn computer_turn(&mut self) -> io::Result<bool> {
        let side = self.game.current_side();
        let Some(r#move) = self.opponents[side.index()].take_turn(self.game.board()) else {
            error!("Computer side {side:?} has no move to make");
            return Ok(false);
        };

        let move_text = r#move.move_text();
        if let Err(err) = self.game.apply_move(&move_text) {
            error!("Computer produced a move the rules rejected: {err}");
            return Err(io::Error::other(err));
        }

        // The computer always takes the first continuation
        if self.game.go_again() {
            if let Err(err) = self.game.select_double_option(1) {
                return Err(io::Error::other(err));
            }
        }

        writeln!(self.output, "Computer plays {move_text}")?;
        Ok(true)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}

/// Side B is seeded with `seed` itself, side A with `seed - 1`.
fn seeded_opponents(seed: Option<u64>) -> [HeuristicOpponent; 2] {
    [Side::A, Side::B].map(|side| {
        let side_seed = seed.map(|seed| seed.wrapping_add(side.index() as u64).wrapping_sub(1));
        HeuristicOpponent::from_seed(side, side_seed)
    })
}
