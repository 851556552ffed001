use std::time::Instant;

use log::{debug, error, info};
use num_format::{Locale, ToFormattedString};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    board::{STARTING_PIECE_COUNT, Side},
    game::{Game, GameMode},
    opponent::HeuristicOpponent,
    player::Controller,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    pub games: u64,
    /// Indexed by [Side::index]
    pub wins: [u64; 2],
    /// Games where a side could not produce a move before a win was detected
    pub aborted: u64,
    pub plies: u64,
    pub captures: u64,
}

/// Plays `games` heuristic-vs-heuristic games from the starting position.
pub fn simulate(games: u64, seed: Option<u64>) -> SimulationStats {
    let mut seeder = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut stats = SimulationStats::default();

    let start_time = Instant::now();
    for game_number in 0..games {
        let mut opponents = [Side::A, Side::B].map(|side| HeuristicOpponent::from_seed(side, Some(seeder.r#gen())));
        play_game(&mut opponents, &mut stats);
        debug!("Finished game {} of {games}", game_number + 1);
    }
    let elapsed = start_time.elapsed();

    info!(
        "{} games in {}. A wins: {}. B wins: {}. Plies: {}. Captures: {}",
        stats.games.to_formatted_string(&Locale::en),
        humantime::format_duration(elapsed),
        stats.wins[Side::A.index()].to_formatted_string(&Locale::en),
        stats.wins[Side::B.index()].to_formatted_string(&Locale::en),
        stats.plies.to_formatted_string(&Locale::en),
        stats.captures.to_formatted_string(&Locale::en)
    );

    stats
}

fn play_game(opponents: &mut [HeuristicOpponent; 2], stats: &mut SimulationStats) {
    let mut game = Game::new(GameMode::ComputerVsComputer);
    stats.games += 1;

    loop {
        let side = game.current_side();
        let next_move = match game.current_player().controller() {
            Controller::Heuristic => opponents[side.index()].take_turn(game.board()),
            Controller::Human => {
                error!("{side:?} is human controlled, nobody can play it in a simulation");
                None
            }
        };
        let Some(r#move) = next_move else {
            error!("{side:?} has no move but no win was detected");
            stats.aborted += 1;
            break;
        };

        if let Err(err) = game.apply_move(&r#move.move_text()) {
            error!("Heuristic move {} was rejected: {err}", r#move);
            stats.aborted += 1;
            break;
        }
        if game.go_again() && game.select_double_option(1).is_err() {
            stats.aborted += 1;
            break;
        }
        stats.plies += 1;

        if game.check_win() {
            stats.wins[side.index()] += 1;
            break;
        }

        if game.swap_turn().is_err() {
            stats.aborted += 1;
            break;
        }
    }

    stats.captures += [Side::A, Side::B]
        .iter()
        .map(|side| (STARTING_PIECE_COUNT - game.player(*side).piece_count()) as u64)
        .sum::<u64>();
}
