use std::{io, path::PathBuf, process::exit, time::SystemTime};

use clap::{Parser, Subcommand};
use draughts::{console::ConsoleInterface, game::GameMode, simulate};
use log::{LevelFilter, error, info};

build_info::build_info!(fn build_info);

#[derive(Parser, Debug)]
#[command(version, about = "English draughts without kings, against a friend or the computer")]
struct Cli {
    /// PvP for two human players, PvC to play side x against the computer, CvC to watch the computer play itself
    #[arg(long, default_value = "PvC")]
    mode: GameMode,

    /// Seed for the computer's random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play computer against computer and report the results
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logger(cli.log_level, cli.log_file.as_ref()) {
        eprintln!("Failed to set up logging: {e}");
        exit(1);
    }
    log_panics::init();

    let info = build_info();
    info!("{} {} starting in {} mode", info.crate_info.name, info.crate_info.version, cli.mode);

    match cli.command {
        Some(Command::Simulate { games }) => {
            let stats = simulate::simulate(games, cli.seed);
            println!("{stats:#?}");
        }
        None => {
            let mut console = ConsoleInterface::with_mode(cli.mode, cli.seed, io::stdin().lock(), io::stdout());
            match console.run() {
                Ok(winner) => info!("Game over, winner {winner:?}. Final position:\n{}", console.game().board()),
                Err(e) => {
                    error!("Console failed: {e}");
                    exit(1);
                }
            }
        }
    }
}

fn setup_logger(level: LevelFilter, log_file: Option<&PathBuf>) -> Result<(), fern::InitError> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match log_file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch.chain(io::stderr()),
    };

    dispatch.apply()?;
    Ok(())
}
