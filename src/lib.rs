//! Rules engine for English draughts without kings: board state, move validation, forced
//! multi-jump resolution, turn handling, win detection and a greedy computer opponent.
//!
//! [game::Game] is the entry point for front ends. [console::ConsoleInterface] is the text front
//! end shipped with the binary.

pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod move_generator;
pub mod moves;
pub mod opponent;
pub mod player;
pub mod simulate;
