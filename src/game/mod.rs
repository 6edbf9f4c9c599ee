//! Core Connect Four game logic: board, players, turn state, and the engine
//! that drives a game and reports each drop as a [`DropOutcome`].

mod board;
mod engine;
mod outcome;
mod player;
mod state;

pub use board::{check_dimensions, Board, Cell, Position, WIN_LENGTH};
pub use engine::{GameEngine, Phase, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use outcome::{DropOutcome, IgnoreReason, Placement};
pub use player::{Player, PlayerIndex};
pub use state::{GameState, GameStatus};
