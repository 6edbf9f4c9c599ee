//! # Connect Four
//!
//! A two-player Connect Four engine on a board of any size, with a terminal
//! front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, turn state, engine
//! - [`ui`]: Terminal UI driven by engine outcomes
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
