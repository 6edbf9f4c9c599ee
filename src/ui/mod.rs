//! Terminal front-end: keyboard input becomes engine calls, and engine
//! outcomes become the board the player sees.

mod app;
mod board_view;
mod game_view;

pub use app::{parse_color, App};
pub use board_view::BoardView;
