use crate::config::PlayersConfig;
use crate::game::{DropOutcome, GameEngine, IgnoreReason, PlayerIndex};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, style::Color, Terminal};
use std::io;
use tracing::{debug, warn};

use super::board_view::BoardView;

pub struct App {
    engine: GameEngine,
    players: PlayersConfig,
    palette: [Color; 2],
    view: BoardView,
    selected_column: usize,
    should_quit: bool,
    frozen: bool,
    message: Option<String>,
}

impl App {
    /// Build the app and start the first game with the given player colors.
    pub fn new(engine: GameEngine, players: PlayersConfig) -> Self {
        let palette = [
            parse_color(&players.first_color, Color::Red),
            parse_color(&players.second_color, Color::Yellow),
        ];
        let (height, width) = engine.dimensions();
        let mut app = App {
            engine,
            players,
            palette,
            view: BoardView::new(height, width),
            selected_column: width / 2,
            should_quit: false,
            frozen: false,
            message: None,
        };
        app.restart();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // A finished game keeps its message until restart
        if !self.frozen {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.view.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.engine
            .start(&self.players.first_color, &self.players.second_color);
        let (height, width) = self.engine.dimensions();
        self.view = BoardView::new(height, width);
        self.selected_column = width / 2;
        self.frozen = false;
        debug!("front-end reset");
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.frozen {
            return;
        }

        match self.engine.drop_piece(self.selected_column as isize) {
            Ok(outcome) => {
                self.view.apply(&outcome);
                match &outcome {
                    DropOutcome::Ignored(IgnoreReason::ColumnFull) => {
                        self.message = Some("Column is full!".to_string());
                    }
                    DropOutcome::PlacedAndWon { message, .. }
                    | DropOutcome::PlacedAndTied { message, .. } => {
                        self.message = Some(format!("{message} Press 'r' to restart."));
                        self.frozen = true;
                    }
                    DropOutcome::Ignored(_) | DropOutcome::Placed { .. } => {}
                }
            }
            Err(err) => {
                warn!(error = %err, "drop rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    fn player_label(&self, player: PlayerIndex) -> &str {
        match player {
            PlayerIndex::First => &self.players.first_color,
            PlayerIndex::Second => &self.players.second_color,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let current = self
            .view
            .current_player()
            .map(|p| (self.player_label(p), self.palette[p.index()]));
        super::game_view::render(
            frame,
            &self.view,
            &self.palette,
            current,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

/// Map a player's color label to a terminal color, falling back when the
/// label is not a known color name or hex code.
pub fn parse_color(label: &str, fallback: Color) -> Color {
    label.trim().parse::<Color>().unwrap_or(fallback)
}
