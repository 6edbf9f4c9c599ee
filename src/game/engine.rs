use tracing::{debug, info, instrument};

use super::{
    Board, DropOutcome, GameState, GameStatus, IgnoreReason, Placement, Player, PlayerIndex,
};
use crate::error::GameError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

const TIE_MESSAGE: &str = "Tie!";

/// Lifecycle of the engine, from construction through the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won(PlayerIndex),
    Tied,
}

/// Everything that belongs to one game; replaced as a unit on restart.
#[derive(Debug, Clone)]
struct Game {
    board: Board,
    players: [Player; 2],
    state: GameState,
}

/// Turn and placement state machine for a two-player game.
///
/// The engine is driven by a single caller: [`GameEngine::start`] begins (or
/// restarts) a game, and each [`GameEngine::drop_piece`] runs placement, win
/// detection, tie detection and the turn change to completion before
/// returning a [`DropOutcome`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    blank: Board,
    game: Option<Game>,
}

impl GameEngine {
    /// Create an engine for boards of the given size. No game is running
    /// until [`GameEngine::start`] is called.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        Ok(GameEngine {
            blank: Board::new(height, width)?,
            game: None,
        })
    }

    /// (height, width) of every board this engine creates.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.blank.height(), self.blank.width())
    }

    /// Start a fresh game, discarding any game in progress or finished.
    #[instrument(skip(self))]
    pub fn start(&mut self, first_color: &str, second_color: &str) {
        self.game = Some(Game {
            board: self.blank.clone(),
            players: [
                Player::new(PlayerIndex::First, first_color),
                Player::new(PlayerIndex::Second, second_color),
            ],
            state: GameState::initial(),
        });
        let (height, width) = self.dimensions();
        info!(height, width, "game started");
    }

    pub fn phase(&self) -> Phase {
        match self.game.as_ref().map(|g| g.state.status()) {
            None => Phase::NotStarted,
            Some(GameStatus::InProgress) => Phase::InProgress,
            Some(GameStatus::Won(player)) => Phase::Won(player),
            Some(GameStatus::Tied) => Phase::Tied,
        }
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.game.as_ref().map(|g| g.state.status())
    }

    /// Whose turn it is, if a game has been started.
    pub fn current_player(&self) -> Option<PlayerIndex> {
        self.game.as_ref().map(|g| g.state.current_player())
    }

    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|g| &g.board)
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.game.as_ref().map(|g| &g.players)
    }

    pub fn player(&self, index: PlayerIndex) -> Option<&Player> {
        self.players().map(|players| &players[index.index()])
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns `Ignored` when no game is running, the game is over, or the
    /// column is full. An out-of-range column is an error and leaves the
    /// engine untouched.
    #[instrument(skip(self))]
    pub fn drop_piece(&mut self, column: isize) -> Result<DropOutcome, GameError> {
        let Some(game) = self.game.as_mut() else {
            return Ok(DropOutcome::Ignored(IgnoreReason::NotStarted));
        };
        if game.state.is_terminal() {
            return Ok(DropOutcome::Ignored(IgnoreReason::GameOver));
        }

        let width = game.board.width();
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < width)
            .ok_or(GameError::InvalidColumn { column, width })?;

        let Some(row) = game.board.landing_row(col)? else {
            debug!(column = col, "column full, drop ignored");
            return Ok(DropOutcome::Ignored(IgnoreReason::ColumnFull));
        };

        let player = game.state.current_player();
        game.board.place(row, col, player)?;
        let placement = Placement {
            row,
            column: col,
            player,
        };
        debug!(row, column = col, player = player.index(), "piece placed");

        if let Some(line) = game.board.winning_line(player) {
            game.state.finish(GameStatus::Won(player));
            let message = format!("The {} player won!", game.players[player.index()].color());
            info!(player = player.index(), "{message}");
            return Ok(DropOutcome::PlacedAndWon {
                placement,
                message,
                line,
            });
        }

        if game.board.is_full() {
            game.state.finish(GameStatus::Tied);
            info!("board full, game tied");
            return Ok(DropOutcome::PlacedAndTied {
                placement,
                message: TIE_MESSAGE.to_string(),
            });
        }

        game.state.advance_turn();
        Ok(DropOutcome::Placed {
            placement,
            next_player: game.state.current_player(),
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine {
            blank: Board::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
                .expect("default dimensions are positive"),
            game: None,
        }
    }
}
