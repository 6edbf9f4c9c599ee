use super::{PlayerIndex, Position, WIN_LENGTH};

/// Where a piece landed and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerIndex,
}

/// Why a drop left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotStarted,
    GameOver,
    ColumnFull,
}

/// Result of a single drop, for the front-end to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No board change.
    Ignored(IgnoreReason),
    /// Piece placed; the game goes on with `next_player`.
    Placed {
        placement: Placement,
        next_player: PlayerIndex,
    },
    /// Piece placed and it completed a line for its player.
    PlacedAndWon {
        placement: Placement,
        message: String,
        line: [Position; WIN_LENGTH],
    },
    /// Piece placed into the last free cell without a winner.
    PlacedAndTied {
        placement: Placement,
        message: String,
    },
}

impl DropOutcome {
    pub fn placement(&self) -> Option<Placement> {
        match self {
            DropOutcome::Ignored(_) => None,
            DropOutcome::Placed { placement, .. }
            | DropOutcome::PlacedAndWon { placement, .. }
            | DropOutcome::PlacedAndTied { placement, .. } => Some(*placement),
        }
    }

    /// True for the win and tie results.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DropOutcome::PlacedAndWon { .. } | DropOutcome::PlacedAndTied { .. }
        )
    }

    /// The message to surface when the game ended.
    pub fn message(&self) -> Option<&str> {
        match self {
            DropOutcome::PlacedAndWon { message, .. }
            | DropOutcome::PlacedAndTied { message, .. } => Some(message),
            _ => None,
        }
    }
}
