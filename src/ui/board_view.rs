use crate::game::{DropOutcome, PlayerIndex, Position};

/// What the screen shows, rebuilt purely from engine outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    height: usize,
    width: usize,
    pieces: Vec<Vec<Option<PlayerIndex>>>,
    current_player: Option<PlayerIndex>,
    highlight: Vec<Position>,
}

impl BoardView {
    pub fn new(height: usize, width: usize) -> Self {
        BoardView {
            height,
            width,
            pieces: vec![vec![None; width]; height],
            current_player: Some(PlayerIndex::First),
            highlight: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn piece(&self, row: usize, column: usize) -> Option<PlayerIndex> {
        self.pieces.get(row)?.get(column).copied().flatten()
    }

    /// Player to move, or `None` once the game has ended.
    pub fn current_player(&self) -> Option<PlayerIndex> {
        self.current_player
    }

    pub fn is_highlighted(&self, row: usize, column: usize) -> bool {
        self.highlight.contains(&Position::new(row, column))
    }

    /// Fold one outcome into the view.
    pub fn apply(&mut self, outcome: &DropOutcome) {
        if let Some(placement) = outcome.placement() {
            if let Some(cell) = self
                .pieces
                .get_mut(placement.row)
                .and_then(|r| r.get_mut(placement.column))
            {
                *cell = Some(placement.player);
            }
        }
        match outcome {
            DropOutcome::Ignored(_) => {}
            DropOutcome::Placed { next_player, .. } => self.current_player = Some(*next_player),
            DropOutcome::PlacedAndWon { line, .. } => {
                self.highlight = line.to_vec();
                self.current_player = None;
            }
            DropOutcome::PlacedAndTied { .. } => self.current_player = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{IgnoreReason, Placement};

    fn placement(row: usize, column: usize, player: PlayerIndex) -> Placement {
        Placement {
            row,
            column,
            player,
        }
    }

    #[test]
    fn test_placed_updates_piece_and_turn() {
        let mut view = BoardView::new(6, 7);
        view.apply(&DropOutcome::Placed {
            placement: placement(5, 2, PlayerIndex::First),
            next_player: PlayerIndex::Second,
        });
        assert_eq!(view.piece(5, 2), Some(PlayerIndex::First));
        assert_eq!(view.current_player(), Some(PlayerIndex::Second));
    }

    #[test]
    fn test_ignored_changes_nothing() {
        let mut view = BoardView::new(6, 7);
        let before = view.clone();
        view.apply(&DropOutcome::Ignored(IgnoreReason::ColumnFull));
        assert_eq!(view, before);
    }

    #[test]
    fn test_win_highlights_line() {
        let mut view = BoardView::new(6, 7);
        let line = [
            Position::new(5, 0),
            Position::new(5, 1),
            Position::new(5, 2),
            Position::new(5, 3),
        ];
        view.apply(&DropOutcome::PlacedAndWon {
            placement: placement(5, 3, PlayerIndex::First),
            message: "The red player won!".to_string(),
            line,
        });
        assert!(view.is_highlighted(5, 1));
        assert!(!view.is_highlighted(4, 1));
        assert_eq!(view.current_player(), None);
    }

    #[test]
    fn test_piece_off_board_is_none() {
        let view = BoardView::new(2, 2);
        assert_eq!(view.piece(9, 9), None);
    }
}
