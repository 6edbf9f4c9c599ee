use super::PlayerIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerIndex),
    Tied,
}

/// Turn order and status of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current_player: PlayerIndex,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            current_player: PlayerIndex::First,
            status: GameStatus::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerIndex {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Hand the turn to the other player. No-op once the game is over.
    pub fn advance_turn(&mut self) {
        if !self.is_terminal() {
            self.current_player = self.current_player.other();
        }
    }

    /// Move to a terminal status. Only the first transition out of
    /// `InProgress` takes effect.
    pub fn finish(&mut self, status: GameStatus) {
        if !self.is_terminal() {
            self.status = status;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), PlayerIndex::First);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_advance_turn_alternates() {
        let mut state = GameState::initial();
        state.advance_turn();
        assert_eq!(state.current_player(), PlayerIndex::Second);
        state.advance_turn();
        assert_eq!(state.current_player(), PlayerIndex::First);
    }

    #[test]
    fn test_status_transitions_once() {
        let mut state = GameState::initial();
        state.finish(GameStatus::Won(PlayerIndex::Second));
        state.finish(GameStatus::Tied);
        assert_eq!(state.status(), GameStatus::Won(PlayerIndex::Second));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_turn_frozen_after_finish() {
        let mut state = GameState::initial();
        state.finish(GameStatus::Tied);
        state.advance_turn();
        assert_eq!(state.current_player(), PlayerIndex::First);
    }
}
