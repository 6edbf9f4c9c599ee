/// Seat of a player: the first player always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerIndex {
    First,
    Second,
}

impl PlayerIndex {
    /// Get the other seat
    pub fn other(self) -> PlayerIndex {
        match self {
            PlayerIndex::First => PlayerIndex::Second,
            PlayerIndex::Second => PlayerIndex::First,
        }
    }

    /// Numeric id, 0 or 1
    pub fn index(self) -> usize {
        match self {
            PlayerIndex::First => 0,
            PlayerIndex::Second => 1,
        }
    }
}

/// A participant in one game. The color is an opaque display label supplied
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    index: PlayerIndex,
    color: String,
}

impl Player {
    pub fn new(index: PlayerIndex, color: impl Into<String>) -> Self {
        Player {
            index,
            color: color.into(),
        }
    }

    pub fn index(&self) -> PlayerIndex {
        self.index
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerIndex::First.other(), PlayerIndex::Second);
        assert_eq!(PlayerIndex::Second.other(), PlayerIndex::First);
    }

    #[test]
    fn test_player_index() {
        assert_eq!(PlayerIndex::First.index(), 0);
        assert_eq!(PlayerIndex::Second.index(), 1);
    }

    #[test]
    fn test_player_keeps_color_verbatim() {
        let player = Player::new(PlayerIndex::Second, "#ff00ff");
        assert_eq!(player.index(), PlayerIndex::Second);
        assert_eq!(player.color(), "#ff00ff");
    }
}
