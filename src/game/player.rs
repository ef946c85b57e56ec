pub const HOLES_PER_SIDE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// This player's holes in play order (ascending pit index).
    pub fn holes(self) -> [usize; HOLES_PER_SIDE] {
        match self {
            Player::A => [1, 2, 3, 4, 5, 6],
            Player::B => [8, 9, 10, 11, 12, 13],
        }
    }

    /// Index of this player's store.
    pub fn store(self) -> usize {
        match self {
            Player::A => 7,
            Player::B => 0,
        }
    }

    /// Whether `pit` is one of this player's holes (stores never count).
    pub fn owns_hole(self, pit: usize) -> bool {
        match self {
            Player::A => (1..=6).contains(&pit),
            Player::B => (8..=13).contains(&pit),
        }
    }

    /// The opponent hole at the same position in play order, used for
    /// captures. The two hole lists are parallel ordered sequences, so
    /// the bijection is A's hole h <-> B's hole h + 7.
    ///
    /// Callers must pass one of this player's own holes.
    pub fn mirror_hole(self, pit: usize) -> usize {
        debug_assert!(self.owns_hole(pit));
        match self {
            Player::A => pit + 7,
            Player::B => pit - 7,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}
