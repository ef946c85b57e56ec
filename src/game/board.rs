use super::player::Player;

pub const SLOTS: usize = 14;
pub const INITIAL_BEADS: u8 = 4;
pub const TOTAL_BEADS: u16 = 48;

/// The 14-slot bead array. Slot 0 is Player B's store, slot 7 is Player
/// A's store, slots 1-6 are A's holes, slots 8-13 are B's holes. Beads
/// are only ever moved between slots, so the total stays at 48.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    beads: [u8; SLOTS],
}

/// How a sow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SowResult {
    /// The last bead landed exactly on the sower's own store.
    pub ended_on_own_store: bool,
    /// `Some(n)` when the sow ended via a capture, with `n` beads taken
    /// from the mirror hole (`n` is 0 when the mirror was empty; the
    /// landing bead is banked either way).
    pub capture: Option<u8>,
}

impl Board {
    /// Create the starting board: four beads in every hole, empty stores.
    pub fn new() -> Self {
        let mut beads = [INITIAL_BEADS; SLOTS];
        beads[Player::A.store()] = 0;
        beads[Player::B.store()] = 0;
        Board { beads }
    }

    /// Build a board from raw bead counts.
    pub fn from_beads(beads: [u8; SLOTS]) -> Self {
        Board { beads }
    }

    /// Bead count at a pit.
    pub fn get(&self, pit: usize) -> u8 {
        self.beads[pit]
    }

    /// Read-only snapshot of all 14 pits, for rendering.
    pub fn beads(&self) -> &[u8; SLOTS] {
        &self.beads
    }

    /// Total beads on the board.
    pub fn total(&self) -> u16 {
        self.beads.iter().map(|&b| u16::from(b)).sum()
    }

    /// Whether all six of a player's holes are empty.
    pub fn side_is_empty(&self, player: Player) -> bool {
        player.holes().iter().all(|&h| self.beads[h] == 0)
    }

    /// Pick up every bead in `pit` and sow them forward one per pit,
    /// skipping the opponent's store. The caller must have validated the
    /// move: `pit` is one of `player`'s holes and is nonempty.
    ///
    /// A last bead landing in an empty own hole captures: it goes to the
    /// sower's store together with the entire contents of the mirror
    /// hole, and the sow ends there.
    pub fn sow(&mut self, player: Player, pit: usize) -> SowResult {
        debug_assert!(player.owns_hole(pit));
        debug_assert!(self.beads[pit] > 0);

        let opponent_store = player.other().store();
        let mut remaining = std::mem::take(&mut self.beads[pit]);
        let mut index = pit;

        while remaining > 0 {
            index = (index + 1) % SLOTS;
            if index == opponent_store {
                // Skipped pits do not consume a bead.
                continue;
            }
            if remaining == 1 && player.owns_hole(index) && self.beads[index] == 0 {
                let mirror = player.mirror_hole(index);
                let captured = std::mem::take(&mut self.beads[mirror]);
                self.beads[player.store()] += 1 + captured;
                return SowResult {
                    ended_on_own_store: false,
                    capture: Some(captured),
                };
            }
            self.beads[index] += 1;
            remaining -= 1;
        }

        SowResult {
            ended_on_own_store: index == player.store(),
            capture: None,
        }
    }

    /// True once either player's row of holes is entirely empty.
    pub fn is_game_over(&self) -> bool {
        self.side_is_empty(Player::A) || self.side_is_empty(Player::B)
    }

    /// Sweep every remaining hole bead into its owning side's store.
    /// Attribution is by pit index, so the result is the same no matter
    /// whose turn flag is active when the game ends.
    pub fn tally(&mut self) {
        for player in [Player::A, Player::B] {
            let store = player.store();
            for hole in player.holes() {
                self.beads[store] += std::mem::take(&mut self.beads[hole]);
            }
        }
    }

    /// Compare the two store totals. Meaningful once the board has been
    /// tallied; equal stores mean a draw.
    pub fn winner(&self) -> Option<Player> {
        use std::cmp::Ordering;
        let a = self.beads[Player::A.store()];
        let b = self.beads[Player::B.store()];
        match a.cmp(&b) {
            Ordering::Greater => Some(Player::A),
            Ordering::Less => Some(Player::B),
            Ordering::Equal => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
