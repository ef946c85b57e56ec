use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NotYourHole,
    EmptyHole,
    GameOver,
}

/// What the immediately-preceding move did, for the caller's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The sow ended exactly on the mover's own store; the same player
    /// moves again.
    pub grants_extra_turn: bool,
    /// Beads banked by a capture on this move, landing bead included
    /// (0 when the move did not capture).
    pub captured_beads: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move_captured: bool,
    last_move_ended_on_own_store: bool,
    last_capture_ended_game: bool,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::A, // A starts
            last_move_captured: false,
            last_move_ended_on_own_store: false,
            last_capture_ended_game: false,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The last move captured a nonempty mirror hole.
    pub fn last_move_captured(&self) -> bool {
        self.last_move_captured
    }

    /// The last move's final bead landed on the mover's own store.
    pub fn last_move_ended_on_own_store(&self) -> bool {
        self.last_move_ended_on_own_store
    }

    /// The move that ended the game was a capture.
    pub fn last_capture_ended_game(&self) -> bool {
        self.last_capture_ended_game
    }

    /// A move is valid iff the pit is one of the player's own holes and
    /// holds at least one bead. Store indices, opponent holes, and
    /// out-of-range indices are all simply invalid.
    pub fn is_valid_move(&self, player: Player, pit: usize) -> bool {
        player.owns_hole(pit) && self.board.get(pit) > 0
    }

    /// Holes the current player may pick up from (empty once terminal).
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.current_player
            .holes()
            .into_iter()
            .filter(|&pit| self.board.get(pit) > 0)
            .collect()
    }

    /// Apply a move for the current player: sow, resolve captures and
    /// the extra-turn rule, and swap the turn unless the sow ended on
    /// the mover's own store. If the move leaves either row empty, the
    /// remaining beads are swept into the stores and the outcome is
    /// recorded.
    pub fn apply_move_mut(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.current_player.owns_hole(pit) {
            return Err(MoveError::NotYourHole);
        }
        if self.board.get(pit) == 0 {
            return Err(MoveError::EmptyHole);
        }

        let sow = self.board.sow(self.current_player, pit);
        self.last_move_ended_on_own_store = sow.ended_on_own_store;
        self.last_move_captured = matches!(sow.capture, Some(n) if n > 0);

        let over = self.board.is_game_over();
        self.last_capture_ended_game = over && sow.capture.is_some();

        if over {
            // Sweep attribution is by pit index, so it does not matter
            // whose turn flag is active when the game ends.
            self.board.tally();
            self.outcome = Some(match self.board.winner() {
                Some(player) => GameOutcome::Winner(player),
                None => GameOutcome::Draw,
            });
        } else if !sow.ended_on_own_store {
            self.current_player = self.current_player.other();
        }

        Ok(MoveOutcome {
            grants_extra_turn: sow.ended_on_own_store && !over,
            captured_beads: sow.capture.map_or(0, |n| n + 1),
        })
    }
}
