//! Core Mancala game logic: board representation, the two fixed player
//! descriptors, and the game state machine with sowing, capture, and
//! extra-turn rules.

mod board;
mod player;
mod state;

pub use board::{Board, SowResult, INITIAL_BEADS, SLOTS, TOTAL_BEADS};
pub use player::{Player, HOLES_PER_SIDE};
pub use state::{GameOutcome, GameState, MoveError, MoveOutcome};
