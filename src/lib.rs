//! # Mancala
//!
//! Two-player Mancala (Kalah variant) played in the terminal: 6 holes and
//! a store per side, 4 beads per hole. The core is a small game state
//! machine; a Ratatui UI renders the board and handles input.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, state machine
//! - [`ui`] — Terminal UI: board view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
