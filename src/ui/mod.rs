//! Terminal UI: event loop and board view for playing Mancala.

mod app;
mod game_view;

pub use app::App;
