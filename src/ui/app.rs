use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player, HOLES_PER_SIDE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    /// Position within the current player's row, 0..6 in play order.
    selected: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            game_state: GameState::initial(),
            selected: 0,
            should_quit: false,
            message: None,
        }
    }

    fn selected_pit(&self) -> usize {
        self.game_state.current_player().holes()[self.selected]
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let poll_interval = Duration::from_millis(self.config.ui.poll_interval_ms);
        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.move_cursor(-1);
            }
            KeyCode::Right => {
                self.move_cursor(1);
            }
            KeyCode::Char(c @ '1'..='6') => {
                self.selected = (c as u8 - b'1') as usize;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.sow_selected();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Move the cursor one hole left or right on screen. B's row renders
    /// right to left, so the arrows are flipped on B's turn to keep them
    /// visual.
    fn move_cursor(&mut self, delta: i32) {
        let delta = match self.game_state.current_player() {
            Player::A => delta,
            Player::B => -delta,
        };
        let pos = self.selected as i32 + delta;
        if (0..HOLES_PER_SIDE as i32).contains(&pos) {
            self.selected = pos as usize;
        }
    }

    /// Sow from the selected hole
    fn sow_selected(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let pit = self.selected_pit();
        match self.game_state.apply_move_mut(pit) {
            Ok(outcome) => {
                // The row under the cursor may have changed hands.
                self.selected = 0;
                if let Some(result) = self.game_state.outcome() {
                    self.message = Some(match result {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", self.config.player_name(player))
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                } else if self.game_state.last_move_captured() {
                    self.message = Some(format!("Captured {} beads!", outcome.captured_beads));
                } else if outcome.grants_extra_turn {
                    self.message = Some("Landed on your store: go again!".to_string());
                }
            }
            Err(MoveError::EmptyHole) => {
                self.message = Some("That hole is empty!".to_string());
            }
            Err(MoveError::NotYourHole) => {
                self.message = Some("Not your hole!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_pit(),
            &self.config,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
