//! Application state and logic.

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use unbeatable_tictactoe::{GameConfig, GameSession, Move, winning_lines};

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Move,
    status_message: String,
    think_delay: Duration,
    computer_due: Option<Instant>,
}

impl App {
    /// Creates a new application and schedules the engine if it opens.
    pub fn new(config: &GameConfig) -> Self {
        let mut app = Self {
            session: GameSession::from_config(config),
            cursor: Move::ALL[4],
            status_message: String::new(),
            think_delay: config.think_delay(),
            computer_due: None,
        };
        app.after_move();
        app
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Cells of the winning line(s), empty while nobody has won.
    pub fn winning_cells(&self) -> Vec<Move> {
        match self.session.status().winner() {
            Some(winner) => winning_lines(self.session.board(), winner)
                .into_iter()
                .flatten()
                .collect(),
            None => Vec::new(),
        }
    }

    /// True once the engine's pause has elapsed.
    pub fn computer_due(&self, now: Instant) -> bool {
        self.computer_due.is_some_and(|due| now >= due)
    }

    /// Lets the engine play its scheduled move.
    pub fn play_computer_move(&mut self) {
        self.computer_due = None;
        match self.session.computer_move() {
            Ok(mv) => {
                debug!(%mv, "Computer moved");
                self.status_message = format!("Computer played {}.", mv.label());
                self.after_move();
            }
            Err(e) => {
                error!(error = %e, "Computer move failed");
                self.status_message = format!("Computer move failed: {}", e);
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(mv) = c
                    .to_digit(10)
                    .and_then(|digit| Move::from_keypad(digit as usize))
                {
                    self.cursor = mv;
                    self.place(mv);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.computer_due = None;
        self.status_message = "Game restarted.".to_string();
        self.after_move();
    }

    fn place(&mut self, mv: Move) {
        match self.session.apply_human_move(mv.row(), mv.col()) {
            Ok(mv) => {
                self.status_message = format!("You played {}.", mv.label());
                self.after_move();
            }
            Err(e) => {
                debug!(error = %e, "Human move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    fn after_move(&mut self) {
        let status = self.session.status();
        if status.is_terminal() {
            self.status_message = format!(
                "{} {} Press 'r' to restart or 'q' to quit.",
                self.status_message, status
            );
        } else if self.session.is_computer_turn() {
            self.computer_due = Some(Instant::now() + self.think_delay);
            self.status_message = format!("{} Computer is thinking...", self.status_message);
        } else {
            self.status_message = format!("{} Your move ({}).", self.status_message, self.session.human());
        }
        self.status_message = self.status_message.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_tictactoe::{Cell, GameStatus, Player};

    fn app(first: Player) -> App {
        App::new(&GameConfig::new(Player::X, first, 0))
    }

    #[test]
    fn test_engine_opens_after_delay() {
        let mut app = app(Player::O);
        assert!(app.status_message().contains("thinking"));
        assert!(app.computer_due(Instant::now()));

        app.play_computer_move();
        assert_eq!(app.session().board().get(Move::ALL[0]), Cell::O);
        assert!(!app.computer_due(Instant::now()));
        assert!(app.status_message().contains("Your move"));
    }

    #[test]
    fn test_digit_places_and_schedules_reply() {
        let mut app = app(Player::X);
        assert_eq!(app.handle_key(KeyCode::Char('5')), Control::Continue);
        assert_eq!(app.session().board().get(Move::ALL[4]), Cell::X);
        assert_eq!(app.cursor(), Move::ALL[4]);
        assert!(app.computer_due(Instant::now()));
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut app = app(Player::O);
        app.play_computer_move();
        app.handle_key(KeyCode::Char('1'));
        assert!(app.status_message().contains("already occupied"));
        assert_eq!(app.session().history().len(), 1);
        assert!(!app.computer_due(Instant::now()));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app(Player::X);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().board().get(Move::ALL[0]), Cell::X);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app(Player::X);
        app.handle_key(KeyCode::Char('9'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.session().history().is_empty());
        assert_eq!(app.session().status(), GameStatus::InProgress);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }

    #[test]
    fn test_full_game_highlights_nothing_or_engine_line() {
        let mut app = app(Player::O);
        for key in ['1', '2', '3', '4', '5', '6', '7', '8', '9'] {
            while app.computer_due(Instant::now()) {
                app.play_computer_move();
            }
            app.handle_key(KeyCode::Char(key));
        }
        while app.computer_due(Instant::now()) {
            app.play_computer_move();
        }
        let status = app.session().status();
        assert!(status.is_terminal());
        assert_ne!(status, GameStatus::Won(Player::X));
        match status {
            GameStatus::Won(_) => assert_eq!(app.winning_cells().len() % 3, 0),
            _ => assert!(app.winning_cells().is_empty()),
        }
    }
}
