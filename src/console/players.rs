//! Sources of human input for the console game.

use crate::games::tictactoe::{GameSession, Move};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// What the human asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a mark.
    Place(Move),
    /// Start a fresh game.
    Restart,
    /// Leave.
    Quit,
    /// Input that was not understood.
    Unrecognized(String),
}

impl Action {
    /// Interprets one line of user input.
    ///
    /// `q`/`quit`/`exit` quits, `r`/`restart` restarts, anything else must
    /// read as a [`Move`].
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Action::Quit,
            "r" | "restart" => Action::Restart,
            _ => match trimmed.parse::<Move>() {
                Ok(mv) => Action::Place(mv),
                Err(_) => Action::Unrecognized(trimmed.to_string()),
            },
        }
    }
}

/// Trait for anything that can speak for the human.
#[async_trait::async_trait]
pub trait HumanInput: Send {
    /// Waits for the human's next action.
    async fn next_action(&mut self, session: &GameSession) -> Result<Action>;
}

/// Human input read line by line from an async reader.
pub struct LineInput<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineInput<R> {
    /// Reads actions from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineInput<BufReader<Stdin>> {
    /// Reads actions from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> HumanInput for LineInput<R> {
    async fn next_action(&mut self, session: &GameSession) -> Result<Action> {
        let Some(line) = self.lines.next_line().await? else {
            debug!("Input closed, quitting");
            return Ok(Action::Quit);
        };

        let action = Action::parse(&line);
        debug!(?action, to_move = %session.to_move(), "Read human action");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Action::parse("q"), Action::Quit);
        assert_eq!(Action::parse(" Restart \n"), Action::Restart);
        assert_eq!(Action::parse("7"), Action::Place(Move::new(2, 0).unwrap()));
        assert_eq!(Action::parse("1,2"), Action::Place(Move::new(1, 2).unwrap()));
        assert_eq!(Action::parse("hello"), Action::Unrecognized("hello".to_string()));
    }

    #[tokio::test]
    async fn test_line_input_reads_until_eof() {
        let session = GameSession::new(Player::X, Player::X);
        let mut input = LineInput::new(&b"5\nr\n"[..]);

        assert_eq!(
            input.next_action(&session).await.unwrap(),
            Action::Place(Move::new(1, 1).unwrap())
        );
        assert_eq!(input.next_action(&session).await.unwrap(), Action::Restart);
        assert_eq!(input.next_action(&session).await.unwrap(), Action::Quit);
    }
}
