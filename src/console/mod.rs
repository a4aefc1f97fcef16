//! Line-based console game.
//!
//! The orchestrator drives the session and emits [`GameEvent`]s; this
//! module turns them into text on stdout.

mod orchestrator;
mod players;

pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Action, HumanInput, LineInput};

use crate::config::GameConfig;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::instrument;

const PROMPT: &str = "Your move (1-9 or row,col; r restart, q quit):";

/// Text to show for an event, if any.
pub fn render(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::NewGame { human, first_mover } => Some(format!(
            "New game. You are {}, {} moves first.",
            human, first_mover
        )),
        GameEvent::AwaitingHuman { board } => Some(format!("\n{}\n\n{}", board, PROMPT)),
        GameEvent::ComputerThinking => None,
        GameEvent::MoveMade { player, mv, .. } => {
            Some(format!("{} played {} {}", player, mv.label(), mv))
        }
        GameEvent::MoveRejected(e) => Some(format!("Move rejected: {}", e)),
        GameEvent::Unrecognized(text) => Some(format!("Unrecognized input '{}'. {}", text, PROMPT)),
        GameEvent::GameOver(status) => Some(format!(
            "Game over: {}. Press r then Enter to play again, q to quit.",
            status
        )),
    }
}

/// Plays on stdin/stdout until the user quits or input ends.
#[instrument(skip(config))]
pub async fn run_console(config: GameConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render(&event) {
                println!("{}", text);
            }
            if let GameEvent::MoveMade { board, .. } = &event
                && board.status().is_terminal()
            {
                println!("\n{}\n", board);
            }
        }
    });

    let mut orchestrator = Orchestrator::new(&config, LineInput::stdin(), event_tx);
    let result = orchestrator.run().await;
    drop(orchestrator);
    printer.await?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Move, MoveError, Player};

    #[test]
    fn test_render_messages() {
        let mv = Move::new(1, 1).unwrap();
        assert_eq!(
            render(&GameEvent::MoveMade {
                player: Player::O,
                mv,
                board: Default::default(),
            })
            .unwrap(),
            "O played Center (1, 1)"
        );
        assert!(
            render(&GameEvent::MoveRejected(MoveError::GameOver))
                .unwrap()
                .contains("Game is already over")
        );
        assert!(render(&GameEvent::GameOver(GameStatus::Draw)).unwrap().contains("Tie"));
        assert_eq!(render(&GameEvent::ComputerThinking), None);
    }
}
