//! Game orchestration between the human and the engine.

use super::players::{Action, HumanInput};
use crate::config::GameConfig;
use crate::games::tictactoe::{Board, GameSession, GameStatus, Move, MoveError, Player};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from the orchestrator to whatever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    NewGame {
        /// Mark played by the human.
        human: Player,
        /// Mark that opens.
        first_mover: Player,
    },
    /// Waiting for the human to act.
    AwaitingHuman {
        /// Board the human is looking at.
        board: Board,
    },
    /// The engine is about to reply.
    ComputerThinking,
    /// A mark was placed.
    MoveMade {
        /// Who placed it.
        player: Player,
        /// Where.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The human's move was refused; the turn stays with the human.
    MoveRejected(MoveError),
    /// The human typed something that is not a command or a move.
    Unrecognized(String),
    /// The game has a result.
    GameOver(GameStatus),
}

/// Runs one human against the engine, restarting on request.
pub struct Orchestrator<H> {
    session: GameSession,
    human: H,
    think_delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<H: HumanInput> Orchestrator<H> {
    /// Creates a new orchestrator.
    pub fn new(config: &GameConfig, human: H, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self {
            session: GameSession::from_config(config),
            human,
            think_delay: config.think_delay(),
            event_tx,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop until the human quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.announce_new_game()?;

        loop {
            let status = self.session.status();
            if status.is_terminal() {
                self.event_tx.send(GameEvent::GameOver(status))?;
                match self.human.next_action(&self.session).await? {
                    Action::Restart => self.restart()?,
                    Action::Quit => return Ok(()),
                    Action::Place(_) => {
                        self.event_tx.send(GameEvent::MoveRejected(MoveError::GameOver))?
                    }
                    Action::Unrecognized(text) => {
                        self.event_tx.send(GameEvent::Unrecognized(text))?
                    }
                }
                continue;
            }

            if self.session.is_computer_turn() {
                self.event_tx.send(GameEvent::ComputerThinking)?;
                tokio::time::sleep(self.think_delay).await;

                let mv = self.session.computer_move()?;
                self.event_tx.send(GameEvent::MoveMade {
                    player: self.session.computer(),
                    mv,
                    board: *self.session.board(),
                })?;
                continue;
            }

            self.event_tx.send(GameEvent::AwaitingHuman {
                board: *self.session.board(),
            })?;

            debug!("Waiting for human action");
            match self.human.next_action(&self.session).await? {
                Action::Place(mv) => match self.session.apply_human_move(mv.row(), mv.col()) {
                    Ok(mv) => self.event_tx.send(GameEvent::MoveMade {
                        player: self.session.human(),
                        mv,
                        board: *self.session.board(),
                    })?,
                    Err(e) => {
                        warn!(error = %e, "Human move rejected");
                        self.event_tx.send(GameEvent::MoveRejected(e))?;
                    }
                },
                Action::Restart => self.restart()?,
                Action::Quit => return Ok(()),
                Action::Unrecognized(text) => self.event_tx.send(GameEvent::Unrecognized(text))?,
            }
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.session.restart();
        self.announce_new_game()
    }

    fn announce_new_game(&self) -> Result<()> {
        self.event_tx.send(GameEvent::NewGame {
            human: self.session.human(),
            first_mover: self.session.first_mover(),
        })?;
        Ok(())
    }
}
