//! Unbeatable tic-tac-toe - unified CLI
//!
//! Terminal UI, console play and analysis commands.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    AuditReport, Board, GameConfig, GameStatus, Move, Player, ScoredMove, audit, console,
    pick_best, score_moves,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run_tui(config),
        Command::Play => {
            init_stderr_logging();
            console::run_console(config).await
        }
        Command::Hint { board, mover, json } => {
            init_stderr_logging();
            run_hint(board, mover, json)
        }
        Command::Audit { json } => {
            init_stderr_logging();
            run_audit(&config, json)
        }
    }
}

/// Reads the config file, if any, and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(human) = cli.human {
        config = config.with_human(human);
    }
    if let Some(first) = cli.first {
        config = config.with_first_mover(first);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config = config.with_think_delay_ms(delay_ms);
    }
    Ok(config)
}

/// Logs to stderr so stdout stays clean for the game or report.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Serialize)]
struct HintReport {
    board: Board,
    mover: Player,
    status: GameStatus,
    best_move: Option<Move>,
    scores: Vec<ScoredMove>,
}

/// Scores every candidate for `mover` and picks the engine's choice.
fn hint_report(board: Board, mover: Player) -> Result<HintReport> {
    let status = board.status();
    let scores = if status.is_terminal() {
        Vec::new()
    } else {
        score_moves(&board, mover)?
    };
    let best_move = pick_best(&scores).map(|best| best.mv);

    Ok(HintReport {
        board,
        mover,
        status,
        best_move,
        scores,
    })
}

/// Prints every candidate move's score and the engine's choice.
#[instrument(skip(board))]
fn run_hint(board: Board, mover: Player, json: bool) -> Result<()> {
    let report = hint_report(board, mover)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", report.board);
    println!("Status: {}", report.status);
    for scored in &report.scores {
        println!(
            "  {:<14} {} score {:>3}",
            scored.mv.label(),
            scored.mv,
            scored.score
        );
    }
    if let Some(mv) = report.best_move {
        println!("{} should play {} {}", report.mover, mv.label(), mv);
    }
    Ok(())
}

/// Runs the exhaustive audit for the configured marks.
#[instrument(skip(config))]
fn run_audit(config: &GameConfig, json: bool) -> Result<()> {
    info!("Running audit");
    let report: AuditReport = audit(*config.human(), *config.first_mover())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Human {} vs engine {}, {} moves first",
        config.human(),
        config.computer(),
        config.first_mover()
    );
    println!("  games:         {}", report.games);
    println!("  engine wins:   {}", report.computer_wins);
    println!("  draws:         {}", report.draws);
    println!("  human wins:    {}", report.human_wins);
    println!(
        "{}",
        if report.is_unbeatable() {
            "The engine never loses."
        } else {
            "The engine can be beaten!"
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_tictactoe::best_move;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_hint_matches_best_move() {
        let b = board("XX./.O./...");
        let report = hint_report(b, Player::O).unwrap();
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.scores.len(), b.empty_cells().len());
        assert_eq!(report.best_move, Some(best_move(&b, Player::O).unwrap()));
        assert_eq!(report.best_move, Some(Move::new(0, 2).unwrap()));
    }

    #[test]
    fn test_hint_on_finished_game_has_no_move() {
        let report = hint_report(board("OOO/XX./X.."), Player::X).unwrap();
        assert_eq!(report.status, GameStatus::Won(Player::O));
        assert!(report.scores.is_empty());
        assert_eq!(report.best_move, None);
    }

    #[test]
    fn test_hint_json_lists_scores() {
        let report = hint_report(Board::new(), Player::O).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scores"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["best_move"]["row"], 0);
        assert_eq!(json["best_move"]["col"], 0);
    }
}
