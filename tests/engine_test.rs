//! Tests for the minimax decision engine.

use unbeatable_tictactoe::{Board, GameStatus, Move, MoveError, Player, audit, best_move, score_moves};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_opens_top_left() {
    let board = Board::new();
    assert_eq!(best_move(&board, Player::O).unwrap(), Move::new(0, 0).unwrap());
    assert_eq!(best_move(&board, Player::X).unwrap(), Move::new(0, 0).unwrap());
}

#[test]
fn test_every_opening_is_a_draw() {
    let scored = score_moves(&Board::new(), Player::O).unwrap();
    assert_eq!(scored.len(), 9);
    assert!(scored.iter().all(|s| s.score == 0));
}

#[test]
fn test_blocks_open_row() {
    let board = board("XX./.O./...");
    assert_eq!(best_move(&board, Player::O).unwrap(), Move::new(0, 2).unwrap());
}

#[test]
fn test_takes_win_over_block() {
    // O can block X on (0,2) or win at once on (1,2).
    let board = board("XX./OO./X..");
    assert_eq!(best_move(&board, Player::O).unwrap(), Move::new(1, 2).unwrap());
}

#[test]
fn test_best_move_does_not_touch_board() {
    let board = board("X../.O./..X");
    let before = board;
    best_move(&board, Player::O).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_best_move_never_returns_occupied_cell() {
    let positions = ["X../.../...", "XO./.../...", "X.O/.X./...", "XOX/.O./...", "OXO/XXO/.O."];
    for p in positions {
        let board = board(p);
        for mover in [Player::X, Player::O] {
            let mv = best_move(&board, mover).unwrap();
            assert!(board.is_empty(mv), "{} chose occupied {} on {}", mover, mv, p);
        }
    }
}

#[test]
fn test_no_legal_move_on_full_board() {
    let board = board("OXO/OXX/XOO");
    assert_eq!(best_move(&board, Player::O), Err(MoveError::NoLegalMove));
}

#[test]
fn test_engine_never_loses_moving_first() {
    let report = audit(Player::X, Player::O).unwrap();
    assert!(report.is_unbeatable(), "{:?}", report);
    assert_eq!(report.games, report.computer_wins + report.draws);
}

#[test]
fn test_engine_never_loses_moving_second() {
    let report = audit(Player::X, Player::X).unwrap();
    assert!(report.is_unbeatable(), "{:?}", report);
    assert!(report.draws > 0);
}

#[test]
fn test_engine_self_play_draws() {
    let mut board = Board::new();
    let mut to_move = Player::O;
    while board.status() == GameStatus::InProgress {
        let mv = best_move(&board, to_move).unwrap();
        board.apply_move(mv.row(), mv.col(), to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(board.status(), GameStatus::Draw);
}
