//! Turn balance invariant: the opener is never behind, never two ahead.

use super::super::GameSession;
use super::Invariant;

/// Invariant: count(first mover) - count(other) is 0 or 1.
///
/// Holds for every board reached by alternating legal play. With the
/// computer (O) opening, O - X is 0 or 1.
pub struct TurnBalanceInvariant;

impl Invariant<GameSession> for TurnBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let first = session.first_mover();
        let ahead = session.board().count(first);
        let behind = session.board().count(first.opponent());
        ahead == behind || ahead == behind + 1
    }

    fn description() -> &'static str {
        "First mover has the same number of marks as the opponent, or one more"
    }
}
