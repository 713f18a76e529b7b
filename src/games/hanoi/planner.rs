//! Optimal move planner.

use super::{Move, PegId};
use tracing::{debug, instrument};

/// Plans the canonical minimal solution for `disc_count` discs.
///
/// Moves the top `n - 1` discs out of the way onto `auxiliary`, moves the
/// largest to `destination`, then brings the `n - 1` back on top of it. The
/// result has exactly `2^n - 1` moves; zero discs yield an empty plan.
#[instrument]
pub fn plan(source: PegId, auxiliary: PegId, destination: PegId, disc_count: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(capacity_hint(disc_count));
    solve(source, auxiliary, destination, disc_count, &mut moves);
    debug!(moves = moves.len(), "Plan computed");
    moves
}

fn solve(source: PegId, auxiliary: PegId, destination: PegId, n: usize, moves: &mut Vec<Move>) {
    match n {
        0 => {}
        1 => moves.push(Move::new(source, destination)),
        _ => {
            solve(source, destination, auxiliary, n - 1, moves);
            moves.push(Move::new(source, destination));
            solve(auxiliary, source, destination, n - 1, moves);
        }
    }
}

/// Number of moves in the optimal solution, `2^n - 1`.
///
/// Saturates at `u64::MAX` for 64 or more discs.
pub fn move_count(disc_count: usize) -> u64 {
    match u32::try_from(disc_count) {
        Ok(n) if n < 64 => (1u64 << n) - 1,
        _ => u64::MAX,
    }
}

fn capacity_hint(disc_count: usize) -> usize {
    usize::try_from(move_count(disc_count.min(20))).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_discs_empty() {
        assert!(plan(PegId::Left, PegId::Middle, PegId::Right, 0).is_empty());
    }

    #[test]
    fn test_single_disc() {
        assert_eq!(
            plan(PegId::Left, PegId::Middle, PegId::Right, 1),
            vec![Move::new(PegId::Left, PegId::Right)]
        );
    }

    #[test]
    fn test_move_count() {
        assert_eq!(move_count(0), 0);
        assert_eq!(move_count(1), 1);
        assert_eq!(move_count(3), 7);
        assert_eq!(move_count(10), 1023);
        assert_eq!(move_count(64), u64::MAX);
    }

    #[test]
    fn test_plan_length_matches_count() {
        for n in 1..=12 {
            let moves = plan(PegId::Left, PegId::Middle, PegId::Right, n);
            assert_eq!(moves.len() as u64, move_count(n), "n={n}");
        }
    }

    #[test]
    fn test_largest_disc_moves_once_in_middle() {
        let moves = plan(PegId::Left, PegId::Middle, PegId::Right, 4);
        assert_eq!(moves[7], Move::new(PegId::Left, PegId::Right));
    }
}
