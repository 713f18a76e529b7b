//! Game rule for the Tower of Hanoi.
//!
//! The whole rule set is a single pure predicate so that contracts, discs
//! and players all agree on what a legal placement is.

use super::Rank;
use tracing::instrument;

/// Returns true if a disc of `rank` may be placed on a peg whose top disc is
/// `top`.
///
/// An empty peg (`None`) accepts every disc; otherwise the disc's rank must
/// be strictly greater than the top rank.
#[instrument]
pub fn is_legal(rank: Rank, top: Option<Rank>) -> bool {
    match top {
        None => true,
        Some(top) => rank > top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_peg_accepts_everything() {
        for r in 0..10 {
            assert!(is_legal(Rank::new(r), None));
        }
    }

    #[test]
    fn test_legal_iff_greater() {
        for r in 0..6 {
            for t in 0..6 {
                assert_eq!(is_legal(Rank::new(r), Some(Rank::new(t))), r > t, "r={r} t={t}");
            }
        }
    }

    #[test]
    fn test_equal_rank_rejected() {
        assert!(!is_legal(Rank::new(3), Some(Rank::new(3))));
    }
}
