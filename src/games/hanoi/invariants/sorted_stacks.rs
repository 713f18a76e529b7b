//! Sorted stacks invariant: every peg is strictly increasing bottom to top.

use super::super::Tower;
use super::Invariant;

/// Invariant: each peg's ranks strictly increase from bottom to top.
pub struct SortedStacksInvariant;

impl Invariant<Tower> for SortedStacksInvariant {
    fn holds(tower: &Tower) -> bool {
        tower
            .pegs()
            .iter()
            .all(|peg| peg.stack().windows(2).all(|pair| pair[0] < pair[1]))
    }

    fn description() -> &'static str {
        "Peg stacks are strictly increasing bottom to top"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HanoiConfig;
    use crate::games::hanoi::{PegId, Rank};

    #[test]
    fn test_initial_stack_sorted() {
        let tower = Tower::new(&HanoiConfig::default().with_disc_count(5));
        assert!(SortedStacksInvariant::holds(&tower));
    }

    #[test]
    fn test_equal_ranks_violate() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
        tower.pegs[PegId::Left.index()].push(Rank::new(1));
        assert!(!SortedStacksInvariant::holds(&tower));
    }

    #[test]
    fn test_decreasing_ranks_violate() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(3));
        tower.pegs[PegId::Middle.index()].push(Rank::new(2));
        tower.pegs[PegId::Middle.index()].push(Rank::new(1));
        assert!(!SortedStacksInvariant::holds(&tower));
    }
}
