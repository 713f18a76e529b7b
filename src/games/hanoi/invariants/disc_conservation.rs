//! Disc conservation invariant: every rank is present exactly once.

use super::super::Tower;
use super::Invariant;

/// Invariant: the pegs plus the held disc contain `0..N` exactly once each.
///
/// A lifted disc is off every peg until it is placed, so it is counted
/// through the tower's held slot.
pub struct DiscConservationInvariant;

impl Invariant<Tower> for DiscConservationInvariant {
    fn holds(tower: &Tower) -> bool {
        let n = tower.disc_count();
        let mut seen = vec![false; n];

        let on_pegs = tower.pegs().iter().flat_map(|peg| peg.stack().iter().copied());
        for rank in on_pegs.chain(tower.held()) {
            match seen.get_mut(rank.value()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }

        seen.into_iter().all(|present| present)
    }

    fn description() -> &'static str {
        "Every disc is on exactly one peg or held"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HanoiConfig;
    use crate::games::hanoi::{PegId, Rank};

    #[test]
    fn test_new_tower_conserves() {
        for n in 1..=10 {
            let tower = Tower::new(&HanoiConfig::default().with_disc_count(n));
            assert!(DiscConservationInvariant::holds(&tower));
        }
    }

    #[test]
    fn test_held_disc_counted() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(3));
        tower.lift(PegId::Left).unwrap();
        assert!(DiscConservationInvariant::holds(&tower));
    }

    #[test]
    fn test_missing_disc_violates() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(3));
        tower.pegs[PegId::Left.index()].pop();
        assert!(!DiscConservationInvariant::holds(&tower));
    }

    #[test]
    fn test_unknown_rank_violates() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(3));
        tower.pegs[PegId::Right.index()].push(Rank::new(7));
        assert!(!DiscConservationInvariant::holds(&tower));
    }
}
