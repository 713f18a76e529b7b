//! First-class invariants for the Tower of Hanoi.
//!
//! Invariants are logical properties of a [`Tower`] that hold after every
//! completed command. They are checked as postconditions in debug builds
//! and are testable on their own.

use super::Tower;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod disc_conservation;
pub mod single_in_flight;
pub mod sorted_stacks;

pub use disc_conservation::DiscConservationInvariant;
pub use single_in_flight::SingleInFlightInvariant;
pub use sorted_stacks::SortedStacksInvariant;

/// All tower invariants as a composable set.
pub type TowerInvariants = (
    SortedStacksInvariant,
    DiscConservationInvariant,
    SingleInFlightInvariant,
);

/// Checks every tower invariant, joining violations into one message.
pub fn check_tower(tower: &Tower) -> Result<(), String> {
    TowerInvariants::check_all(tower).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HanoiConfig;
    use crate::games::hanoi::{PegId, Rank};

    fn tower(discs: usize) -> Tower {
        Tower::new(&HanoiConfig::default().with_disc_count(discs))
    }

    #[test]
    fn test_invariant_set_holds_for_new_tower() {
        for n in 1..=10 {
            assert!(TowerInvariants::check_all(&tower(n)).is_ok(), "n={n}");
        }
    }

    #[test]
    fn test_invariant_set_holds_mid_move() {
        let mut tower = tower(3);
        tower.lift(PegId::Left).unwrap();
        assert!(TowerInvariants::check_all(&tower).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut tower = tower(3);
        // duplicate the top disc onto an empty peg
        tower.pegs[PegId::Right.index()].push(Rank::new(2));
        let violations = TowerInvariants::check_all(&tower).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, DiscConservationInvariant::description());
    }

    #[test]
    fn test_check_tower_joins_descriptions() {
        let mut tower = tower(2);
        tower.pegs[PegId::Left.index()].push(Rank::new(0));
        let message = check_tower(&tower).unwrap_err();
        assert!(message.contains(SortedStacksInvariant::description()));
        assert!(message.contains(DiscConservationInvariant::description()));
    }
}
