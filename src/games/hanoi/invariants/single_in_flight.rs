//! Single-in-flight invariant: at most one disc is in hand at a time.

use super::super::Tower;
use super::Invariant;

/// Invariant: at most one disc is moving or held.
pub struct SingleInFlightInvariant;

impl Invariant<Tower> for SingleInFlightInvariant {
    fn holds(tower: &Tower) -> bool {
        tower
            .discs()
            .iter()
            .filter(|disc| disc.is_busy() || disc.is_held())
            .count()
            <= 1
    }

    fn description() -> &'static str {
        "At most one disc is in flight"
    }
}
