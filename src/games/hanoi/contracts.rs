//! Contract-based validation for tower commands.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} command {Q}.

use super::invariants::check_tower;
use super::rules::is_legal;
use super::{MoveError, Peg, PegId, Rank, Tower};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// A request to put the held disc `rank` onto peg `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Placement {
    /// Disc being placed.
    pub rank: Rank,
    /// Destination peg.
    pub to: PegId,
}

/// Precondition: the rule allows `rank` on top of the destination.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Consults the rule and converts a refusal into [`MoveError::RuleViolation`].
    #[instrument(skip(destination), fields(destination = %destination.id()))]
    pub fn check(rank: Rank, destination: &Peg) -> Result<(), MoveError> {
        match destination.top_rank() {
            Some(top) if !is_legal(rank, Some(top)) => {
                warn!(%rank, %top, "Placement is against the game rule");
                Err(MoveError::RuleViolation { rank, top })
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: no disc is moving and no other disc is held.
pub struct OnlyDiscInFlight;

impl OnlyDiscInFlight {
    /// Fails with [`MoveError::AlreadyBusy`] naming the disc in the way.
    #[instrument(skip(tower))]
    pub fn check(rank: Rank, tower: &Tower) -> Result<(), MoveError> {
        match tower
            .discs()
            .iter()
            .find(|disc| disc.is_busy() || (*disc.rank() != rank && disc.is_held()))
        {
            Some(other) => Err(MoveError::AlreadyBusy(*other.rank())),
            None => Ok(()),
        }
    }
}

/// Contract for placements.
///
/// Preconditions:
/// - No disc is moving and no other disc is held
/// - The rule allows the disc on the destination
///
/// Postconditions:
/// - Stacks stay sorted
/// - Every disc is accounted for exactly once
/// - At most one disc is in flight
/// - The disc held before is no longer held and tops exactly one peg that
///   grew by one; every other peg is unchanged
pub struct PlaceContract;

impl Contract<Tower, Placement> for PlaceContract {
    fn pre(tower: &Tower, action: &Placement) -> Result<(), MoveError> {
        OnlyDiscInFlight::check(action.rank, tower)?;
        LegalPlacement::check(action.rank, tower.peg(action.to))
    }

    fn post(before: &Tower, after: &Tower) -> Result<(), MoveError> {
        check_tower(after).map_err(|descriptions| {
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let rank = before.held().ok_or_else(|| {
            MoveError::InvariantViolation("Placement without a held disc".to_string())
        })?;
        let changed: Vec<PegId> = PegId::ALL
            .into_iter()
            .filter(|id| after.peg(*id).stack() != before.peg(*id).stack())
            .collect();

        match changed.as_slice() {
            [to] if after.held().is_none()
                && after.peg(*to).top_rank() == Some(rank)
                && after.peg(*to).len() == before.peg(*to).len() + 1 =>
            {
                Ok(())
            }
            _ => {
                warn!(%rank, ?changed, "Placement did not land on exactly one peg");
                Err(MoveError::InvariantViolation(format!(
                    "Disc {} did not land on exactly one peg",
                    rank
                )))
            }
        }
    }
}
