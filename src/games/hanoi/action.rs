//! First-class action types for the Tower of Hanoi.
//!
//! A move names the pegs only; the disc moved is always the source's top
//! disc at the moment the move begins.

use super::{PegId, Rank};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single move: the top disc of `from` goes to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Source peg.
    pub from: PegId,
    /// Destination peg.
    pub to: PegId,
}

impl Move {
    /// Returns the move as a pair of peg indices.
    pub fn as_indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Error that can occur when commanding a disc.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A command was issued while a disc is still moving or held.
    #[display("Disc {} is already busy", _0)]
    AlreadyBusy(Rank),

    /// The destination's top disc does not allow this disc on top of it.
    #[display("Disc {} cannot be placed on disc {}", rank, top)]
    RuleViolation {
        /// Rank of the disc being placed.
        rank: Rank,
        /// Rank of the destination's current top disc.
        top: Rank,
    },

    /// Tried to lift from a peg with no discs.
    #[display("Peg {} has no disc to lift", _0)]
    EmptySourceSelection(PegId),

    /// Peg selection outside 0-2.
    #[display("Peg selection {} is out of range", _0)]
    InvalidSelection(usize),

    /// `place` on a disc that was never lifted.
    #[display("Disc {} is not held", _0)]
    NotHeld(Rank),

    /// `lift` on a disc that is not the top of its peg.
    #[display("Disc {} is not the top of peg {}", rank, peg)]
    NotOnTop {
        /// Rank of the disc being lifted.
        rank: Rank,
        /// Peg it was lifted from.
        peg: PegId,
    },

    /// `place` before the disc reached carry height.
    #[display("Disc {} has not reached carry height", _0)]
    NotAtCarryHeight(Rank),

    /// A postcondition failed after a placement.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true for errors the caller can resolve by retrying later.
    pub fn is_transient(&self) -> bool {
        matches!(self, MoveError::AlreadyBusy(_))
    }
}
