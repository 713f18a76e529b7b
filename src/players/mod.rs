//! Players that drive the tower: autonomous playback and manual selection.
//!
//! Both issue the same two commands, `lift` then `place`, against a
//! [`Tower`](crate::Tower). They differ only in where the next peg comes
//! from.

mod auto;
mod manual;

pub use auto::{AutoPhase, AutoPlayer};
pub use manual::ManualPlayer;

use crate::games::hanoi::{PegId, Rank};

/// Something a player did that the presentation may want to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A disc was lifted.
    Lifted {
        /// Disc lifted.
        rank: Rank,
        /// Peg it left.
        from: PegId,
    },
    /// A disc was placed; it is now animating toward its peg.
    Placed {
        /// Disc placed.
        rank: Rank,
        /// Peg it joined.
        to: PegId,
    },
    /// A planned move finished animating.
    MoveCompleted {
        /// Moves completed so far (1-based).
        step: usize,
        /// Moves in the plan.
        total: usize,
    },
}

impl std::fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerEvent::Lifted { rank, from } => {
                write!(f, "Lifted disc {} from the {} peg", rank.label(), from)
            }
            PlayerEvent::Placed { rank, to } => {
                write!(f, "Placed disc {} on the {} peg", rank.label(), to)
            }
            PlayerEvent::MoveCompleted { step, total } => {
                write!(f, "Step {} / {} completed", step, total)
            }
        }
    }
}
