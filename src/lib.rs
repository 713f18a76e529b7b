//! Strictly Hanoi library - an animated Tower of Hanoi with checked rules
//!
//! The puzzle state is a [`Tower`] of three [`Peg`]s and N [`Disc`]s. Every
//! disc move is two commands, `lift` then `place`, and each disc animates
//! between them through its own motion state machine.
//!
//! # Architecture
//!
//! - **Rules**: a single legality predicate ([`is_legal`])
//! - **Motion**: per-disc `Idle → Rising → Traversing → Descending` machine
//! - **Planner**: the recursive optimal solution ([`plan`])
//! - **Players**: autonomous playback ([`AutoPlayer`]) and manual selection
//!   ([`ManualPlayer`])
//! - **Session**: one tower and one player advanced frame by frame
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{GameSession, HanoiConfig, Mode};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = HanoiConfig::default().with_disc_count(3).with_step(50);
//! let mut session = GameSession::new(config, Mode::Auto)?;
//! session.start();
//! while !session.is_finished() {
//!     session.advance()?;
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, HanoiConfig, MAX_DISC_COUNT};

// Crate-level exports - Game types
pub use games::hanoi::{
    Contract, Disc, LegalPlacement, MotionPhase, Move, MoveError, OnlyDiscInFlight, Peg, PegId,
    PlaceContract, Placement, Point, Rank, Tower, initialize, is_legal, move_count, plan,
};

// Crate-level exports - Invariants
pub use games::hanoi::invariants::{
    DiscConservationInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleInFlightInvariant, SortedStacksInvariant, TowerInvariants,
};

// Crate-level exports - Players
pub use players::{AutoPhase, AutoPlayer, ManualPlayer, PlayerEvent};

// Crate-level exports - Session management
pub use session::{Driver, GameSession, Mode};
