//! Discs and their two-phase motion state machine.
//!
//! A move is issued as two commands. `lift` pops the disc off its peg and
//! raises it to carry height. `place` pushes it onto the destination and
//! sends it sideways, then down. Positions are advanced by `tick`; the peg
//! stacks change when a command is issued, never during animation.

use super::contracts::LegalPlacement;
use super::{MotionPhase, MoveError, Peg, Point, Rank};
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

/// A disc with its motion state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Disc {
    /// Rank of the disc (immutable).
    rank: Rank,
    /// Drawn width.
    width: i32,
    /// Current position: horizontal centre and top edge.
    position: Point,
    /// Position the motion state machine drives toward.
    target: Point,
    /// Current motion phase.
    phase: MotionPhase,
    /// Carry height while lifted and not yet placed.
    #[getter(skip)]
    held_at: Option<i32>,
}

impl Disc {
    /// Creates an idle disc resting at `position`.
    #[instrument]
    pub fn new(rank: Rank, width: i32, position: Point) -> Self {
        Self {
            rank,
            width,
            position,
            target: position,
            phase: MotionPhase::Idle,
            held_at: None,
        }
    }

    /// True while the disc is moving.
    pub fn is_busy(&self) -> bool {
        self.phase != MotionPhase::Idle
    }

    /// True between a successful `lift` and the matching `place`.
    pub fn is_held(&self) -> bool {
        self.held_at.is_some()
    }

    /// Lifts the disc off `source` toward `carry_height`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyBusy`] if the disc is moving or already held.
    /// - [`MoveError::NotOnTop`] if the disc is not the top of `source`.
    #[instrument(skip(self, source), fields(rank = %self.rank, source = %source.id()))]
    pub fn lift(&mut self, source: &mut Peg, carry_height: i32) -> Result<(), MoveError> {
        if self.is_busy() || self.is_held() {
            warn!(phase = %self.phase, "Cannot lift disc while a command is pending");
            return Err(MoveError::AlreadyBusy(self.rank));
        }

        if source.top_rank() != Some(self.rank) {
            return Err(MoveError::NotOnTop {
                rank: self.rank,
                peg: *source.id(),
            });
        }

        source.pop();
        self.target.y = carry_height;
        self.held_at = Some(carry_height);
        self.phase = MotionPhase::Rising;
        debug!(carry_height, "Disc lifted");
        Ok(())
    }

    /// Places the held disc onto `destination`.
    ///
    /// The destination stack is updated immediately; the disc then travels
    /// sideways and descends over subsequent ticks.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyBusy`] if the disc is still moving.
    /// - [`MoveError::NotHeld`] if the disc was never lifted.
    /// - [`MoveError::NotAtCarryHeight`] if the rise has not completed.
    /// - [`MoveError::RuleViolation`] if the destination's top disc forbids
    ///   it. No state changes in that case.
    #[instrument(
        skip(self, destination),
        fields(rank = %self.rank, destination = %destination.id())
    )]
    pub fn place(&mut self, destination: &mut Peg) -> Result<(), MoveError> {
        if self.is_busy() {
            return Err(MoveError::AlreadyBusy(self.rank));
        }

        let carry_height = self.held_at.ok_or(MoveError::NotHeld(self.rank))?;
        if self.position.y != carry_height {
            warn!(y = self.position.y, carry_height, "Lateral move requested below carry height");
            return Err(MoveError::NotAtCarryHeight(self.rank));
        }

        LegalPlacement::check(self.rank, destination)?;

        let rest = destination.push(self.rank);
        self.target = Point::new(*destination.slot_x(), rest);
        self.held_at = None;
        self.phase = if self.position.x == self.target.x {
            MotionPhase::Descending
        } else {
            MotionPhase::Traversing
        };
        debug!(target = ?self.target, phase = %self.phase, "Disc placed");
        Ok(())
    }

    /// Advances the disc by at most `step` units along one axis.
    ///
    /// Motion is L-shaped: up, across, down. No-op while idle.
    pub fn tick(&mut self, step: u32) {
        match self.phase {
            MotionPhase::Idle => {}
            MotionPhase::Rising => {
                self.position.y = approach(self.position.y, self.target.y, step);
                if self.position.y == self.target.y {
                    self.phase = MotionPhase::Idle;
                    debug!(rank = %self.rank, "Disc reached carry height");
                }
            }
            MotionPhase::Traversing => {
                self.position.x = approach(self.position.x, self.target.x, step);
                if self.position.x == self.target.x {
                    self.phase = MotionPhase::Descending;
                }
            }
            MotionPhase::Descending => {
                self.position.y = approach(self.position.y, self.target.y, step);
                if self.position.y == self.target.y {
                    self.phase = MotionPhase::Idle;
                    debug!(rank = %self.rank, position = ?self.position, "Disc came to rest");
                }
            }
        }
    }
}

/// Moves `current` toward `target` by at most `step`, never overshooting.
fn approach(current: i32, target: i32, step: u32) -> i32 {
    let step = i32::try_from(step).unwrap_or(i32::MAX);
    let delta = target - current;
    if delta.abs() <= step {
        target
    } else {
        current + step * delta.signum()
    }
}
