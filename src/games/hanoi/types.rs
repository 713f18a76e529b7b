//! Core domain types for the Tower of Hanoi.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rank of a disc within a legal stack.
///
/// A disc may only rest on a disc of strictly smaller rank, so ranks are
/// strictly increasing from the bottom of a peg to its top. Rank 0 is the
/// bottom disc of the initial stack.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct Rank(usize);

impl Rank {
    /// Creates a rank from its numeric value.
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the rank.
    pub const fn value(self) -> usize {
        self.0
    }

    /// Label drawn on the disc (ranks are shown 1-based).
    pub fn label(self) -> String {
        (self.0 + 1).to_string()
    }
}

/// One of the three pegs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PegId {
    /// Left peg (index 0).
    Left,
    /// Middle peg (index 1).
    Middle,
    /// Right peg (index 2).
    Right,
}

impl PegId {
    /// All three pegs, left to right.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Converts the peg to its index (0-2).
    pub const fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Creates a peg from its index, `None` outside `0..=2`.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }

    /// Returns the peg that is neither `self` nor `other`.
    ///
    /// When both are the same peg, the next peg to the right (wrapping) is
    /// returned.
    #[instrument]
    pub fn third(self, other: PegId) -> PegId {
        <PegId as strum::IntoEnumIterator>::iter()
            .find(|peg| *peg != self && *peg != other)
            .unwrap_or(PegId::ALL[(self.index() + 1) % 3])
    }
}

/// A point in screen coordinates; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Phase of a disc's motion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum MotionPhase {
    /// Not moving. A held disc idles at carry height.
    #[default]
    Idle,
    /// Rising vertically to carry height.
    Rising,
    /// Travelling horizontally at carry height.
    Traversing,
    /// Dropping vertically onto the destination stack.
    Descending,
}
