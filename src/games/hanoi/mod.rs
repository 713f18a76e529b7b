mod action;
mod contracts;
mod disc;
mod peg;
mod planner;
mod rules;
mod tower;
mod types;

pub mod invariants;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalPlacement, OnlyDiscInFlight, PlaceContract, Placement};
pub use disc::Disc;
pub use peg::Peg;
pub use planner::{move_count, plan};
pub use rules::is_legal;
pub use tower::{Tower, initialize};
pub use types::{MotionPhase, PegId, Point, Rank};
