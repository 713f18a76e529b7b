//! The three pegs and their discs, commanded as one unit.
//!
//! [`Tower`] owns every disc and peg so it can enforce the rule that only
//! one disc is in hand at a time, which a single [`Disc`] cannot see.

use super::contracts::{Contract, PlaceContract, Placement};
use super::{Disc, MoveError, Peg, PegId, Point, Rank};
use crate::HanoiConfig;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Builds the initial discs and pegs: every disc stacked on the source peg.
///
/// Discs are indexed by rank; pegs by [`PegId::index`].
#[instrument(skip(config), fields(disc_count = config.disc_count()))]
pub fn initialize(config: &HanoiConfig) -> (Vec<Disc>, [Peg; 3]) {
    let thickness = *config.disc_thickness();
    let floor = *config.floor_y();
    let mut pegs = PegId::ALL.map(|id| Peg::new(id, config.peg_x(id), floor, thickness));

    let source = &mut pegs[config.source().index()];
    let discs = (0..*config.disc_count())
        .map(Rank::new)
        .map(|rank| {
            let rest = source.push(rank);
            Disc::new(rank, config.disc_width(rank), Point::new(*source.slot_x(), rest))
        })
        .collect();

    debug!(source = %config.source(), "Tower initialized");
    (discs, pegs)
}

/// Complete puzzle state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Tower {
    /// Discs indexed by rank.
    #[getter(skip)]
    pub(crate) discs: Vec<Disc>,
    /// Pegs indexed by [`PegId::index`].
    #[getter(skip)]
    pub(crate) pegs: [Peg; 3],
    /// Y of the carry lane.
    carry_height: i32,
    /// Distance a disc moves per tick.
    step: u32,
}

impl Tower {
    /// Creates a tower with every disc on the configured source peg.
    #[instrument(skip(config))]
    pub fn new(config: &HanoiConfig) -> Self {
        let (discs, pegs) = initialize(config);
        info!(disc_count = discs.len(), "Created tower");
        Self {
            discs,
            pegs,
            carry_height: *config.carry_height(),
            step: *config.step(),
        }
    }

    /// All discs, indexed by rank.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// All pegs, left to right.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// The disc of the given rank.
    pub fn disc(&self, rank: Rank) -> Option<&Disc> {
        self.discs.get(rank.value())
    }

    /// The given peg.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// Number of discs in the puzzle.
    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    /// The disc currently lifted and not yet placed.
    pub fn held(&self) -> Option<Rank> {
        self.discs.iter().find(|disc| disc.is_held()).map(|disc| *disc.rank())
    }

    /// The disc currently moving.
    pub fn in_motion(&self) -> Option<Rank> {
        self.discs.iter().find(|disc| disc.is_busy()).map(|disc| *disc.rank())
    }

    /// The disc currently in hand: moving or held.
    pub fn in_flight(&self) -> Option<Rank> {
        self.discs
            .iter()
            .find(|disc| disc.is_busy() || disc.is_held())
            .map(|disc| *disc.rank())
    }

    /// True when no disc is moving or held.
    pub fn is_settled(&self) -> bool {
        self.in_flight().is_none()
    }

    /// True when every disc rests on `destination`.
    pub fn is_solved(&self, destination: PegId) -> bool {
        self.is_settled() && self.peg(destination).len() == self.disc_count()
    }

    /// Lifts the top disc of `from` and returns its rank.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyBusy`] if any disc is moving or held.
    /// - [`MoveError::EmptySourceSelection`] if `from` has no discs.
    #[instrument(skip(self))]
    pub fn lift(&mut self, from: PegId) -> Result<Rank, MoveError> {
        if let Some(rank) = self.in_flight() {
            return Err(MoveError::AlreadyBusy(rank));
        }

        let peg = &mut self.pegs[from.index()];
        let rank = peg.top_rank().ok_or(MoveError::EmptySourceSelection(from))?;
        self.discs[rank.value()].lift(peg, self.carry_height)?;

        info!(%rank, %from, "Lifted disc");
        Ok(rank)
    }

    /// Places the held disc `rank` onto `to`.
    ///
    /// Postconditions are verified in debug builds.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyBusy`] if a disc is still moving.
    /// - [`MoveError::NotHeld`] if `rank` was never lifted.
    /// - [`MoveError::RuleViolation`] if the rule forbids the placement; the
    ///   disc stays held.
    #[instrument(skip(self))]
    pub fn place(&mut self, rank: Rank, to: PegId) -> Result<(), MoveError> {
        let placement = Placement::new(rank, to);
        PlaceContract::pre(self, &placement)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let disc = self
            .discs
            .get_mut(rank.value())
            .ok_or(MoveError::NotHeld(rank))?;
        disc.place(&mut self.pegs[to.index()])?;

        #[cfg(debug_assertions)]
        PlaceContract::post(&before, self)?;

        info!(%rank, %to, "Placed disc");
        Ok(())
    }

    /// Advances every disc by one step. Call once per frame.
    pub fn tick_all(&mut self) {
        for disc in &mut self.discs {
            disc.tick(self.step);
        }
    }
}
