//! Pegs and their disc stacks.

use super::{PegId, Rank};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// A peg holding a stack of discs, bottom to top.
///
/// Besides the stack the peg tracks the y of its top surface, which is the
/// floor when empty and rises by one disc thickness per disc.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Peg {
    /// Which peg this is.
    id: PegId,
    /// Horizontal centre of the peg.
    slot_x: i32,
    /// Ranks bottom to top.
    stack: Vec<Rank>,
    /// Y of the top surface (top edge of the top disc, or the floor).
    top_y: i32,
    /// Vertical size of one disc.
    #[getter(skip)]
    disc_thickness: i32,
}

impl Peg {
    /// Creates an empty peg standing on `floor_y`.
    #[instrument]
    pub fn new(id: PegId, slot_x: i32, floor_y: i32, disc_thickness: i32) -> Self {
        Self {
            id,
            slot_x,
            stack: Vec::new(),
            top_y: floor_y,
            disc_thickness,
        }
    }

    /// Rank of the top disc, `None` when empty.
    pub fn top_rank(&self) -> Option<Rank> {
        self.stack.last().copied()
    }

    /// Y at which the next placed disc comes to rest.
    pub fn rest_height(&self) -> i32 {
        self.top_y - self.disc_thickness
    }

    /// Number of discs on the peg.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the peg holds no discs.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes a disc and returns the y it rests at.
    ///
    /// Unchecked: the caller has already consulted the rule.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub(crate) fn push(&mut self, rank: Rank) -> i32 {
        let rest = self.rest_height();
        self.stack.push(rank);
        self.top_y = rest;
        debug!(%rank, top_y = self.top_y, "Disc pushed");
        rest
    }

    /// Pops the top disc.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub(crate) fn pop(&mut self) -> Option<Rank> {
        let rank = self.stack.pop()?;
        self.top_y += self.disc_thickness;
        debug!(%rank, top_y = self.top_y, "Disc popped");
        Some(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg() -> Peg {
        Peg::new(PegId::Left, 200, 550, 30)
    }

    #[test]
    fn test_empty_peg() {
        let peg = peg();
        assert_eq!(peg.top_rank(), None);
        assert_eq!(*peg.top_y(), 550);
        assert_eq!(peg.rest_height(), 520);
        assert!(peg.is_empty());
    }

    #[test]
    fn test_push_tracks_height() {
        let mut peg = peg();
        assert_eq!(peg.push(Rank::new(0)), 520);
        assert_eq!(peg.push(Rank::new(1)), 490);
        assert_eq!(peg.top_rank(), Some(Rank::new(1)));
        assert_eq!(*peg.top_y(), 490);
        assert_eq!(peg.rest_height(), 460);
    }

    #[test]
    fn test_pop_restores_height() {
        let mut peg = peg();
        peg.push(Rank::new(0));
        peg.push(Rank::new(1));
        assert_eq!(peg.pop(), Some(Rank::new(1)));
        assert_eq!(peg.top_rank(), Some(Rank::new(0)));
        assert_eq!(*peg.top_y(), 520);
        assert_eq!(peg.pop(), Some(Rank::new(0)));
        assert_eq!(peg.top_rank(), None);
        assert_eq!(*peg.top_y(), 550);
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut peg = peg();
        assert_eq!(peg.pop(), None);
        assert_eq!(*peg.top_y(), 550);
    }
}
