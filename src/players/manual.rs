//! Manual play: peg selections become lift and place commands.

use super::PlayerEvent;
use crate::games::hanoi::{MoveError, PegId, Rank, Tower};
use tracing::{info, instrument, warn};

/// Translates peg selections into commands.
///
/// The first selection lifts the top disc of the chosen peg, the second
/// places it. A rejected placement keeps the disc in hand so another peg
/// can be tried.
#[derive(Debug, Clone, Default)]
pub struct ManualPlayer {
    held: Option<Rank>,
}

impl ManualPlayer {
    /// Creates a player holding nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The disc this player has in hand.
    pub fn held(&self) -> Option<Rank> {
        self.held
    }

    /// Handles the selection of peg `index` (0-2).
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidSelection`] for an index outside 0-2.
    /// - [`MoveError::EmptySourceSelection`] when lifting from an empty peg.
    /// - [`MoveError::AlreadyBusy`] while a disc is still moving.
    /// - [`MoveError::RuleViolation`] when the placement is illegal; the disc
    ///   stays held.
    #[instrument(skip(self, tower), fields(held = ?self.held))]
    pub fn select(&mut self, tower: &mut Tower, index: usize) -> Result<PlayerEvent, MoveError> {
        let peg = PegId::from_index(index).ok_or_else(|| {
            warn!(index, "Ignoring out of range peg selection");
            MoveError::InvalidSelection(index)
        })?;

        match self.held {
            None => {
                let rank = tower.lift(peg)?;
                self.held = Some(rank);
                info!(%rank, from = %peg, "Picked up disc");
                Ok(PlayerEvent::Lifted { rank, from: peg })
            }
            Some(rank) => {
                tower.place(rank, peg).inspect_err(|e| {
                    warn!(error = %e, "Placement rejected");
                })?;
                self.held = None;
                info!(%rank, to = %peg, "Dropped disc");
                Ok(PlayerEvent::Placed { rank, to: peg })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HanoiConfig;

    #[test]
    fn test_invalid_selection() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
        let mut player = ManualPlayer::new();
        assert_eq!(player.select(&mut tower, 3), Err(MoveError::InvalidSelection(3)));
        assert_eq!(player.held(), None);
    }

    #[test]
    fn test_empty_source_selection() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
        let mut player = ManualPlayer::new();
        assert_eq!(
            player.select(&mut tower, 2),
            Err(MoveError::EmptySourceSelection(PegId::Right))
        );
        assert!(tower.is_settled());
    }

    #[test]
    fn test_lift_then_place() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
        let mut player = ManualPlayer::new();
        let lifted = player.select(&mut tower, 0).unwrap();
        assert_eq!(lifted, PlayerEvent::Lifted { rank: Rank::new(1), from: PegId::Left });
        while tower.in_motion().is_some() {
            tower.tick_all();
        }
        let placed = player.select(&mut tower, 2).unwrap();
        assert_eq!(placed, PlayerEvent::Placed { rank: Rank::new(1), to: PegId::Right });
        assert_eq!(player.held(), None);
    }
}
