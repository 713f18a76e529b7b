//! Autonomous playback of the optimal plan.

use super::PlayerEvent;
use crate::games::hanoi::{Move, MoveError, PegId, Rank, Tower, plan};
use tracing::{debug, error, info, instrument};

/// Progress of autonomous playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoPhase {
    /// Waiting for the start signal.
    #[default]
    Waiting,
    /// Executing the move at this index.
    Executing(usize),
    /// Every move has been played.
    Completed,
}

/// The disc chosen for the current move.
///
/// Read once when the move begins and never re-read mid-motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveMove {
    rank: Rank,
    lifted: bool,
    placed: bool,
}

/// Plays the optimal plan one move at a time.
///
/// Each call to [`AutoPlayer::step`] issues at most one command and the next
/// move starts only once the previous disc has come to rest.
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    plan: Vec<Move>,
    phase: AutoPhase,
    active: Option<ActiveMove>,
}

impl AutoPlayer {
    /// Plans the solution moving `disc_count` discs from `source` to
    /// `destination`.
    #[instrument]
    pub fn new(source: PegId, destination: PegId, disc_count: usize) -> Self {
        let auxiliary = source.third(destination);
        let plan = plan(source, auxiliary, destination, disc_count);
        info!(moves = plan.len(), "Autonomous player ready");
        Self::with_plan(plan)
    }

    /// Plays an explicit list of moves.
    pub fn with_plan(plan: Vec<Move>) -> Self {
        Self {
            plan,
            phase: AutoPhase::Waiting,
            active: None,
        }
    }

    /// The moves to play.
    pub fn plan(&self) -> &[Move] {
        &self.plan
    }

    /// Current playback phase.
    pub fn phase(&self) -> AutoPhase {
        self.phase
    }

    /// True once every move has been played.
    pub fn is_completed(&self) -> bool {
        self.phase == AutoPhase::Completed
    }

    /// Handles the start signal. Ignored unless waiting.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.phase != AutoPhase::Waiting {
            debug!(phase = ?self.phase, "Start ignored");
            return;
        }
        self.phase = if self.plan.is_empty() {
            AutoPhase::Completed
        } else {
            AutoPhase::Executing(0)
        };
        info!("Autonomous playback started");
    }

    /// Issues the next command of the current move, if its disc is ready.
    ///
    /// # Errors
    ///
    /// Any error means the tower no longer matches the plan. The plan is
    /// correct by construction, so callers should treat this as fatal.
    #[instrument(skip(self, tower), fields(phase = ?self.phase))]
    pub fn step(&mut self, tower: &mut Tower) -> Result<Option<PlayerEvent>, MoveError> {
        let AutoPhase::Executing(index) = self.phase else {
            return Ok(None);
        };
        let Some(&current) = self.plan.get(index) else {
            self.phase = AutoPhase::Completed;
            return Ok(None);
        };

        let mut active = match self.active {
            Some(active) => active,
            None => {
                let rank = tower
                    .peg(current.from)
                    .top_rank()
                    .ok_or(MoveError::EmptySourceSelection(current.from))?;
                debug!(%rank, %current, "Beginning move");
                ActiveMove {
                    rank,
                    lifted: false,
                    placed: false,
                }
            }
        };

        if tower.disc(active.rank).is_some_and(|disc| disc.is_busy()) {
            self.active = Some(active);
            return Ok(None);
        }

        let event = if !active.lifted {
            let lifted = tower.lift(current.from).inspect_err(|e| {
                error!(error = %e, %current, "Lift failed during autonomous playback");
            })?;
            if lifted != active.rank {
                return Err(MoveError::NotOnTop {
                    rank: active.rank,
                    peg: current.from,
                });
            }
            active.lifted = true;
            Some(PlayerEvent::Lifted {
                rank: active.rank,
                from: current.from,
            })
        } else if !active.placed {
            tower.place(active.rank, current.to).inspect_err(|e| {
                error!(error = %e, %current, "Place failed during autonomous playback");
            })?;
            active.placed = true;
            Some(PlayerEvent::Placed {
                rank: active.rank,
                to: current.to,
            })
        } else {
            let step = index + 1;
            let total = self.plan.len();
            info!("step {} / {} completed", step, total);
            self.active = None;
            self.phase = if step == total {
                info!("Autonomous playback completed");
                AutoPhase::Completed
            } else {
                AutoPhase::Executing(step)
            };
            return Ok(Some(PlayerEvent::MoveCompleted { step, total }));
        };

        self.active = Some(active);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HanoiConfig;

    fn run(player: &mut AutoPlayer, tower: &mut Tower) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        let mut frames = 0;
        while !player.is_completed() {
            if let Some(event) = player.step(tower).unwrap() {
                events.push(event);
            }
            tower.tick_all();
            frames += 1;
            assert!(frames < 1_000_000, "playback never completed");
        }
        events
    }

    #[test]
    fn test_waits_for_start() {
        let mut tower = Tower::new(&HanoiConfig::default().with_disc_count(2));
        let mut player = AutoPlayer::new(PegId::Left, PegId::Right, 2);
        assert_eq!(player.step(&mut tower).unwrap(), None);
        assert!(tower.is_settled());
        assert_eq!(player.phase(), AutoPhase::Waiting);
    }

    #[test]
    fn test_plays_to_completion() {
        let config = HanoiConfig::default().with_disc_count(3).with_step(50);
        let mut tower = Tower::new(&config);
        let mut player = AutoPlayer::new(PegId::Left, PegId::Right, 3);
        player.start();

        let events = run(&mut player, &mut tower);
        let completed = events
            .iter()
            .filter(|e| matches!(e, PlayerEvent::MoveCompleted { .. }))
            .count();
        assert_eq!(completed, 7);
        assert_eq!(events.last(), Some(&PlayerEvent::MoveCompleted { step: 7, total: 7 }));
        assert!(tower.is_solved(PegId::Right));
    }

    #[test]
    fn test_next_move_waits_for_rest() {
        let config = HanoiConfig::default().with_disc_count(2).with_step(1);
        let mut tower = Tower::new(&config);
        let mut player = AutoPlayer::new(PegId::Left, PegId::Right, 2);
        player.start();

        // lift, then a long rise during which nothing else is issued
        assert!(matches!(player.step(&mut tower).unwrap(), Some(PlayerEvent::Lifted { .. })));
        for _ in 0..10 {
            tower.tick_all();
            assert_eq!(player.step(&mut tower).unwrap(), None);
        }
    }

    #[test]
    fn test_start_with_empty_plan_completes() {
        let mut player = AutoPlayer::with_plan(Vec::new());
        player.start();
        assert!(player.is_completed());
    }

    #[test]
    fn test_corrupted_tower_is_fatal() {
        let config = HanoiConfig::default().with_disc_count(2).with_step(100);
        let mut tower = Tower::new(&config);
        // a plan that puts disc 0 onto disc 1
        let mut player = AutoPlayer::with_plan(vec![
            Move::new(PegId::Left, PegId::Middle),
            Move::new(PegId::Left, PegId::Middle),
        ]);
        player.start();

        let mut result = Ok(None);
        for _ in 0..100 {
            result = player.step(&mut tower);
            if result.is_err() {
                break;
            }
            tower.tick_all();
        }
        assert!(matches!(result, Err(MoveError::RuleViolation { .. })));
    }
}
