//! Game session: one tower, one player, one frame counter.

use crate::games::hanoi::{MoveError, Tower};
use crate::players::{AutoPlayer, ManualPlayer, PlayerEvent};
use crate::{ConfigError, HanoiConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// How the discs are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The optimal plan plays itself after a start signal.
    Auto,
    /// The user selects pegs.
    Manual,
}

/// The player driving a session.
#[derive(Debug, Clone)]
pub enum Driver {
    /// Autonomous playback.
    Auto(AutoPlayer),
    /// Manual selection.
    Manual(ManualPlayer),
}

impl Driver {
    fn for_mode(mode: Mode, config: &HanoiConfig) -> Self {
        match mode {
            Mode::Auto => Driver::Auto(AutoPlayer::new(
                *config.source(),
                *config.destination(),
                *config.disc_count(),
            )),
            Mode::Manual => Driver::Manual(ManualPlayer::new()),
        }
    }
}

/// Everything a running game needs between frames.
///
/// Within a frame, commands are resolved before discs are advanced, so the
/// peg stacks never lag behind the last command issued.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: HanoiConfig,
    mode: Mode,
    tower: Tower,
    driver: Driver,
    frame: u64,
}

impl GameSession {
    /// Validates `config` and sets up a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is not playable.
    #[instrument(skip(config))]
    pub fn new(config: HanoiConfig, mode: Mode) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(%mode, disc_count = config.disc_count(), "Creating game session");
        Ok(Self {
            tower: Tower::new(&config),
            driver: Driver::for_mode(mode, &config),
            config,
            mode,
            frame: 0,
        })
    }

    /// The puzzle state.
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// The active driver.
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// The session's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The session's configuration.
    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// True once the discs all rest on the destination peg.
    pub fn is_finished(&self) -> bool {
        self.tower.is_solved(*self.config.destination())
    }

    /// Sends the start signal. Manual sessions ignore it.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        match &mut self.driver {
            Driver::Auto(player) => player.start(),
            Driver::Manual(_) => debug!("Start ignored in manual mode"),
        }
    }

    /// Forwards a peg selection to the manual player.
    ///
    /// Auto sessions ignore selections and return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`ManualPlayer::select`].
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> Result<Option<PlayerEvent>, MoveError> {
        match &mut self.driver {
            Driver::Manual(player) => player.select(&mut self.tower, index).map(Some),
            Driver::Auto(_) => {
                debug!("Selection ignored in auto mode");
                Ok(None)
            }
        }
    }

    /// Advances one frame: the driver's command first, then the motion.
    ///
    /// # Errors
    ///
    /// An error from autonomous playback means the tower diverged from the
    /// plan and the session cannot continue.
    #[instrument(skip(self), fields(frame = self.frame))]
    pub fn advance(&mut self) -> Result<Option<PlayerEvent>, MoveError> {
        let event = match &mut self.driver {
            Driver::Auto(player) => player.step(&mut self.tower).inspect_err(|e| {
                error!(error = %e, "Autonomous playback diverged from the plan");
            })?,
            Driver::Manual(_) => None,
        };
        self.tower.tick_all();
        self.frame += 1;
        Ok(event)
    }

    /// Discards the current game and starts over with the same settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game session");
        self.tower = Tower::new(&self.config);
        self.driver = Driver::for_mode(self.mode, &self.config);
        self.frame = 0;
    }
}
