//! Game configuration.
//!
//! Defaults reproduce the classic 800x600 layout: pegs at x = 200, 400 and
//! 600, a ground line at y = 550 and a carry lane at y = 100.

use crate::games::hanoi::{PegId, Rank};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest playable disc count. The optimal plan for it has about 16.7
/// million moves.
pub const MAX_DISC_COUNT: usize = 24;

/// Tower of Hanoi configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct HanoiConfig {
    /// Number of discs.
    disc_count: usize,
    /// Distance a disc moves per tick.
    step: u32,
    /// Y of the carry lane discs travel along.
    carry_height: i32,
    /// Vertical size of a disc.
    disc_thickness: i32,
    /// Width of the bottom disc (rank 0).
    disc_max_width: i32,
    /// Width of the top disc (rank N-1).
    disc_min_width: i32,
    /// Y of the ground line.
    floor_y: i32,
    /// Y of the top of each peg.
    peg_top_y: i32,
    /// Horizontal distance between pegs; peg `i` stands at `(i + 1) * spacing`.
    peg_spacing: i32,
    /// Frame interval of the presentation loop, in milliseconds.
    frame_millis: u64,
    /// Peg the discs start on.
    source: PegId,
    /// Peg autonomous play moves the discs to.
    destination: PegId,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            disc_count: 6,
            step: 5,
            carry_height: 100,
            disc_thickness: 30,
            disc_max_width: 200,
            disc_min_width: 45,
            floor_y: 550,
            peg_top_y: 200,
            peg_spacing: 200,
            frame_millis: 16,
            source: PegId::Left,
            destination: PegId::Right,
        }
    }
}

impl HanoiConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            disc_count = config.disc_count,
            step = config.step,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that the configuration describes a playable layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the disc count is zero or above
    /// [`MAX_DISC_COUNT`], the step, disc thickness or peg spacing is not
    /// positive, the disc widths are inverted, the source and destination pegs
    /// coincide, the layout does not fit in `i32` coordinates, or the carry
    /// lane is not above every peg top and every reachable resting height.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disc_count == 0 {
            return Err(ConfigError::new("disc_count must be at least 1"));
        }
        if self.disc_count > MAX_DISC_COUNT {
            return Err(ConfigError::new(format!(
                "disc_count ({}) exceeds the maximum of {}",
                self.disc_count, MAX_DISC_COUNT
            )));
        }
        if self.step == 0 {
            return Err(ConfigError::new("step must be greater than 0"));
        }
        if self.disc_thickness <= 0 {
            return Err(ConfigError::new("disc_thickness must be greater than 0"));
        }
        if self.peg_spacing <= 0 || self.peg_spacing.checked_mul(4).is_none() {
            return Err(ConfigError::new(format!(
                "peg_spacing ({}) must be positive and leave room for three pegs",
                self.peg_spacing
            )));
        }
        if self.disc_min_width > self.disc_max_width {
            return Err(ConfigError::new(format!(
                "disc_min_width ({}) exceeds disc_max_width ({})",
                self.disc_min_width, self.disc_max_width
            )));
        }
        if self.source == self.destination {
            return Err(ConfigError::new(format!(
                "source and destination are both the {} peg",
                self.source
            )));
        }

        let full_stack_rest = self.full_stack_rest().ok_or_else(|| {
            ConfigError::new(format!(
                "a stack of {} discs {} thick does not fit below y = {}",
                self.disc_count, self.disc_thickness, self.floor_y
            ))
        })?;
        if self.carry_height >= self.peg_top_y || self.carry_height >= full_stack_rest {
            return Err(ConfigError::new(format!(
                "carry_height ({}) must be above the peg top ({}) and a full stack ({})",
                self.carry_height, self.peg_top_y, full_stack_rest
            )));
        }

        debug!("Config is valid");
        Ok(())
    }

    /// Horizontal centre of a peg.
    pub fn peg_x(&self, peg: PegId) -> i32 {
        (peg.index() as i32 + 1) * self.peg_spacing
    }

    /// Drawn width of a disc; widths shrink linearly from rank 0.
    pub fn disc_width(&self, rank: Rank) -> i32 {
        let Ok(gaps) = i32::try_from(self.disc_count.saturating_sub(1)) else {
            return self.disc_min_width;
        };
        if gaps == 0 {
            return self.disc_max_width;
        }
        let indent = self.disc_max_width.saturating_sub(self.disc_min_width) / gaps;
        let rank = i32::try_from(rank.value()).unwrap_or(i32::MAX);
        self.disc_max_width
            .saturating_sub(rank.saturating_mul(indent))
            .max(self.disc_min_width)
    }

    /// Resting y of the top disc when every disc is on one peg.
    ///
    /// `None` if the stack height does not fit in `i32` coordinates.
    pub fn full_stack_rest(&self) -> Option<i32> {
        i32::try_from(self.disc_count)
            .ok()?
            .checked_mul(self.disc_thickness)
            .and_then(|height| self.floor_y.checked_sub(height))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
