//! Application state and logic.

use anyhow::Result;
use strictly_hanoi::{AutoPhase, Driver, GameSession, Mode, MoveError, PlayerEvent};
use tracing::{debug, instrument, warn};

use super::input::UserCommand;

/// Main application state.
pub struct App {
    session: GameSession,
    status_message: String,
    progress: Option<(usize, usize)>,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: GameSession) -> Self {
        let status_message = initial_status(session.mode());
        Self {
            session,
            status_message,
            progress: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Completed and total moves of autonomous playback.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.progress
    }

    /// Applies a user command. Quit is handled by the caller.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: UserCommand) {
        match command {
            UserCommand::Start => {
                self.session.start();
                if let Driver::Auto(player) = self.session.driver()
                    && let AutoPhase::Executing(_) = player.phase()
                {
                    self.progress = Some((0, player.plan().len()));
                    self.status_message = "Solving...".to_string();
                }
            }
            UserCommand::Select(index) => match self.session.select(index) {
                Ok(Some(event)) => self.status_message = event.to_string(),
                Ok(None) => {}
                Err(e) if e.is_transient() => {
                    debug!(error = %e, "Selection deferred");
                    self.status_message = "Wait for the disc to stop moving.".to_string();
                }
                Err(e) => {
                    warn!(error = %e, "Selection rejected");
                    self.status_message = rejection_message(&e);
                }
            },
            UserCommand::Restart => {
                self.session.restart();
                self.progress = None;
                self.status_message = initial_status(self.session.mode());
            }
            UserCommand::Quit => {}
        }
    }

    /// Advances one frame.
    ///
    /// Errors from autonomous playback are returned so the caller can abort.
    pub fn advance(&mut self) -> Result<()> {
        let was_finished = self.session.is_finished();
        if let Some(event) = self.session.advance()? {
            debug!(%event, "Player event");
            if let PlayerEvent::MoveCompleted { step, total } = event {
                self.progress = Some((step, total));
            }
            if !self.session.is_finished() {
                self.status_message = event.to_string();
            }
        }
        if !was_finished && self.session.is_finished() {
            self.status_message = "Solved! Press 'r' to restart or 'q' to quit.".to_string();
        }
        Ok(())
    }
}

fn initial_status(mode: Mode) -> String {
    match mode {
        Mode::Auto => "Press 's' to start.".to_string(),
        Mode::Manual => "Press '1', '2' or '3' to pick up a disc.".to_string(),
    }
}

fn rejection_message(error: &MoveError) -> String {
    match error {
        MoveError::RuleViolation { rank, top } => format!(
            "Disc {} cannot go on disc {}. Pick another peg.",
            rank.label(),
            top.label()
        ),
        MoveError::EmptySourceSelection(peg) => format!("The {} peg is empty.", peg),
        MoveError::InvalidSelection(_) => "Only pegs 1, 2 and 3 exist.".to_string(),
        other => other.to_string(),
    }
}
