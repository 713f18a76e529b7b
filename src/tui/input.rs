//! Key mapping for the terminal UI.

use crossterm::event::KeyCode;

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Start autonomous playback.
    Start,
    /// Select a peg by index (keys '1'-'9' map to 0-8).
    Select(usize),
    /// Start over.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command.
///
/// Digits past '3' still produce a selection so the out-of-range choice can
/// be reported instead of silently dropped.
pub fn command_for(key: KeyCode) -> Option<UserCommand> {
    match key {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UserCommand::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UserCommand::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| UserCommand::Select(digit as usize - 1)),
        _ => None,
    }
}
