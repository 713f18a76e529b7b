//! Terminal UI for Strictly Hanoi

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strictly_hanoi::{GameSession, HanoiConfig, Mode};
use tracing::{error, info, instrument};

use app::App;
use input::{UserCommand, command_for};

/// Run the animated tower in the terminal.
pub async fn run_tui(config: HanoiConfig, mode: Mode) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create("strictly_hanoi.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(%mode, "Starting Strictly Hanoi TUI");

    let frame_millis = *config.frame_millis();
    let session = GameSession::new(config, mode)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, App::new(session), frame_millis).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Frame loop: input, then one session frame, then drawing.
#[instrument(skip(terminal, app))]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    frame_millis: u64,
) -> Result<()> {
    let mut interval = tokio::time::interval(Duration::from_millis(frame_millis.max(1)));

    loop {
        interval.tick().await;

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match command_for(key.code) {
                Some(UserCommand::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(command) => app.apply(command),
                None => {}
            }
        }

        app.advance()?;
        terminal.draw(|f| ui::draw(f, &app))?;
    }
}
