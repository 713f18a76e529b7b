//! Stateless UI rendering for the tower.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};
use strictly_hanoi::{Disc, HanoiConfig, Mode, Tower};

use super::app::App;

const DISC_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Tower
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let title = Paragraph::new(format!(
        "Strictly Hanoi - {} discs ({} mode)",
        session.tower().disc_count(),
        session.mode()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_tower(frame, chunks[1], session.tower(), session.config());
    draw_status(frame, chunks[2], app);

    let help = match session.mode() {
        Mode::Auto => "s: start  r: restart  q: quit",
        Mode::Manual => "1/2/3: select peg  r: restart  q: quit",
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut text = app.status_message().to_string();
    if let Some((done, total)) = app.progress() {
        text = format!("[{done}/{total}] {text}");
    }
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_tower(frame: &mut Frame, area: Rect, tower: &Tower, config: &HanoiConfig) {
    let width = f64::from(config.peg_spacing() * 4);
    let height = f64::from(config.floor_y() + config.disc_thickness());

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let floor = flip(height, *config.floor_y());
            ctx.draw(&CanvasLine::new(0.0, floor, width, floor, Color::Gray));

            for peg in tower.pegs() {
                let x = f64::from(*peg.slot_x());
                ctx.draw(&CanvasLine::new(
                    x,
                    floor,
                    x,
                    flip(height, *config.peg_top_y()),
                    Color::Gray,
                ));
                ctx.print(
                    x,
                    flip(height, config.floor_y() + config.disc_thickness() / 2),
                    Line::from(format!("{}", peg.id().index() + 1)),
                );
            }

            ctx.layer();
            for disc in tower.discs() {
                draw_disc(ctx, disc, *config.disc_thickness(), height);
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_disc(ctx: &mut Context<'_>, disc: &Disc, thickness: i32, height: f64) {
    let position = disc.position();
    let half = f64::from(*disc.width()) / 2.0;
    let centre = f64::from(position.x);
    // Canvas rectangles are anchored at their bottom-left corner.
    let bottom = flip(height, position.y + thickness);
    let color = DISC_COLORS[disc.rank().value() % DISC_COLORS.len()];

    ctx.draw(&Rectangle {
        x: centre - half,
        y: bottom,
        width: half * 2.0,
        height: f64::from(thickness),
        color,
    });
    ctx.print(
        centre,
        bottom + f64::from(thickness) / 2.0,
        Line::styled(disc.rank().label(), Style::default().fg(color)),
    );
}

/// Converts a downward-growing y to the canvas' upward-growing axis.
fn flip(height: f64, y: i32) -> f64 {
    height - f64::from(y)
}
