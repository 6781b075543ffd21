//! Shared layout and widget helpers.

use crate::confetti::{ConfettiOverlay, GlyphKind};
use crate::session::{Phase, PlayerSlot, Scoreboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Splits the frame into title, body and status rows.
pub fn frame_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(area)
}

/// A rect of the given size centered in the area.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

/// Draws the bold cyan title row.
pub fn draw_title(frame: &mut Frame, area: Rect, text: &str) {
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draws the bordered yellow status row.
pub fn draw_status(frame: &mut Frame, area: Rect, text: &str) {
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// One-line scoreboard, names and tallies.
pub fn score_line(board: Scoreboard, name_a: &str, name_b: &str) -> String {
    format!(
        "{}: {}   {}: {}",
        name_a,
        board.get(PlayerSlot::A),
        name_b,
        board.get(PlayerSlot::B)
    )
}

/// One-line phase description for timer-driven games.
pub fn phase_line(phase: Phase, name_a: &str, name_b: &str, idle_hint: &str) -> String {
    let name = |slot: PlayerSlot| match slot {
        PlayerSlot::A => name_a,
        PlayerSlot::B => name_b,
    };
    match phase {
        Phase::Ready => idle_hint.to_string(),
        Phase::Turn { slot, clock } => match clock {
            Some(clock) => format!("{}'s turn - {}s left", name(slot), clock.display_secs()),
            None => format!("{}'s turn", name(slot)),
        },
        Phase::Transition { next, clock } => {
            format!("{} is up in {}s...", name(next), clock.display_secs())
        }
        Phase::Finished(outcome) => match outcome.winner() {
            Some(slot) => format!("{} wins! [r] rematch, [Esc] menu", name(slot)),
            None => "It's a tie! [r] rematch, [Esc] menu".to_string(),
        },
    }
}

/// Paints the confetti pieces over whatever is already drawn.
pub fn draw_confetti(frame: &mut Frame, overlay: &ConfettiOverlay) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    for piece in overlay.visible() {
        let x = area.x + (u32::from(area.width) * u32::from(piece.x_percent) / 100) as u16;
        let y = area.y + (f32::from(area.height) * piece.progress) as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let color = match piece.glyph {
            GlyphKind::Heart => Color::LightRed,
            GlyphKind::Sparkle => Color::LightYellow,
        };
        let cell = Paragraph::new(piece.glyph.symbol()).style(Style::default().fg(color));
        frame.render_widget(cell, Rect::new(x, y, 1, 1));
    }
}
