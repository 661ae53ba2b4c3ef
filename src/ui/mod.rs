pub mod components;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, Phase};
use self::theme::*;
use self::components::{
    error_panel::render_error,
    header::render_header,
    help::render_help,
    hero::render_hero,
    loading::render_loading,
    results::render_results,
};

/// Root render function — called every frame
pub fn render(f: &mut Frame, state: &AppState) {
    let size = f.area();
    f.render_widget(Block::default().style(normal_style().bg(BG)), size);

    // ── Outer layout: header + body ─────────────────────────────────────
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // brand + theme input
            Constraint::Min(0),    // current phase
        ])
        .split(size);

    render_header(f, chunks[0], state);

    match &state.phase {
        Phase::Idle => render_hero(f, chunks[1], state),
        Phase::Loading { theme } => render_loading(f, chunks[1], state, theme),
        Phase::Error { message } => render_error(f, chunks[1], message),
        Phase::Results { .. } => render_results(f, chunks[1], state),
    }

    // ── Help overlay ─────────────────────────────────────────────────────
    if state.show_help {
        render_help(f, size);
    }

    // ── Notification toast ────────────────────────────────────────────────
    if let Some(ref notif) = state.notification {
        render_notification(f, size, notif.is_error, &notif.message);
    }
}

fn render_notification(f: &mut Frame, area: Rect, is_error: bool, message: &str) {
    let toast_width = (message.width().min(60) as u16 + 6).min(area.width);
    let toast_area = Rect {
        x: area.width.saturating_sub(toast_width + 2),
        y: area.height.saturating_sub(4),
        width: toast_width,
        height: 3.min(area.height),
    };

    f.render_widget(Clear, toast_area);

    let style = if is_error { error_style() } else { success_style() };
    let icon = if is_error { "✖ " } else { "✔ " };

    let para = Paragraph::new(Line::from(vec![
        Span::styled(icon, style),
        Span::styled(message.to_string(), style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style),
    )
    .alignment(Alignment::Left);

    f.render_widget(para, toast_area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
