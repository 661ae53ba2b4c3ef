use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Phase};
use crate::recommend::prompt::SONG_COUNT;
use super::song_card::{render_song_card, CARD_HEIGHT};
use super::super::theme::*;

const MIN_CARD_WIDTH: u16 = 34;
const MAX_COLUMNS: usize = 4;

/// Columns of cards that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS)
}

pub fn vibe_heading(theme: &str) -> String {
    format!("VIBE: \"{theme}\"")
}

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let Phase::Results { theme, songs, selected, fetched_at } = &state.phase else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // heading
            Constraint::Min(0),    // card grid
            Constraint::Length(1), // footer
        ])
        .split(area);

    let refresh = if state.can_refresh() { "[r] ⟳ Refresh Beats" } else { "" };
    let heading = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", hot_pink_style()),
            Span::styled("OPTIMIZED FOR COMMUTE", accent_style()),
        ]),
        Line::from(Span::styled(vibe_heading(theme), title_style())),
        Line::from(Span::styled(
            format!("당신의 공간을 감각으로 채울 {SONG_COUNT}가지 선율입니다."),
            dim_style(),
        )),
        Line::from(vec![
            Span::styled(format!("Curated at {}  ", fetched_at.format("%H:%M")), muted_style()),
            Span::styled(refresh, hot_pink_style()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(true))
            .style(normal_style().bg(BG)),
    );
    f.render_widget(heading, chunks[0]);

    if songs.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No tracks came back for this vibe. Press [r] to try again.",
            muted_style(),
        )));
        f.render_widget(empty, chunks[1]);
    } else {
        render_grid(f, chunks[1], state, *selected);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        "F U T U R E   S O U N D   L A B O R A T O R I E S",
        muted_style(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

/// Lays cards out row by row, scrolled so the selected card stays visible.
fn render_grid(f: &mut Frame, area: Rect, state: &AppState, selected: usize) {
    let songs = state.songs();
    let cols = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = (selected / cols).saturating_sub(visible_rows - 1);
    let width = area.width / cols as u16;

    for (i, song) in songs.iter().enumerate().skip(first_row * cols) {
        let row = i / cols - first_row;
        if row >= visible_rows {
            break;
        }
        let col = i % cols;
        let y = area.y + row as u16 * CARD_HEIGHT;
        let rect = Rect {
            x: area.x + col as u16 * width,
            y,
            width,
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        render_song_card(f, rect, song, i, i == selected);
    }
}
