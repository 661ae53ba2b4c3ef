use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::recommend::prompt::SONG_COUNT;
use super::results::grid_columns;
use super::song_card::CARD_HEIGHT;
use super::super::theme::*;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const EQ_CHARS: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}

fn bar_char(height: u8) -> &'static str {
    let idx = ((height as usize).saturating_sub(1)).min(EQ_CHARS.len() - 1);
    EQ_CHARS[idx]
}

pub fn render_loading(f: &mut Frame, area: Rect, state: &AppState, theme: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    // EQ Visualization
    let colors = [ACCENT, PRIMARY, HOT_PINK];
    let eq_spans: Vec<Span> = state
        .eq_bars
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            Span::styled(format!("{} ", bar_char(h)), Style::default().fg(colors[i % colors.len()]))
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", spinner_frame(state.tick)), hot_pink_style()),
            Span::styled(format!("Curating \"{theme}\""), title_style()),
        ]),
        Line::from(eq_spans),
        Line::from(Span::styled("AI가 당신의 출근길을 설계하는 중...", dim_style())),
    ];
    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(true))
            .style(normal_style().bg(BG)),
    );
    f.render_widget(banner, chunks[0]);

    render_skeletons(f, chunks[1], state.tick);
}

/// Placeholder cards in the same grid the results will use.
fn render_skeletons(f: &mut Frame, area: Rect, tick: u64) {
    let cols = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let shade = if (tick / 6) % 2 == 0 { "░" } else { "▒" };

    for i in 0..SONG_COUNT {
        let (row, col) = (i / cols, i % cols);
        if row >= visible_rows {
            break;
        }
        let width = area.width / cols as u16;
        let rect = Rect {
            x: area.x + col as u16 * width,
            y: area.y + row as u16 * CARD_HEIGHT,
            width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        let fill = shade.repeat(width.saturating_sub(4) as usize);
        let lines: Vec<Line> = [true, false, true, true, false, true, true]
            .iter()
            .map(|&filled| {
                let text = if filled { fill.clone() } else { String::new() };
                Line::from(Span::styled(text, muted_style()))
            })
            .collect();
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(false))
                .style(normal_style().bg(BG)),
        );
        f.render_widget(card, rect);
    }
}
