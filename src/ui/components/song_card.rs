use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::song::{rank_label, Song};
use super::super::theme::*;

/// Rows taken by one card including its border.
pub const CARD_HEIGHT: u16 = 10;

/// Cuts `text` to at most `max` terminal columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn render_song_card(f: &mut Frame, area: Rect, song: &Song, index: usize, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(if selected { hot_pink_style() } else { border_style(false) })
        .style(normal_style().bg(if selected { SURFACE_SEL } else { BG }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // rank + badge
            Constraint::Length(1), // title
            Constraint::Length(1), // artist
            Constraint::Min(1),    // reason
            Constraint::Length(1), // link
        ])
        .split(inner);

    let width = inner.width as usize;

    // Rank on the left, origin badge pushed to the right edge.
    let rank = rank_label(index);
    let badge = format!(" {} ", song.origin_badge());
    let gap = width.saturating_sub(rank.width() + badge.width());
    let top = Line::from(vec![
        Span::styled(rank, title_style().add_modifier(Modifier::ITALIC)),
        Span::raw(" ".repeat(gap)),
        Span::styled(badge, badge_style(song.is_korean)),
    ]);
    f.render_widget(Paragraph::new(top), rows[0]);

    let name_style = if selected { selected_style() } else { normal_style().add_modifier(Modifier::BOLD) };
    f.render_widget(
        Paragraph::new(Span::styled(truncate_to_width(&song.title, width), name_style)),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled(truncate_to_width(&song.artist, width), dim_style())),
        rows[2],
    );

    let reason = Paragraph::new(Line::from(vec![
        Span::styled("⚡ ", accent_style()),
        Span::styled(song.reason.clone(), dim_style().add_modifier(Modifier::ITALIC)),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(reason, rows[3]);

    let link = if selected { "▶ Stream Beat  [Enter]" } else { "▶ Stream Beat" };
    f.render_widget(
        Paragraph::new(Span::styled(link, if selected { hot_pink_style() } else { muted_style() })),
        rows[4],
    );
}
