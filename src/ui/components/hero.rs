use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{AppState, ThemeTag};
use super::super::theme::*;

pub fn render_hero(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // copy
            Constraint::Min(5),    // tags
        ])
        .split(area);

    let copy = Paragraph::new(vec![
        Line::from(Span::raw("")),
        Line::from(Span::styled(" ELEVATING YOUR TRANSIT ", selected_style())),
        Line::from(Span::raw("")),
        Line::from(vec![
            Span::styled("THE ", title_style()),
            Span::styled("ELECTRIC", hot_pink_style()),
            Span::styled(" SOUND.", title_style()),
        ]),
        Line::from(Span::raw("")),
        Line::from(Span::styled("평범한 이동 시간을 감각적인 페스티벌로.", dim_style())),
        Line::from(Span::styled("AI가 설계한 세계 최고의 플레이리스트.", dim_style())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(copy, chunks[0]);

    let mut chips: Vec<Span> = Vec::new();
    for (i, tag) in ThemeTag::all().iter().enumerate() {
        let is_sel = i == state.selected_tag;
        chips.push(Span::styled(format!(" {} {tag} ", i + 1), tag_style(i, is_sel)));
        chips.push(Span::raw("  "));
    }

    let tags = Paragraph::new(vec![
        Line::from(chips),
        Line::from(Span::raw("")),
        Line::from(Span::styled(
            "←/→ or 1-7 pick a tag · Enter discover · / type your own · 7 tracks selected for you",
            muted_style(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(Span::styled(" ✨ Pick a vibe ", title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(!state.editing))
            .style(normal_style().bg(BG)),
    );
    f.render_widget(tags, chunks[1]);
}
