use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use super::loading::spinner_frame;
use super::super::theme::*;

const PLACEHOLDER: &str = "당신만의 바이브를 입력하세요...";

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(38), // brand
            Constraint::Min(10),    // theme input
            Constraint::Length(14), // discover button
        ])
        .split(area);

    render_brand(f, chunks[0], state);
    render_input(f, chunks[1], state);
    render_button(f, chunks[2], state);
}

fn render_brand(f: &mut Frame, area: Rect, state: &AppState) {
    let disc = spinner_frame(state.tick / 3);
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {disc} "), hot_pink_style()),
        Span::styled("COMMUTEBEAT", title_style()),
        Span::styled("  Sonic Curation v2.5", muted_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(false))
            .style(normal_style().bg(BG_ALT)),
    );
    f.render_widget(brand, area);
}

fn render_input(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.editing;
    let cursor = if focused && (state.tick / 5) % 2 == 0 { "│" } else { "" };

    let text = if state.input.is_empty() {
        Line::from(vec![
            Span::styled(" 󰍉 ", muted_style()),
            Span::styled(cursor, hot_pink_style()),
            Span::styled(PLACEHOLDER, muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" 󰍉 ", muted_style()),
            Span::styled(state.input.clone(), accent_style()),
            Span::styled(cursor, hot_pink_style()),
        ])
    };

    let hint = if focused { " Enter ▸ discover · Esc ▸ browse " } else { " / ▸ type a vibe " };
    let input = Paragraph::new(text).block(
        Block::default()
            .title(Span::styled(" Vibe ", title_style()))
            .title_bottom(Line::from(Span::styled(hint, muted_style())).alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused))
            .style(normal_style().bg(BG_ALT)),
    );
    f.render_widget(input, area);
}

fn render_button(f: &mut Frame, area: Rect, state: &AppState) {
    let label = if state.phase.is_loading() {
        format!("{} ", spinner_frame(state.tick))
    } else {
        "DISCOVER".to_string()
    };
    let enabled = state.can_submit();

    let button = Paragraph::new(Line::from(Span::styled(label, button_style(enabled))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(enabled))
                .style(button_style(enabled)),
        );
    f.render_widget(button, area);
}
