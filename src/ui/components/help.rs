use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::centered_rect;
use super::super::theme::*;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" ❓ Keybindings ", title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style(true))
        .style(normal_style());

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(inner);

    let left = vec![
        section("Vibe input"),
        Line::from(Span::raw("")),
        key_line("/ or i", "Type a vibe"),
        key_line("Enter", "Discover"),
        key_line("Ctrl-U", "Clear input"),
        key_line("Esc", "Stop typing"),
        Line::from(Span::raw("")),
        section("Start screen"),
        Line::from(Span::raw("")),
        key_line("← / → 1-7", "Pick tag"),
        key_line("Enter", "Discover"),
    ];

    let right = vec![
        section("Results"),
        Line::from(Span::raw("")),
        key_line("↑ ↓ ← →", "Move between cards"),
        key_line("Enter / o", "Stream on YouTube"),
        key_line("r", "Refresh beats"),
        key_line("R", "Start over"),
        Line::from(Span::raw("")),
        key_line("?", "Toggle this help"),
        key_line("q", "Quit"),
    ];

    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(Paragraph::new(right), cols[1]);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {title}"), hot_pink_style().add_modifier(Modifier::BOLD)))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", muted_style()),
        Span::styled(format!("{key:<10}"), accent_style()),
        Span::styled(desc.to_string(), normal_style()),
    ])
}
