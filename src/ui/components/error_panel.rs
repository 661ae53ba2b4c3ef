use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::centered_rect;
use super::super::theme::*;

pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::raw("")),
        Line::from(Span::styled("✖  CURATION FAILED.", error_style())),
        Line::from(Span::raw("")),
        Line::from(Span::styled(message.to_string(), normal_style())),
        Line::from(Span::raw("")),
        Line::from(Span::styled(" [Enter / R] Retry Sync ", button_style(true))),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(error_style())
                .style(normal_style().bg(BG_ALT)),
        );
    f.render_widget(panel, popup);
}
