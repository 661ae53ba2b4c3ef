use ratatui::style::{Color, Modifier, Style};

// ─── Color Palette ───────────────────────────────────────────────────────────
pub const BG:          Color = Color::Rgb(13,  13,  17);
pub const BG_ALT:      Color = Color::Rgb(20,  20,  30);
pub const SURFACE:     Color = Color::Rgb(28,  28,  40);
pub const SURFACE_SEL: Color = Color::Rgb(40,  35,  65);

pub const PRIMARY:     Color = Color::Rgb(99,  102, 241); // indigo
pub const ACCENT:      Color = Color::Rgb(0,   245, 255); // neon cyan
pub const HOT_PINK:    Color = Color::Rgb(236, 72,  153); // brand pink
pub const SLATE:       Color = Color::Rgb(15,  23,  42);  // domestic badge

pub const TEXT:        Color = Color::Rgb(220, 220, 235);
pub const TEXT_DIM:    Color = Color::Rgb(140, 140, 160);
pub const TEXT_MUTED:  Color = Color::Rgb(80,  80,  100);

pub const BORDER:      Color = Color::Rgb(50,  45,  80);
pub const BORDER_FOCUSED: Color = PRIMARY;

pub const ERROR:       Color = Color::Rgb(255, 90,  90);

/// One colour per preset theme tag, in tag order.
pub const TAG_COLORS: [Color; 7] = [
    Color::Rgb(37,  99,  235), // blue
    Color::Rgb(225, 29,  72),  // rose
    Color::Rgb(217, 119, 6),   // amber
    Color::Rgb(100, 116, 139), // slate
    Color::Rgb(101, 163, 13),  // lime
    Color::Rgb(147, 51,  234), // purple
    Color::Rgb(5,   150, 105), // emerald
];

// ─── Styles ──────────────────────────────────────────────────────────────────
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn accent_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(SURFACE_SEL)
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn muted_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUSED)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn hot_pink_style() -> Style {
    Style::default().fg(HOT_PINK).add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn success_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn badge_style(is_korean: bool) -> Style {
    let bg = if is_korean { SLATE } else { HOT_PINK };
    Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD)
}

pub fn tag_style(index: usize, selected: bool) -> Style {
    let color = TAG_COLORS[index % TAG_COLORS.len()];
    if selected {
        Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).bg(SURFACE)
    }
}

pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).bg(PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MUTED).bg(SURFACE)
    }
}
