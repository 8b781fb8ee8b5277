use ratatui::style::Color;
use ratatui::{
    layout::{Alignment, Rect, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;
use glint::engine::Mode;

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    // byte slicing below needs single-byte chars
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

pub fn format_timer(seconds: u64) -> String {
    if seconds >= 60 {
        let minutes = seconds / 60;
        let secs = seconds % 60;
        format!("{}:{:02}", minutes, secs)
    } else {
        format!("{}s", seconds)
    }
}

pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "ready",
        Mode::CountdownPending => "get ready",
        Mode::Playing => "reading",
        Mode::Paused => "paused",
        Mode::Finished => "done",
    }
}

pub fn render_header(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let sub = Style::default().fg(hex_to_rgb(&app.theme.sub));

    let header_spans = vec![
        Span::styled(
            "glint",
            Style::default()
                .fg(hex_to_rgb(&app.theme.main))
                .add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::styled(format!(" | {}", app.source_label), sub),
        Span::styled(format!(" | {} wpm", snapshot.rate), sub),
        Span::styled(format!(" | {}", mode_label(snapshot.mode)), sub),
    ];

    let header_row_area = Rect::new(0, 1, f.area().width, 1);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(82),
            Constraint::Fill(1),
        ])
        .split(header_row_area);

    f.render_widget(Paragraph::new(Line::from(header_spans)), header_layout[1]);
}

pub fn footer_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "space/enter: start | ←/→: speed | esc: quit",
        Mode::CountdownPending => "space: skip | s: stop | r: reset | esc: quit",
        Mode::Playing | Mode::Paused => "space: pause/resume | ←/→: speed | s: stop | r: reset | esc: quit",
        Mode::Finished => "enter: read again | r: reset | esc: quit",
    }
}

pub fn render_footer(f: &mut Frame, app: &App) {
    let height = f.area().height;
    if height == 0 {
        return;
    }
    let footer = Paragraph::new(footer_hint(app.mode()))
        .style(Style::default().fg(hex_to_rgb(&app.theme.sub)))
        .alignment(Alignment::Center);
    f.render_widget(footer, Rect::new(0, height - 1, f.area().width, 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_colors() {
        assert_eq!(hex_to_rgb("#e2b714"), Color::Rgb(0xe2, 0xb7, 0x14));
        assert_eq!(hex_to_rgb("nope"), Color::White);
    }

    #[test]
    fn non_ascii_colors_fall_back_to_white() {
        assert_eq!(hex_to_rgb("#aébcd"), Color::White);
        assert_eq!(hex_to_rgb("#ééé"), Color::White);
    }

    #[test]
    fn timer_switches_to_minutes() {
        assert_eq!(format_timer(42), "42s");
        assert_eq!(format_timer(125), "2:05");
    }
}
