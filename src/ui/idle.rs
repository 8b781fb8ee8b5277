use crate::app::App;
use crate::ui::utils::{hex_to_rgb, render_footer, render_header};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

const PREVIEW_LINES: usize = 6;

pub fn draw(f: &mut Frame, app: &App) {
    render_header(f, app);

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(PREVIEW_LINES as u16 + 2),
            Constraint::Fill(1),
        ])
        .split(f.area());

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(80),
            Constraint::Fill(1),
        ])
        .split(vertical_layout[1]);

    let area = horizontal_layout[1];
    let sub = Style::default().fg(hex_to_rgb(&app.theme.sub));

    let mut lines: Vec<Line> = app
        .preview_lines
        .iter()
        .take(PREVIEW_LINES)
        .map(|l| Line::styled(l.as_str(), sub))
        .collect();

    if lines.is_empty() {
        lines.push(Line::styled("nothing to read", sub));
    } else if app.preview_lines.len() > PREVIEW_LINES {
        lines.push(Line::styled("...", sub));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);

    render_footer(f, app);
}
