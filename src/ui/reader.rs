use crate::app::App;
use crate::ui::utils::{format_timer, hex_to_rgb, render_footer, render_header};
use glint::engine::{Mode, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    render_header(f, app);

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(7),
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

    let active_area = horizontal_layout[1];
    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // guide
            Constraint::Length(1), // word
            Constraint::Length(1), // guide
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Length(1), // status
            Constraint::Min(0),
        ])
        .split(active_area);

    // focal letter sits a little left of centre, where the eye lands first
    let anchor = active_area.width as usize * 2 / 5;
    let guide_style = Style::default().fg(hex_to_rgb(&app.theme.sub_alt));
    let guide = Line::from(vec![
        Span::raw(" ".repeat(anchor)),
        Span::styled("│", guide_style),
    ]);
    f.render_widget(Paragraph::new(guide.clone()), inner_chunks[0]);
    f.render_widget(Paragraph::new(guide), inner_chunks[2]);

    f.render_widget(Paragraph::new(word_line(app, &snapshot, anchor)), inner_chunks[1]);

    draw_progress(f, app, &snapshot, inner_chunks[4], inner_chunks[5]);

    render_footer(f, app);
}

fn word_line<'a>(app: &App, snapshot: &'a Snapshot, anchor: usize) -> Line<'a> {
    let main = Style::default()
        .fg(hex_to_rgb(&app.theme.main))
        .add_modifier(Modifier::BOLD);

    if let Some(count) = snapshot.countdown {
        return Line::from(vec![
            Span::raw(" ".repeat(anchor)),
            Span::styled(count.to_string(), main),
        ]);
    }

    let text = Style::default().fg(hex_to_rgb(&app.theme.text));
    let before = Span::styled(snapshot.before.as_str(), text);
    let pad = anchor.saturating_sub(before.width());

    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        before,
        Span::styled(
            snapshot.focal.as_str(),
            Style::default()
                .fg(hex_to_rgb(&app.theme.focal))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(snapshot.after.as_str(), text),
    ])
}

fn draw_progress(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect, status_area: Rect) {
    let ratio = (snapshot.progress_percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(hex_to_rgb(&app.theme.main))
                .bg(hex_to_rgb(&app.theme.sub_alt)),
        )
        .ratio(ratio)
        .label(format!("{:.0}%", snapshot.progress_percent));
    f.render_widget(gauge, area);

    let position = if snapshot.total == 0 { 0 } else { snapshot.position + 1 };
    let mut status = format!(
        "{}/{} | {} left",
        position,
        snapshot.total,
        format_timer(snapshot.remaining_seconds)
    );
    if snapshot.mode == Mode::Paused {
        status.push_str(" | paused");
    }

    f.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(Style::default().fg(hex_to_rgb(&app.theme.sub))),
        status_area,
    );
}
