pub mod idle;
pub mod reader;
pub mod utils;

use crate::app::App;
use crate::ui::utils::hex_to_rgb;
use glint::engine::Mode;
use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    if app.mode() == Mode::Idle {
        idle::draw(f, app);
    } else {
        reader::draw(f, app);
    }
}
