use crate::config::Theme;
use crate::models::TextSource;
use anyhow::{Context, Result};
use glint::engine::{Event, Mode, Player, Snapshot};
use rust_embed::RustEmbed;
use std::io::Read;
use std::time::{Duration, Instant};
use textwrap::Options;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

pub fn load_text(source: &TextSource) -> Result<String> {
    match source {
        TextSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read text from stdin")?;
            Ok(buf)
        }
        TextSource::Inline(text) => Ok(text.clone()),
        TextSource::Sample => {
            let file = Asset::get("sample.txt").context("Could not find embedded sample text")?;
            Ok(std::str::from_utf8(file.data.as_ref())?.to_string())
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub theme: Theme,
    pub source_label: String,
    pub source_text: String,
    pub wpm_step: u16,

    player: Player,
    epoch: Instant,

    pub terminal_width: u16,
    pub preview_lines: Vec<String>,
}

impl App {
    pub fn new(source: &TextSource, wpm: u16, wpm_step: u16, theme: Theme) -> Result<Self> {
        let source_text = load_text(source)?;
        let mut app = Self {
            should_quit: false,
            theme,
            source_label: source.label(),
            source_text,
            wpm_step,
            player: Player::new(wpm),
            epoch: Instant::now(),
            terminal_width: 80,
            preview_lines: Vec::new(),
        };
        app.recalculate_lines();
        Ok(app)
    }

    pub fn quit(&mut self) { self.should_quit = true; }
    pub fn resize(&mut self, width: u16, _height: u16) {
        self.terminal_width = width;
        self.recalculate_lines();
    }

    pub fn mode(&self) -> Mode { self.player.state().mode() }
    pub fn snapshot(&self) -> Snapshot { self.player.snapshot() }

    fn now(&self) -> Duration { self.epoch.elapsed() }

    fn send(&mut self, event: Event) {
        let now = self.now();
        self.player.dispatch(event, now);
    }

    /// Polled from the draw loop; fires whatever timer has come due.
    pub fn check_time(&mut self) {
        let now = self.now();
        self.player.advance(now);
    }

    pub fn start(&mut self) {
        let text = self.source_text.clone();
        self.send(Event::Start(text));
    }

    pub fn on_space(&mut self) {
        match self.mode() {
            Mode::Idle => self.start(),
            Mode::CountdownPending => self.send(Event::SkipCountdown),
            _ => self.send(Event::Toggle),
        }
    }

    pub fn on_enter(&mut self) {
        match self.mode() {
            Mode::Idle | Mode::Finished => self.start(),
            _ => {}
        }
    }

    pub fn slower(&mut self) { self.send(Event::AdjustRate(-i32::from(self.wpm_step))); }
    pub fn faster(&mut self) { self.send(Event::AdjustRate(i32::from(self.wpm_step))); }
    pub fn stop(&mut self) { self.send(Event::Stop); }
    pub fn reset(&mut self) { self.send(Event::Reset); }

    /// Wait until the next timer is due, capped so the loop still sees input.
    pub fn poll_timeout(&self, frame: Duration) -> Duration {
        match self.player.next_deadline() {
            Some(deadline) => deadline.saturating_sub(self.now()).min(frame),
            None => frame,
        }
    }

    fn recalculate_lines(&mut self) {
        let text = self.source_text.trim();
        if text.is_empty() {
            self.preview_lines.clear();
            return;
        }
        let layout_width = (self.terminal_width as usize * 80) / 100;
        let safe_width = layout_width.saturating_sub(2).max(1);
        let options = Options::new(safe_width);
        let lines = textwrap::wrap(text, options);
        self.preview_lines = lines.into_iter().map(|c| c.into_owned()).collect();
    }
}
