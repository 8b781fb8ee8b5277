mod app;
mod config;
mod models;
mod trace;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, ArgGroup, Parser};
use crate::config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use models::TextSource;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Speed read in the terminal, one word at a time", long_about = None)]
// disable the default flags so they can be listed under "Flags" below
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
#[command(group(
    ArgGroup::new("input")
        .required(false)
        .args(&["file", "text"])
))]
struct Cli {
    /// File to read, or "-" for stdin. Without one a built-in sample is used
    file: Option<PathBuf>,

    /// Read this text instead of a file
    #[arg(long)]
    text: Option<String>,

    /// Starting speed in words per minute (100 to 1000)
    #[arg(short, long, value_parser = RangedU64ValueParser::<u16>::new().range(100..=1000))]
    wpm: Option<u16>,

    /// How much one arrow press changes the speed
    #[arg(short, long, value_parser = RangedU64ValueParser::<u16>::new().range(1..=900))]
    step: Option<u16>,

    /// Log level written to the log file (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print every frame as a JSON line instead of opening the reader
    #[arg(long, default_value_t = false, help_heading = "Flags")]
    trace: bool,

    /// Skip the 3 second countdown (trace only)
    #[arg(long, default_value_t = false, requires = "trace", help_heading = "Flags")]
    skip_countdown: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

impl Cli {
    fn source(&self) -> TextSource {
        if let Some(text) = &self.text {
            TextSource::Inline(text.clone())
        } else {
            match &self.file {
                Some(path) if path.as_os_str() == "-" => TextSource::Stdin,
                Some(path) => TextSource::File(path.clone()),
                None => TextSource::Sample,
            }
        }
    }
}

fn init_logging(level: LevelFilter, to_file: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    // the reader owns the terminal, so its logs go to a file
    if to_file {
        let dir = crate::config::project_dirs()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir);
        let log_file = open_log_file(&dir)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;
    let log_path = dir.join("glint.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Could not open {}", log_path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level, !cli.trace)?;

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        AppConfig::default()
    });

    let wpm = cli.wpm.unwrap_or(app_config.reader.wpm);
    let step = cli.step.unwrap_or(app_config.reader.wpm_step);
    let source = cli.source();

    if cli.trace {
        let text = app::load_text(&source)?;
        let mut stdout = io::stdout().lock();
        return trace::run(&mut stdout, &text, wpm, cli.skip_countdown);
    }

    let mut app = App::new(&source, wpm, step, app_config.theme)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("reader stopped: {:?}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        app.check_time();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(app.poll_timeout(FRAME))? {
            let ev = event::read()?;
            match ev {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Esc => app.quit(),
                            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.quit()
                            }
                            KeyCode::Char(' ') => app.on_space(),
                            KeyCode::Enter => app.on_enter(),
                            KeyCode::Left => app.slower(),
                            KeyCode::Right => app.faster(),
                            KeyCode::Char('s') => app.stop(),
                            KeyCode::Char('r') => app.reset(),
                            _ => {}
                        }
                    }
                }
                Event::Resize(w, h) => {
                    app.resize(w, h);
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
