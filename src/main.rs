use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info, warn};

use skillswap::config::{self, Config};
use skillswap::core::NotifyLevel;
use skillswap::domain::{Dataset, Repository};
use skillswap::{input, ui, App};

#[derive(Debug, Parser)]
#[command(
    name = "skillswap",
    version,
    about = "SkillsSwap DAO: a terminal dashboard for listings, bookings and governance"
)]
struct Args {
    /// Config file (default: ~/.config/skillswap/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in records
    #[arg(long)]
    data: Option<PathBuf>,

    /// Initial page: dashboard, listings, bookings, token or governance
    #[arg(long)]
    page: Option<String>,

    /// Log file (default: ~/.local/share/skillswap/skillswap.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = init_tracing(args.log_file.clone(), args.verbose) {
        eprintln!("logging disabled: {err:#}");
    }

    let mut notices: Vec<(String, NotifyLevel)> = Vec::new();

    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "using default config");
            notices.push((format!("Config ignored: {err}"), NotifyLevel::Warn));
            Config::default()
        }
    };

    let data_path = args.data.clone().or_else(|| config.data_path());
    let data: Box<dyn Repository> = match data_path.as_deref().map(load_dataset) {
        Some(Ok(dataset)) => Box::new(dataset),
        Some(Err(err)) => {
            warn!(error = %format!("{err:#}"), "falling back to built-in records");
            notices.push((format!("{err}; showing built-in records"), NotifyLevel::Error));
            Box::new(Dataset::mock())
        }
        None => Box::new(Dataset::mock()),
    };

    let mut app = App::new(data, &config);
    if let Some(page) = args.page.as_deref() {
        app.navigate_id(page);
    }
    for (text, level) in notices {
        app.push_status(text, level);
    }
    info!(page = app.active_page().id(), "starting");

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_ms.max(10));
    let res = run_app(&mut terminal, app, tick_rate);
    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = %format!("{err:#}"), "event loop failed");
    }
    info!("shutdown");
    res.and(restored)
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let init = || -> Result<Tui> {
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("enter alternate screen")?;
        Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
    };
    rollback_on_error(init(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })
}

/// Every step runs even when an earlier one fails.
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    raw.context("disable raw mode")?;
    screen.context("leave alternate screen")?;
    cursor.context("show cursor")?;
    Ok(())
}

/// Runs `rollback` only when `step` failed, then hands the result back.
fn rollback_on_error<T>(step: Result<T>, rollback: impl FnOnce()) -> Result<T> {
    if step.is_err() {
        rollback();
    }
    step
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let size = terminal.size()?;
        app.set_viewport(size.width);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, size),
                Event::Resize(width, _) => app.set_viewport(width),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let dataset = Dataset::load(path)?;
    info!(
        path = %path.display(),
        listings = dataset.listings.len(),
        bookings = dataset.bookings.len(),
        "loaded records"
    );
    Ok(dataset)
}

/// The terminal owns stdout, so logs go to a file.
fn init_tracing(log_file: Option<PathBuf>, verbose: bool) -> Result<()> {
    let path = log_file
        .or_else(config::log_path)
        .context("no log file location")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SKILLSWAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
