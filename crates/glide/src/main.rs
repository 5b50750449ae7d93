//! Glide - terminal text viewer with smooth scrolling

mod app;
mod config;
mod document;
mod logging;
mod ui;
mod views;

use anyhow::{bail, Context, Result};
use app::App;
use clap::Parser;
use config::{Config, ConfigWatcher};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const CONFIG_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(author, version, about = "A text viewer with smooth scrolling")]
struct Args {
    /// Files to view
    #[arg(num_args = 0..)]
    files: Vec<PathBuf>,

    /// Config file (default: XDG config path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wheel smoothness, 1 (instant) to 30 (slowest)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=30))]
    wheel_divisor: Option<u32>,

    /// Frame interval in milliseconds
    #[arg(short, long)]
    tick_rate: Option<u64>,

    /// Log file path (default: per-process file in the data dir)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Command line values win over the config file, including after reloads
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(divisor) = self.wheel_divisor {
            config.scroll.wheel_divisor = divisor;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.view.tick_rate = tick_rate;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log = logging::init(args.log_file.clone())?;
    tracing::info!(log_file = %log.log_file.display(), "glide starting");

    if args.files.is_empty() {
        bail!("No files given\n\nUsage: glide <FILE>...");
    }

    let mut config = Config::load(args.config.as_deref());
    args.apply_overrides(&mut config);

    let mut app = App::from_config(&config);
    for path in &args.files {
        app.open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }

    let watcher = ConfigWatcher::new(args.config.clone());
    tracing::debug!(path = ?watcher.path(), "watching config");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &args, config, watcher);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{:#}", err);
        eprintln!("Error: {}", err);
        return Err(err);
    }

    tracing::info!("glide exiting");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    args: &Args,
    config: Config,
    mut watcher: ConfigWatcher,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut tick_rate = config.view.tick_rate();
    let mut last_tick = Instant::now();
    let mut last_config_poll = Instant::now();

    loop {
        if app.needs_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
            app.mark_drawn();
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if !app.show_help {
                        app.handle_mouse(mouse);
                    }
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if last_config_poll.elapsed() >= CONFIG_POLL_INTERVAL {
            last_config_poll = Instant::now();
            if let Some(mut reloaded) = watcher.poll() {
                args.apply_overrides(&mut reloaded);
                tick_rate = reloaded.view.tick_rate();
                app.apply_config(&reloaded);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
