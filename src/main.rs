#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use async_stack_tracer::Time;
use async_stack_tracer::app::{App, AppResult};
use async_stack_tracer::config::{self, Config};
use async_stack_tracer::disguise::InstallSequence;
use async_stack_tracer::input::map_key;
use async_stack_tracer::terminal::TerminalSession;
use async_stack_tracer::ui;
use crossterm::event::{self, Event};
use log::{debug, error, info, trace};
use ratatui::{Terminal, prelude::Backend};

fn init_logging(config: &Config) -> AppResult<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.file)
        .with_context(|| format!("failed to create log file {}", config.logging.file))?;

    // Redirect stderr into the log file so nothing lands on the raw terminal
    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .init();

    Ok(())
}

fn main() -> AppResult<()> {
    let (config, config_error) = match config::loader::load_config_from_file() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(&config)?;
    info!("Starting async-stack-tracer");
    if let Some(err) = config_error {
        error!("Failed to load configuration: {err}");
        // Continue with default configuration
    }

    let mut app = match config.game.seed {
        Some(seed) => {
            info!("Using fixed piece seed {seed}");
            App::with_seed(seed)
        }
        None => App::new(),
    };

    let res = {
        let mut session = TerminalSession::acquire()?;
        run_app(session.terminal(), &mut app, config.timing.frame_delay())
    };

    if let Err(err) = res {
        error!("Trace session error: {err:?}");
        return Err(err);
    }

    if app.panicked {
        InstallSequence::default()
            .run(&mut io::stdout())
            .context("failed to print install output")?;
    }

    info!("Exiting");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frame_delay: Duration,
) -> AppResult<()> {
    // Drop anything typed before the session started
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    debug!("Entering main loop");

    loop {
        let frame_start = Instant::now();
        let now = app.update_clock();
        trace!(
            "Frame at {now:?} ({:.3}s since last)",
            app.world.resource::<Time>().delta_seconds()
        );

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    app.handle_action(action, now);
                }
            }
            if app.should_quit {
                return Ok(());
            }
        }

        app.on_tick(now);

        let view = app.view();
        terminal.draw(|f| ui::render(f, &view))?;

        // Frame limiter
        let elapsed = frame_start.elapsed();
        if elapsed < frame_delay {
            thread::sleep(frame_delay - elapsed);
        }
    }
}
