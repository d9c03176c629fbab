//! tunnelview - location and tunnel info panel for VPN clients.

mod app;
mod cli;
mod config;
mod constants;
mod core;
mod event;
mod message;
mod state;
mod theme;
mod ui;
mod utils;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::io::BufReader;

use app::App;
use cli::args::{Args, Commands};
use config::{AppConfig, ConfigSource};
use event::{Event, EventHandler};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let (config, source) = config::load(args.config.as_deref())?;

    match &args.command {
        Some(Commands::Render { file, json }) => cli::commands::render(file, *json, &config),
        Some(Commands::Demo) => cli::commands::demo(&config),
        None => run_tui(&args, &config, &source),
    }
}

fn run_tui(args: &Args, config: &AppConfig, source: &ConfigSource) -> Result<()> {
    // Open the feed before touching the terminal so errors print normally.
    let feed = match &args.feed {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open feed {}", path.display()))?;
            Some((path.display().to_string(), BufReader::new(file)))
        }
        None => None,
    };

    let events = EventHandler::new(config.tick_rate_ms);
    let feed_name = match feed {
        Some((name, reader)) => {
            core::feed::spawn_feed_worker(core::feed::read_feed(reader), events.sender());
            name
        }
        None => {
            let script = core::scenario::demo_script(config.demo_step());
            core::feed::spawn_feed_worker(script.into_iter().cycle().map(Ok), events.sender());
            "demo".to_string()
        }
    };

    let mut app = App::new(config, feed_name);
    app.log(&format!("CONFIG: Loaded from {source}"));
    if args.feed.is_none() {
        app.log(constants::MSG_FEED_DEMO);
    }

    let mut terminal = ratatui::init();
    with_mouse_capture(
        || Ok(crossterm::execute!(std::io::stdout(), EnableMouseCapture)?),
        || run(&mut terminal, &mut app, &events),
        || {
            let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    )
}

/// Runs `body` after `enable`, calling `restore` on every exit path.
fn with_mouse_capture(
    enable: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce(),
) -> Result<()> {
    let result = enable().and_then(|()| body());
    restore();
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Feed(message) => app.handle_message(message),
            Event::Resize(..) | Event::Tick => {}
        }
    }
    Ok(())
}
