mod app;
mod config;
mod event;
mod geo;
mod keys;
mod launcher;
mod logging;
mod shortcuts;
mod theme;
mod time;
mod tui;
mod views;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{info, warn};

use app::{App, Message};
use config::{Config, LocationConfig};
use event::Event;
use geo::{GeoClient, LocationResult};
use launcher::BrowserLauncher;
use theme::ThemeMode;
use tui::{EventHandler, Tui};

/// Launch streaming services from a themed terminal popup.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the theme from the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Skip the IP geolocation lookup
    #[arg(long)]
    no_location: bool,

    /// Where to write logs
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = args
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .and_then(|path| logging::init(&path, args.verbose));

    let config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let shortcuts = config.shortcuts()?;

    let mode = args.theme.unwrap_or(config.theme);
    let variant = mode.resolve(time::system_clock().hour());
    info!(?mode, dark = variant.is_dark(), "theme resolved");

    let (location_tx, location_rx) = mpsc::unbounded_channel();
    if config.location.enabled && !args.no_location {
        spawn_location_lookup(&config.location, location_tx);
    } else {
        info!("location lookup disabled");
        location_tx.send(LocationResult::Unknown).ok();
    }

    let mut app = App::new(shortcuts, variant, Arc::new(BrowserLauncher));
    let events = EventHandler::new(250, location_rx);

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app, events).await;
    tui::restore()?;

    result
}

/// Resolve the location in the background. The task reports exactly once;
/// if the popup quits first, the runtime drops it.
fn spawn_location_lookup(config: &LocationConfig, tx: mpsc::UnboundedSender<LocationResult>) {
    let client = match config
        .provider_urls()
        .and_then(|urls| GeoClient::new(urls, config.timeout()))
    {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "location lookup unavailable");
            tx.send(LocationResult::Unknown).ok();
            return;
        }
    };

    tokio::spawn(async move {
        let location = client.resolve().await;
        tx.send(location).ok();
    });
}

async fn run(terminal: &mut Tui, app: &mut App, mut events: EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| views::render(frame, app))?;

        let msg = match events.next().await? {
            Event::Key(key) => keys::handle_key(key, app),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                keys::handle_mouse(mouse, app, Rect::new(0, 0, size.width, size.height))
            }
            Event::Location(location) => Some(Message::LocationResolved(location)),
            Event::Tick | Event::Resize => None,
        };

        if let Some(msg) = msg {
            app.update(msg);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
