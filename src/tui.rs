use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, EventStream,
        KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::debug;

use crate::event::Event;
use crate::geo::LocationResult;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    debug!("entering alternate screen");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn restore() -> Result<()> {
    debug!("leaving alternate screen");
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

pub struct EventHandler {
    event_stream: EventStream,
    tick_rate: Duration,
    location_rx: mpsc::UnboundedReceiver<LocationResult>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, location_rx: mpsc::UnboundedReceiver<LocationResult>) -> Self {
        Self {
            event_stream: EventStream::new(),
            tick_rate: Duration::from_millis(tick_rate_ms),
            location_rx,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        let mut tick_interval = interval(self.tick_rate);
        // The first tick of a fresh interval completes immediately.
        tick_interval.tick().await;

        loop {
            tokio::select! {
                _ = tick_interval.tick() => {
                    return Ok(Event::Tick);
                }
                Some(location) = self.location_rx.recv() => {
                    return Ok(Event::Location(location));
                }
                event = self.event_stream.next() => {
                    if let Some(event) = event.and_then(translate) {
                        return Ok(event);
                    }
                }
            }
        }
    }
}

/// Map a raw terminal event to an app event. Read errors are logged and
/// skipped so a transient failure never ends the session.
fn translate(event: io::Result<CrosstermEvent>) -> Option<Event> {
    match event {
        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        Ok(CrosstermEvent::Mouse(mouse)) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
            Some(Event::Mouse(mouse))
        }
        Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "terminal event read failed");
            None
        }
    }
}
