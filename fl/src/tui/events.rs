//! TUI event handling
//!
//! A blocking thread polls crossterm and forwards events over a tokio channel.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick (nothing happened for one tick period)
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        debug!(?tick_rate, "EventHandler::new: called");
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            debug!("EventHandler: event polling thread started");
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        // Windows reports releases too
                        Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                        Ok(event::Event::Resize(w, h)) => Event::Resize(w, h),
                        Ok(other) => {
                            trace!(?other, "EventHandler: skipping event");
                            continue;
                        }
                        Err(e) => {
                            debug!(error = %e, "EventHandler: read failed");
                            continue;
                        }
                    }
                } else {
                    Event::Tick
                };

                if tx.send(event).is_err() {
                    debug!("EventHandler: channel closed, exiting loop");
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event (async)
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}
