//! TUI Runner - main loop that owns the terminal
//!
//! Draws the current state, waits for the next event, hands keys to the App.

use std::time::Duration;

use eyre::Result;
use tracing::{debug, info, trace};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::config::Config;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    app: App,
    terminal: Tui,
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, config: &Config) -> Self {
        debug!(tick_rate_ms = config.tick_rate_ms, "TuiRunner::new: called");
        Self {
            app: App::new(config),
            terminal,
            event_handler: EventHandler::new(Duration::from_millis(config.tick_rate_ms.max(1))),
        }
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "TuiRunner::run: resized");
                }
                Event::Tick => trace!("TuiRunner::run: tick"),
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        info!("TuiRunner::run: exiting");
        Ok(())
    }
}
