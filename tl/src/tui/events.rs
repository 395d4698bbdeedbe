//! TUI event handling
//!
//! A dedicated thread polls crossterm and forwards events over a
//! channel; poll timeouts become `Tick` events, which drive notice
//! expiry. Everything downstream stays single-threaded.

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use eyre::Result;
use tracing::debug;

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick (periodic refresh)
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        debug!(?tick_rate, "EventHandler::new");
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            loop {
                // Poll for events with timeout; timeout becomes a tick
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            event::Event::Key(key) => Event::Key(key),
                            event::Event::Resize(w, h) => Event::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(event).is_err() {
                            debug!("EventHandler: channel closed, exiting loop");
                            break;
                        }
                    }
                } else if tx.send(Event::Tick).is_err() {
                    debug!("EventHandler: channel closed on tick, exiting loop");
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Block until the next event
    pub fn next(&self) -> Result<Event> {
        self.rx.recv().map_err(|_| eyre::eyre!("event channel closed"))
    }
}
