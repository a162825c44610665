//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background reader
//! that forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal size changed; the next loop iteration redraws.
    Resize,
    /// Nothing happened for one tick; advances the spinner.
    Tick,
}

/// Spawns a blocking reader that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let app_event = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                // Windows reports releases too; only presses drive the UI.
                Ok(CtEvent::Key(k)) if k.kind != KeyEventKind::Release => AppEvent::Key(k),
                Ok(CtEvent::Resize(..)) => AppEvent::Resize,
                _ => continue,
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
