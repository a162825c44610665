//! Typed requests from input handling to the fetch controller.
//!
//! Key handlers never touch the network; they return a [`Command`] and the
//! event loop hands it to the controller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a new word of the day.
    RefreshRandomWord,
    /// Look up definitions for the typed word. `None` when the input was
    /// never filled in.
    Search(Option<String>),
    Quit,
}
