//! Core data and network layer – the dictionary model and the client that
//! fetches it.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod client;
pub mod error;
pub mod model;
