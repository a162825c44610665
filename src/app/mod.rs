//! Application orchestration: state, fetch coordination, and input handling.

pub mod command;
pub mod controller;
pub mod event;
pub mod handler;
pub mod state;
