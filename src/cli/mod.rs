//! Command-line interface: argument tree and command handlers.

pub mod args;
pub mod commands;
