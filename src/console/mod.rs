//! Interactive command loop
//!
//! Reads commands line by line, applies them to a [`Session`](crate::Session)
//! and writes the playlist back after every successful command.

pub mod config;
pub mod repl;

pub use config::{ConsoleConfig, ErrorPolicy, OutputFormat};
pub use repl::{Console, RunSummary};
