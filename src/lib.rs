//! Playlist Console - an in-memory playlist driven by text commands
//!
//! This library keeps an ordered list of track identifiers together with a
//! "currently playing" position, and exposes the create, insert, delete,
//! shuffle and play operations through a line-oriented command loop.

pub mod command;
pub mod console;
pub mod error;
pub mod model;
pub mod session;

pub use command::Command;
pub use console::{Console, ConsoleConfig};
pub use error::PlaylistError;
pub use model::Playlist;
pub use session::Session;
