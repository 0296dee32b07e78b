//! Playlist data model
//!
//! The playlist entity and the shuffle it relies on. Everything here is
//! synchronous and single-owner; callers that share a playlist across
//! threads must wrap it in a single lock.

mod playlist;
mod shuffle;

pub use playlist::{
    Ordinal, Playlist, PlaylistId, Snapshot, TrackId, MAX_PLAYLIST_SIZE, PLAYING_MARKER,
};
pub use shuffle::pin_and_fill;
