//! Playlist error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Errors raised by playlist operations and command parsing.
///
/// None of these are fatal: every operation validates its arguments before
/// touching state, so a rejected call leaves the playlist as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// Malformed or semantically invalid input not tied to playlist bounds
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Ordinal outside the valid interval for the requested operation
    #[error("Ordinal {ordinal} should be in range 1 to {max} inclusive")]
    OutOfRange { ordinal: i64, max: usize },

    /// An operation other than create was requested before any playlist exists
    #[error("Playlist does not exist. Perform a 'Create' operation first")]
    NoPlaylist,

    /// Command token is not a recognized operation name
    #[error("Unknown command '{0}'. Supported operations are 'Create', 'Delete', 'Insert', 'Shuffle', 'Play'")]
    UnknownCommand(String),

    /// Numeric argument could not be parsed as an integer
    #[error("'{0}' is not a valid integer")]
    InvalidNumber(String),
}

impl PlaylistError {
    /// True for the parse-level failures (unknown command, bad number)
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PlaylistError::UnknownCommand(_) | PlaylistError::InvalidNumber(_)
        )
    }
}
