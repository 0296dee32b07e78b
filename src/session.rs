//! Session state: owns the current playlist and applies commands to it

use crate::command::Command;
use crate::error::{PlaylistError, Result};
use crate::model::Playlist;

/// Holds at most one playlist; `Create` replaces it wholesale
#[derive(Debug, Default)]
pub struct Session {
    playlist: Option<Playlist>,
}

impl Session {
    /// Create a session with no playlist
    pub fn new() -> Self {
        Self { playlist: None }
    }

    /// Current playlist, if one has been created
    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Apply a command and return the resulting playlist for rendering
    pub fn execute(&mut self, command: Command) -> Result<&Playlist> {
        let playlist = match command {
            Command::Create { size } => {
                let created = Playlist::create(size)?;
                log::info!(
                    "Created playlist {} with {} tracks",
                    created.id(),
                    created.len()
                );
                self.playlist.insert(created)
            }
            Command::Insert { ordinal, track_id } => {
                let playlist = self.current_mut()?;
                playlist.insert(ordinal, track_id)?;
                playlist
            }
            Command::Delete { ordinal } => {
                let playlist = self.current_mut()?;
                playlist.delete(ordinal)?;
                playlist
            }
            Command::Play { ordinal } => {
                let playlist = self.current_mut()?;
                playlist.play(ordinal)?;
                playlist
            }
            Command::Shuffle => {
                let playlist = self.current_mut()?;
                playlist.shuffle();
                playlist
            }
        };

        log::debug!(
            "{} applied to playlist {}: {} tracks, playing {:?}",
            command.name(),
            playlist.id(),
            playlist.len(),
            playlist.playing_ordinal()
        );

        Ok(&*playlist)
    }

    fn current_mut(&mut self) -> Result<&mut Playlist> {
        self.playlist.as_mut().ok_or(PlaylistError::NoPlaylist)
    }
}
