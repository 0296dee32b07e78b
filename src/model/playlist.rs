use super::shuffle::pin_and_fill;
use crate::error::{PlaylistError, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Track identifier (not required to be unique within a playlist)
pub type TrackId = i64;

/// 1-based position in the playlist as seen by callers
pub type Ordinal = i64;

/// Marker appended to the currently playing track when rendering
pub const PLAYING_MARKER: char = '*';

/// Largest size accepted by [`Playlist::create`]
pub const MAX_PLAYLIST_SIZE: i64 = 10_000_000;

/// Opaque playlist identifier, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlaylistId(u32);

impl PlaylistId {
    /// Draw a random positive identifier
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=i32::MAX as u32))
    }

    /// Numeric value of this identifier
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of track identifiers with a "currently playing" position
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist ID
    id: PlaylistId,

    /// Track identifiers in playing order (zero-based index = ordinal - 1)
    tracks: Vec<TrackId>,

    /// Zero-based index of the playing track; always None when `tracks` is empty
    playing: Option<usize>,
}

impl Playlist {
    /// Create a playlist holding tracks `1..=size` with nothing playing
    pub fn create(size: i64) -> Result<Self> {
        Self::create_with(size, &mut rand::rng())
    }

    /// Same as [`Playlist::create`] with a caller-supplied generator for the ID
    pub fn create_with<R: Rng + ?Sized>(size: i64, rng: &mut R) -> Result<Self> {
        if size < 0 {
            return Err(PlaylistError::InvalidArgument(format!(
                "size of the playlist must not be negative (got {})",
                size
            )));
        }
        if size > MAX_PLAYLIST_SIZE {
            return Err(PlaylistError::InvalidArgument(format!(
                "size of the playlist must not exceed {} (got {})",
                MAX_PLAYLIST_SIZE, size
            )));
        }

        let mut tracks = Vec::new();
        tracks.try_reserve_exact(size as usize).map_err(|_| {
            PlaylistError::InvalidArgument(format!(
                "not enough memory for a playlist of {} tracks",
                size
            ))
        })?;
        tracks.extend(1..=size);

        Ok(Self {
            id: PlaylistId::random(rng),
            tracks,
            playing: None,
        })
    }

    /// Insert `track_id` so that it ends up at `ordinal`
    ///
    /// Valid ordinals are `1..=len + 1`. Inserting at or before the playing
    /// track moves the playing index along with the track.
    pub fn insert(&mut self, ordinal: Ordinal, track_id: TrackId) -> Result<()> {
        let index = checked_index(ordinal, self.tracks.len() + 1)?;

        self.tracks.insert(index, track_id);

        if let Some(playing) = self.playing.as_mut() {
            if index <= *playing {
                *playing += 1;
            }
        }

        Ok(())
    }

    /// Remove the track at `ordinal` (valid range `1..=len`)
    ///
    /// Deleting the playing track stops playback; deleting an earlier track
    /// keeps the pointer on the same physical track.
    pub fn delete(&mut self, ordinal: Ordinal) -> Result<()> {
        let index = checked_index(ordinal, self.tracks.len())?;

        self.tracks.remove(index);

        self.playing = match self.playing {
            Some(playing) if playing == index => None,
            Some(playing) if playing > index => Some(playing - 1),
            other => other,
        };

        Ok(())
    }

    /// Start playing the track at `ordinal` (valid range `1..=len`)
    pub fn play(&mut self, ordinal: Ordinal) -> Result<()> {
        let index = checked_index(ordinal, self.tracks.len())?;
        self.playing = Some(index);
        Ok(())
    }

    /// Shuffle every track except the playing one, which keeps its ordinal
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using the given random number generator
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // New sequence is built aside and swapped in whole
        let shuffled = pin_and_fill(&self.tracks, self.playing, rng);
        self.tracks = shuffled;
    }

    /// Render tracks space-separated, marking the playing one with `*`
    pub fn render(&self) -> String {
        self.render_with(PLAYING_MARKER)
    }

    /// Render tracks space-separated, marking the playing one with `marker`
    pub fn render_with(&self, marker: char) -> String {
        self.tracks
            .iter()
            .enumerate()
            .map(|(index, track)| {
                if Some(index) == self.playing {
                    format!("{}{}", track, marker)
                } else {
                    track.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Identifier assigned at creation
    pub fn id(&self) -> PlaylistId {
        self.id
    }

    /// Track identifiers in ordinal order
    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Zero-based index of the playing track
    pub fn playing_index(&self) -> Option<usize> {
        self.playing
    }

    /// 1-based ordinal of the playing track
    pub fn playing_ordinal(&self) -> Option<usize> {
        self.playing.map(|index| index + 1)
    }

    /// Identifier of the playing track
    pub fn playing_track(&self) -> Option<TrackId> {
        self.playing.map(|index| self.tracks[index])
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            id: self.id,
            tracks: &self.tracks,
            playing_ordinal: self.playing_ordinal(),
        }
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Read-only view of a playlist used for JSON output
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub id: PlaylistId,
    pub tracks: &'a [TrackId],
    pub playing_ordinal: Option<usize>,
}

/// Convert a 1-based ordinal into a zero-based index below `upper`
fn checked_index(ordinal: Ordinal, upper: usize) -> Result<usize> {
    usize::try_from(ordinal)
        .ok()
        .filter(|position| (1..=upper).contains(position))
        .map(|position| position - 1)
        .ok_or(PlaylistError::OutOfRange {
            ordinal,
            max: upper,
        })
}
