//! Text command parsing
//!
//! Turns one line of user input into a validated [`Command`]. Command names
//! are case-insensitive and tokens are separated by any amount of whitespace.

use crate::error::{PlaylistError, Result};
use crate::model::{Ordinal, TrackId};

/// A single playlist operation requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create { size: i64 },
    Insert { ordinal: Ordinal, track_id: TrackId },
    Delete { ordinal: Ordinal },
    Shuffle,
    Play { ordinal: Ordinal },
}

impl Command {
    /// Parse a line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "create" => {
                let [size] = expect_args::<1>("Create", &args)?;
                Command::Create {
                    size: parse_number(size)?,
                }
            }
            "insert" => {
                let [ordinal, track_id] = expect_args::<2>("Insert", &args)?;
                Command::Insert {
                    ordinal: parse_number(ordinal)?,
                    track_id: parse_number(track_id)?,
                }
            }
            "delete" => {
                let [ordinal] = expect_args::<1>("Delete", &args)?;
                Command::Delete {
                    ordinal: parse_number(ordinal)?,
                }
            }
            "shuffle" => {
                expect_args::<0>("Shuffle", &args)?;
                Command::Shuffle
            }
            "play" => {
                let [ordinal] = expect_args::<1>("Play", &args)?;
                Command::Play {
                    ordinal: parse_number(ordinal)?,
                }
            }
            _ => return Err(PlaylistError::UnknownCommand(name.to_string())),
        };

        Ok(Some(command))
    }

    /// Operation name as shown to users
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "Create",
            Command::Insert { .. } => "Insert",
            Command::Delete { .. } => "Delete",
            Command::Shuffle => "Shuffle",
            Command::Play { .. } => "Play",
        }
    }
}

/// Check the argument count and hand the arguments back as an array
fn expect_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        PlaylistError::InvalidArgument(format!(
            "'{}' takes {} argument(s), got {}",
            command,
            N,
            args.len()
        ))
    })
}

fn parse_number(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| PlaylistError::InvalidNumber(token.to_string()))
}
