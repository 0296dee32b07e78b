//! Console configuration

use crate::model::PLAYING_MARKER;

/// Configuration for the command loop
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Print the banner and the per-command prompt
    /// Off when commands come from a script file
    pub prompts: bool,

    /// What to do after a command fails
    pub error_policy: ErrorPolicy,

    /// How the playlist is written after each successful command
    pub format: OutputFormat,

    /// Marker appended to the playing track in text output
    pub marker: char,
}

/// Behaviour after a failed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Ask whether to retry; anything but "1" ends the session
    Ask,

    /// Report the error and read the next command
    Continue,

    /// Report the error and end the session
    Stop,
}

/// Rendering of the playlist after each command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Space-separated track identifiers
    Text,

    /// One JSON object per line
    Json,
}

impl ConsoleConfig {
    /// Interactive defaults: prompts on, ask on error, text output
    pub fn new() -> Self {
        Self {
            prompts: true,
            error_policy: ErrorPolicy::Ask,
            format: OutputFormat::Text,
            marker: PLAYING_MARKER,
        }
    }

    /// Defaults for non-interactive input: no prompts, stop on first error
    pub fn script() -> Self {
        Self {
            prompts: false,
            error_policy: ErrorPolicy::Stop,
            ..Self::new()
        }
    }

    /// Set error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set playing marker
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
