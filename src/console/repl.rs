//! Line-oriented read/execute/print loop

use super::config::{ConsoleConfig, ErrorPolicy, OutputFormat};
use crate::command::Command;
use crate::model::Playlist;
use crate::session::Session;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const BANNER: &str = "Supported operations are 'Create', 'Delete', 'Insert', 'Shuffle', 'Play'";
const PROMPT: &str = "Enter the operation to perform :";
const RETRY_PROMPT: &str = "Do you wish to retry? If yes, enter 1";

/// Counters for one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that completed successfully
    pub executed: usize,

    /// Commands that were rejected
    pub failed: usize,
}

/// Drives a [`Session`] from a line reader and writes results to `output`
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    session: Session,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty session
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
            session: Session::new(),
        }
    }

    /// Session driven by this console
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until end of input or until the error policy ends the session
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if self.config.prompts {
            writeln!(self.output, "{}", BANNER)?;
        }

        loop {
            if self.config.prompts {
                writeln!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                break;
            };

            let outcome = match Command::parse(&line) {
                Ok(Some(command)) => self.session.execute(command).map(Some),
                Ok(None) => Ok(None),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(Some(playlist)) => {
                    let rendered = render(playlist, &self.config)?;
                    writeln!(self.output, "{}", rendered)?;
                    summary.executed += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("Command {:?} failed: {}", line.trim(), err);
                    writeln!(self.output, "Error: {}", err)?;
                    summary.failed += 1;

                    if !self.should_continue()? {
                        break;
                    }
                }
            }
        }

        self.output.flush()?;
        log::debug!(
            "Console finished: {} executed, {} failed",
            summary.executed,
            summary.failed
        );
        Ok(summary)
    }

    fn should_continue(&mut self) -> Result<bool> {
        match self.config.error_policy {
            ErrorPolicy::Continue => Ok(true),
            ErrorPolicy::Stop => Ok(false),
            ErrorPolicy::Ask => {
                writeln!(self.output, "{}", RETRY_PROMPT)?;
                self.output.flush()?;
                let answer = self.read_line()?;
                Ok(answer.as_deref().map(str::trim) == Some("1"))
            }
        }
    }

    /// Next input line, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read command input")?;

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

fn render(playlist: &Playlist, config: &ConsoleConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(playlist.render_with(config.marker)),
        OutputFormat::Json => serde_json::to_string(&playlist.snapshot())
            .context("Failed to encode playlist as JSON"),
    }
}
