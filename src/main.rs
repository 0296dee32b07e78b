use anyhow::{Context, Result};
use clap::Parser;
use playlist_console::console::{ErrorPolicy, OutputFormat};
use playlist_console::{Console, ConsoleConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-console")]
#[command(about = "Manage an in-memory playlist with text commands", long_about = None)]
struct Args {
    /// Read commands from a file instead of standard input
    #[arg(short = 's', long)]
    script: Option<String>,

    /// Keep reading commands after an error instead of asking or stopping
    #[arg(short = 'k', long)]
    keep_going: bool,

    /// Print the playlist as JSON after each command
    #[arg(long)]
    json: bool,

    /// Marker appended to the currently playing track
    #[arg(long, default_value = "*")]
    marker: char,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (quiet by default so it does not mix with the playlist output)
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = if args.script.is_some() {
        ConsoleConfig::script()
    } else {
        ConsoleConfig::new()
    };
    config = config.with_marker(args.marker);

    if args.keep_going {
        config = config.with_error_policy(ErrorPolicy::Continue);
    }
    if args.json {
        config = config.with_format(OutputFormat::Json);
    }

    let stdout = io::stdout().lock();

    let summary = match &args.script {
        Some(script) => {
            // Expand ~ in the script path
            let path = PathBuf::from(shellexpand::tilde(script).as_ref());
            log::info!("Reading commands from {:?}", path);

            let file = File::open(&path)
                .with_context(|| format!("Failed to open command script: {:?}", path))?;
            Console::new(BufReader::new(file), stdout, config).run()?
        }
        None => Console::new(io::stdin().lock(), stdout, config).run()?,
    };

    log::info!(
        "Session ended: {} command(s) executed, {} failed",
        summary.executed,
        summary.failed
    );

    if args.script.is_some() && summary.failed > 0 {
        anyhow::bail!("{} command(s) in the script failed", summary.failed);
    }

    Ok(())
}
