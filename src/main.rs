//! git-recent - list branches by the recency of their last commit

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use git_recent::{Config, Kind};
use git_recent::config::DEFAULT_COUNT;
use std::path::Path;
use std::process::ExitCode;

/// List branches ordered by the recency of their tip commit
#[derive(Parser)]
#[command(name = "git-recent")]
#[command(about, long_about = None)]
struct Cli {
    /// Show at most N branches, zero means all branches
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Show remote branches instead of local branches
    #[arg(long)]
    remote: bool,
}

impl Cli {
    const fn config(&self) -> Config {
        let kind = if self.remote {
            Kind::Remote
        } else {
            Kind::Local
        };
        Config::new(self.count, kind)
    }
}

fn main() -> Result<ExitCode> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match git_recent::run(Path::new("."), cli.config(), Utc::now(), &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug).
// Logs go to git-recent.log in the temp dir so stdout stays a clean table.
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(std::env::temp_dir(), "git-recent.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}
