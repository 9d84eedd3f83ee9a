//! git-recent - list git branches by the recency of their tip commit
//!
//! Branches of one kind (local or remote-tracking) are collected from the
//! repository, ranked by commit time, and printed one per line with the
//! commit's relative age and summary.

pub mod config;
pub mod error;
pub mod git;
pub mod present;
pub mod rank;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{BranchEntry, Kind};

use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Print the most recently committed branches of the repository at `path`
///
/// Ages are measured against `now`, which is captured once by the caller.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, any branch cannot be
/// resolved to a commit, or writing to `out` fails
pub fn run<W: Write>(
    path: &Path,
    config: Config,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    let entries = {
        let repo = git::open_repository(path)?;
        git::collect(&repo, config.kind)?
    };

    let total = entries.len();
    let ranked = rank::rank(entries, config.count);
    info!(shown = ranked.len(), total, "Ranked branches");

    present::render(out, &ranked, now)?;
    out.flush()?;
    Ok(())
}
