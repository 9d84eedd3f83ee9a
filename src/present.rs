//! Rendering ranked branches as a table

use crate::git::BranchEntry;
use chrono::{DateTime, TimeDelta, Utc};
use std::io::{self, Write};

/// Narrowest branch name column
pub const MIN_NAME_WIDTH: usize = 10;

/// Width of the branch name column for the entries being printed
#[must_use]
pub fn column_width(entries: &[BranchEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .fold(MIN_NAME_WIDTH, usize::max)
}

/// Format how long ago a commit happened as a ten column field
///
/// Negative ages (commits dated in the future) read as `now`.
#[must_use]
pub fn format_age(age: TimeDelta) -> String {
    let age = age.max(TimeDelta::zero());

    if age.num_days() > 0 {
        format!("{:>5}d ago", age.num_days())
    } else if age.num_hours() > 0 {
        format!("{:>5}h ago", age.num_hours())
    } else if age.num_minutes() > 0 {
        format!("{:>5}m ago", age.num_minutes())
    } else {
        format!("{:>10}", "now")
    }
}

/// Time elapsed between a commit and `now`, clamped at zero
#[must_use]
pub fn commit_age(entry: &BranchEntry, now: DateTime<Utc>) -> TimeDelta {
    let secs = now.timestamp().saturating_sub(entry.time).max(0);
    TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX)
}

/// Format one table row, without the trailing newline
#[must_use]
pub fn format_line(entry: &BranchEntry, width: usize, now: DateTime<Utc>) -> String {
    let marker = if entry.is_head { "* " } else { "  " };
    let age = format_age(commit_age(entry, now));
    format!("{marker}{:<width$}  {age}  {}", entry.name, entry.summary)
}

/// Write one line per entry, in the order given
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render<W: Write>(
    out: &mut W,
    entries: &[BranchEntry],
    now: DateTime<Utc>,
) -> io::Result<()> {
    let width = column_width(entries);
    for entry in entries {
        writeln!(out, "{}", format_line(entry, width, now))?;
    }
    Ok(())
}
