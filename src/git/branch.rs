//! Branch collection

use crate::error::Result;
use git2::{Branch, BranchType, Oid, Repository};
use std::fmt;
use tracing::{debug, info};

/// Which branch namespace to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Branches under `refs/heads/`
    #[default]
    Local,
    /// Remote-tracking branches under `refs/remotes/`
    Remote,
}

impl From<Kind> for BranchType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Local => Self::Local,
            Kind::Remote => Self::Remote,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// A branch resolved to its tip commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    /// Short branch name (e.g., "main" or "origin/main")
    pub name: String,
    /// Full reference name (e.g., "refs/heads/main")
    pub reference: String,
    /// Id of the tip commit
    pub commit: Oid,
    /// Tip commit time in seconds since the Unix epoch
    pub time: i64,
    /// First line of the tip commit message
    pub summary: String,
    /// Whether this branch is checked out
    pub is_head: bool,
}

impl BranchEntry {
    /// Peel a branch to its tip commit and capture what the table shows
    ///
    /// # Errors
    ///
    /// Returns an error if the branch name cannot be read or the reference
    /// does not lead to a commit
    pub fn from_branch(branch: &Branch<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(branch.name_bytes()?).into_owned();
        let reference = branch.get();
        let commit = reference.peel_to_commit()?;

        Ok(Self {
            name,
            reference: String::from_utf8_lossy(reference.name_bytes()).into_owned(),
            commit: commit.id(),
            time: commit.time().seconds(),
            summary: commit
                .summary_bytes()
                .map_or_else(String::new, |s| String::from_utf8_lossy(s).into_owned()),
            is_head: branch.is_head(),
        })
    }
}

/// Collect every branch of the given kind, in the order `libgit2` yields them
///
/// The first failure aborts collection; no partial list is returned.
///
/// # Errors
///
/// Returns an error if branch iteration fails or any branch cannot be
/// resolved to a commit
pub fn collect(repo: &Repository, kind: Kind) -> Result<Vec<BranchEntry>> {
    let mut entries = Vec::new();

    for item in repo.branches(Some(kind.into()))? {
        let (branch, _) = item?;
        let entry = BranchEntry::from_branch(&branch)?;
        debug!(
            branch = %entry.name,
            time = entry.time,
            head = entry.is_head,
            "Collected branch"
        );
        entries.push(entry);
    }

    info!(%kind, count = entries.len(), "Collected branches");
    Ok(entries)
}
