//! Git repository access

mod branch;
#[cfg(test)]
pub(crate) mod testing;

pub use branch::{BranchEntry, Kind, collect};

use crate::error::{Error, Result};
use git2::{ErrorCode, Repository};
use std::path::Path;
use tracing::info;

/// Open the git repository containing the given path
///
/// Parent directories are searched, so any path inside a working tree works.
/// The repository is closed when the returned handle is dropped.
///
/// # Errors
///
/// Returns [`Error::RepositoryNotFound`] if no repository contains the path,
/// or [`Error::Repository`] if `libgit2` fails to open it.
pub fn open_repository(path: &Path) -> Result<Repository> {
    let repo = Repository::discover(path).map_err(|err| {
        if err.code() == ErrorCode::NotFound {
            Error::RepositoryNotFound
        } else {
            Error::from(err)
        }
    })?;
    info!(git_dir = %repo.path().display(), "Opened repository");
    Ok(repo)
}
