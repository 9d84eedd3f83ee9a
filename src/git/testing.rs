//! Throwaway repositories for unit tests

use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};
use std::path::Path;
use tempfile::TempDir;

/// A fresh repository whose `HEAD` points at an unborn `main`
pub struct TestRepo {
    temp_dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        // Pin the initial branch so user config can't rename it.
        let mut init_opts = RepositoryInitOptions::new();
        init_opts.initial_head("main");
        let repo = Repository::init_opts(temp_dir.path(), &init_opts)?;
        Ok(Self { temp_dir, repo })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Commit an empty tree to `refname` with the given commit time
    ///
    /// `refname` must not exist yet, except for an unborn `HEAD`.
    pub fn commit(
        &self,
        refname: &str,
        time: i64,
        message: &str,
    ) -> Result<Oid, Box<dyn std::error::Error>> {
        let sig = Signature::new("Test", "test@test.com", &Time::new(time, 0))?;
        let tree_id = self.repo.treebuilder(None)?.write()?;
        let tree = self.repo.find_tree(tree_id)?;
        Ok(self
            .repo
            .commit(Some(refname), &sig, &sig, message, &tree, &[])?)
    }
}
