//! Run configuration

use crate::git::Kind;

/// Number of branches shown when no count is given
pub const DEFAULT_COUNT: usize = 7;

/// What to list and how many
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of branches to show, zero means all
    pub count: usize,
    /// Which branch namespace to list
    pub kind: Kind,
}

impl Config {
    /// Create a configuration for `count` branches of the given kind
    #[must_use]
    pub const fn new(count: usize, kind: Kind) -> Self {
        Self { count, kind }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT, Kind::Local)
    }
}
