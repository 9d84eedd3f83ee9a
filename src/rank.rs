//! Ranking branches by tip commit recency

use crate::git::BranchEntry;
use std::cmp::Reverse;

/// Keep the `count` most recently committed entries, newest first
///
/// A `count` of zero, or one larger than the number of entries, keeps every
/// entry. Entries with equal commit times keep their discovery order. Only
/// the kept entries are fully sorted.
#[must_use]
pub fn rank(entries: Vec<BranchEntry>, count: usize) -> Vec<BranchEntry> {
    let count = if count == 0 || count > entries.len() {
        entries.len()
    } else {
        count
    };

    // Discovery index makes the key a total order, so the unstable
    // selection below is still deterministic.
    let mut keyed: Vec<(usize, BranchEntry)> = entries.into_iter().enumerate().collect();
    let key = |(index, entry): &(usize, BranchEntry)| (Reverse(entry.time), *index);

    if count < keyed.len() {
        keyed.select_nth_unstable_by_key(count, key);
        keyed.truncate(count);
    }
    keyed.sort_unstable_by_key(key);

    keyed.into_iter().map(|(_, entry)| entry).collect()
}
