//! Ring-buffer log of recently executed game actions and their results.
//!
//! The UI polls [`ActionResultLog::since`] with the last total it saw to pick
//! up only new entries.

use bevy::prelude::*;

use super::{ActionResult, GameAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(GameAction, ActionResult)>,
    /// Entries ever pushed, including evicted ones.
    total: u64,
}

impl ActionResultLog {
    /// Record a new action/result pair. If the buffer is full the oldest entry
    /// is evicted.
    pub fn push(&mut self, action: GameAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
        self.total += 1;
    }

    /// Return the last `n` entries (or fewer if the log is shorter).
    pub fn last_n(&self, n: usize) -> &[(GameAction, ActionResult)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Entries pushed after the log had `seen_total` entries in total.
    /// Evicted entries are skipped.
    pub fn since(&self, seen_total: u64) -> &[(GameAction, ActionResult)] {
        let new = self.total.saturating_sub(seen_total);
        self.last_n(usize::try_from(new).unwrap_or(usize::MAX))
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
