//! Recently-landed move queue used to derive staleness.
//!
//! The queue holds move ids, newest first. The caller pushes every landed hit
//! across the whole moveset; a move's staleness is the number of times it
//! appears in the queue.

use crate::config::EngineConstants;
use crate::staleness::StalenessLevel;

/// Prepend `new_id` and truncate to `max_size`, returning a new queue.
pub fn push_staleness<S: AsRef<str>>(recent: &[S], new_id: &str, max_size: usize) -> Vec<String> {
    std::iter::once(new_id.to_owned())
        .chain(recent.iter().map(|id| id.as_ref().to_owned()))
        .take(max_size)
        .collect()
}

/// Staleness of `move_id` given a queue snapshot.
pub fn staleness_level_of<S: AsRef<str>>(recent: &[S], move_id: &str) -> StalenessLevel {
    let count = recent.iter().filter(|id| id.as_ref() == move_id).count();
    StalenessLevel::from_count(count)
}

/// Owned per-fighter staleness queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StalenessQueue {
    recent: Vec<String>,
    max_size: usize,
}

impl StalenessQueue {
    pub fn new() -> Self {
        Self::with_capacity(EngineConstants::STALENESS_QUEUE_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            recent: Vec::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a landed hit.
    pub fn push(&mut self, move_id: &str) {
        self.recent = push_staleness(&self.recent, move_id, self.max_size);
    }

    pub fn level_of(&self, move_id: &str) -> StalenessLevel {
        staleness_level_of(&self.recent, move_id)
    }

    /// Move ids, newest first.
    pub fn as_slice(&self) -> &[String] {
        &self.recent
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

impl Default for StalenessQueue {
    fn default() -> Self {
        Self::new()
    }
}
