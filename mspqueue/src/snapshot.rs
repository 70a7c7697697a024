use mspsource::MediaItem;
use serde::Serialize;

use crate::{ExplicitFilter, PlayMode};

/// One row of a [`QueueSnapshot`].
#[derive(Clone, Debug, Serialize)]
pub struct QueueEntry {
    /// 1-based position in play order.
    pub position: usize,
    /// 1-based position in insertion order, as reported by
    /// `queue_position_one_based`.
    pub queue_position: usize,
    pub item: MediaItem,
}

/// Logical view of a queue, in play order.
///
/// Detached from the controller: mutating the queue afterwards does not
/// affect an existing snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct QueueSnapshot {
    pub entries: Vec<QueueEntry>,
    /// Index (0-based) of the current entry in `entries`, or `None` when the
    /// cursor sits before the first entry.
    pub current_index: Option<usize>,
    pub mode: PlayMode,
    pub explicit_filter: ExplicitFilter,
}

impl QueueSnapshot {
    /// Returns the number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot contains no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&QueueEntry> {
        self.current_index.and_then(|i| self.entries.get(i))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per entry, the current one marked with `>`.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let marker = if Some(i) == self.current_index { '>' } else { ' ' };
                let mut line = format!(
                    "{marker} {:>3}. {} - {}",
                    entry.position, entry.item.artist, entry.item.title
                );
                if let Some(container) = &entry.item.container {
                    line.push_str(&format!(" [{container}]"));
                }
                if entry.item.explicit {
                    line.push_str(" (E)");
                }
                line
            })
            .collect()
    }
}
