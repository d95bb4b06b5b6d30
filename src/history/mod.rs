//! Bounded undo/redo history over immutable snapshots.
//!
//! Checkpoints are created only by explicit [`History::commit`] calls.
//! [`History::undo`] and [`History::redo`] move the cursor and never record
//! anything, so navigating the history cannot overwrite it.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::model::GridConfiguration;

/// Number of snapshots retained by default.
pub const DEFAULT_CAPACITY: usize = 30;

/// History of grid configurations, as kept by the editor.
pub type ConfigHistory = History<GridConfiguration>;

/// One immutable checkpoint.
#[derive(Debug)]
pub struct HistoryEntry<T> {
    snapshot: Arc<T>,
    sequence: u64,
}

impl<T> Clone for HistoryEntry<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            sequence: self.sequence,
        }
    }
}

impl<T> HistoryEntry<T> {
    pub fn snapshot(&self) -> &T {
        &self.snapshot
    }

    pub fn shared(&self) -> Arc<T> {
        Arc::clone(&self.snapshot)
    }

    /// Logical sequence number; strictly increasing across commits, never reused.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<HistoryEntry<T>>,
    cursor: usize,
    capacity: usize,
    next_sequence: u64,
}

impl<T> History<T> {
    /// History holding `initial` as its only entry, cursor on it.
    pub fn new(initial: T) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// A capacity of zero is raised to one so the current snapshot always exists.
    pub fn with_capacity(initial: T, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity);
        entries.push_back(HistoryEntry {
            snapshot: Arc::new(initial),
            sequence: 0,
        });
        Self {
            entries,
            cursor: 0,
            capacity,
            next_sequence: 1,
        }
    }

    /// Record a new checkpoint and make it current.
    ///
    /// Entries after the cursor are discarded first; the oldest entry is
    /// evicted once the capacity is exceeded.
    pub fn commit(&mut self, snapshot: T) -> &HistoryEntry<T> {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(HistoryEntry {
            snapshot: Arc::new(snapshot),
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        self.current_entry()
    }

    /// Step back one entry if possible and return the snapshot under the cursor.
    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one entry if possible and return the snapshot under the cursor.
    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn current(&self) -> &T {
        self.current_entry().snapshot()
    }

    pub fn current_entry(&self) -> &HistoryEntry<T> {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its current entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry<T>> {
        self.entries.iter()
    }
}
