//! Bounded undo history of whole-collection snapshots.

use std::collections::VecDeque;

use crate::model::FurnitureItem;

use super::DEFAULT_UNDO_CAPACITY;

/// Snapshots are stored oldest first; once `capacity` is exceeded the oldest
/// entry is evicted.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: VecDeque<Vec<FurnitureItem>>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }
}

impl UndoHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Push a snapshot, returning the evicted oldest entry if any.
    pub(crate) fn push(&mut self, snapshot: Vec<FurnitureItem>) -> Option<Vec<FurnitureItem>> {
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Vec<FurnitureItem>> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&[FurnitureItem]> {
        self.entries.back().map(Vec::as_slice)
    }

    pub fn oldest(&self) -> Option<&[FurnitureItem]> {
        self.entries.front().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, FurnitureKind, Position};

    fn snapshot(x: f64) -> Vec<FurnitureItem> {
        vec![FurnitureItem::new(
            "a",
            "A",
            FurnitureKind::Chair,
            Dimensions::new(1.0, 1.0, 1.0),
            Position::new(x, 0.0, 0.0),
        )]
    }

    #[test]
    fn pops_most_recent_first() {
        let mut history = UndoHistory::default();
        history.push(snapshot(1.0));
        history.push(snapshot(2.0));
        assert_eq!(history.pop().unwrap()[0].position.x, 2.0);
        assert_eq!(history.pop().unwrap()[0].position.x, 1.0);
        assert!(history.pop().is_none());
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = UndoHistory::with_capacity(2);
        assert!(history.push(snapshot(1.0)).is_none());
        assert!(history.push(snapshot(2.0)).is_none());
        let evicted = history.push(snapshot(3.0)).unwrap();
        assert_eq!(evicted[0].position.x, 1.0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.oldest().unwrap()[0].position.x, 2.0);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = UndoHistory::with_capacity(0);
        history.push(snapshot(1.0));
        assert!(history.is_empty());
    }
}
