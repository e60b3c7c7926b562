// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Append-only instruction log

use std::sync::Arc;

use parking_lot::RwLock;

use super::Instruction;

/// The shared, externally-visible ordered log of instructions
///
/// A dumb, total-order append log: no deduplication, validation, or size
/// bound. Handles are cheap clones over the same storage, so the tracker,
/// the classifier, and any external consumer observe one sequence. Entries
/// are never mutated or removed after push; `reset` exists solely for test
/// isolation.
#[derive(Debug, Clone, Default)]
pub struct InstructionQueue {
    entries: Arc<RwLock<Vec<Instruction>>>,
}

impl InstructionQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry in insertion order
    pub fn push(&self, entry: impl Into<Instruction>) {
        self.entries.write().push(entry.into());
    }

    /// Get a read-only copy of all entries in insertion order
    pub fn snapshot(&self) -> Vec<Instruction> {
        self.entries.read().clone()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clear all entries (test isolation hook)
    pub fn reset(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::RawInstruction;

    #[test]
    fn test_push_preserves_order() {
        let queue = InstructionQueue::new();
        queue.push(RawInstruction::SetSiteId("1".into()));
        queue.push(RawInstruction::EnableHeartBeatTimer(15));

        let entries = queue.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_raw().unwrap().name(), "setSiteId");
        assert_eq!(entries[1].as_raw().unwrap().name(), "enableHeartBeatTimer");
    }

    #[test]
    fn test_clones_share_storage() {
        let queue = InstructionQueue::new();
        let handle = queue.clone();
        handle.push(RawInstruction::SetSiteId("1".into()));

        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_reset() {
        let queue = InstructionQueue::new();
        queue.push(RawInstruction::SetSiteId("1".into()));
        queue.reset();
        assert!(queue.is_empty());
    }
}
