//=========================================================================
// Transition Queue
//=========================================================================
//
// Mode stack changes requested during a frame, applied at its end.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{ModeKey, ModeTransition};

//=== Transition Queue ====================================================

/// FIFO of pending mode transitions.
#[derive(Debug)]
pub struct TransitionQueue<K: ModeKey> {
    queue: Vec<ModeTransition<K>>,
}

impl<K: ModeKey> TransitionQueue<K> {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition for the next frame boundary.
    pub fn push(&mut self, transition: ModeTransition<K>) {
        if transition != ModeTransition::Empty {
            self.queue.push(transition);
        }
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued transitions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<ModeTransition<K>> {
        std::mem::take(&mut self.queue)
    }
}

impl<K: ModeKey> Default for TransitionQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
