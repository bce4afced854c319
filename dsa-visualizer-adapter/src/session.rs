use alloc::vec::Vec;

use dsa_visualizer::{Queue, Stack};

/// Per-session backing sequences for the stack and queue demos.
///
/// Stack and queue operations start empty and persist across interactions within a session.
/// Everything else is stateless. Serialize this (with `feature = "serde"`) to carry a session
/// across requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// Bottom first; the top of the stack is the last element.
    pub stack_data: Vec<i64>,
    /// Front first.
    pub queue_data: Vec<i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against a stack rehydrated from `stack_data`, then writes the sequence back.
    pub fn with_stack<R>(&mut self, f: impl FnOnce(&mut Stack) -> R) -> R {
        let mut stack = Stack::from_items(core::mem::take(&mut self.stack_data));
        let out = f(&mut stack);
        self.stack_data = stack.into_items();
        out
    }

    /// Runs `f` against a queue rehydrated from `queue_data`, then writes the sequence back.
    pub fn with_queue<R>(&mut self, f: impl FnOnce(&mut Queue) -> R) -> R {
        let mut queue = Queue::from_items(core::mem::take(&mut self.queue_data));
        let out = f(&mut queue);
        self.queue_data = queue.into_items();
        out
    }

    /// Empties both sequences, as when a new session starts.
    pub fn reset(&mut self) {
        self.stack_data.clear();
        self.queue_data.clear();
    }
}
