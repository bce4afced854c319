use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Complexity, Outcome};

const EMPTY_QUEUE: &str = "Queue is empty.";

/// A first-in-first-out view over a caller-owned sequence.
///
/// The front of the queue is the start of the sequence. Rehydrate one per interaction with
/// [`Queue::from_items`] and hand the sequence back with [`Queue::into_items`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Queue {
    items: VecDeque<i64>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<i64>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// The items front first.
    ///
    /// Unlike [`crate::Stack::items`] this is an iterator: the ring buffer may wrap, so a shared
    /// borrow cannot always expose one slice. Use [`Queue::as_slice`] when a slice is needed.
    pub fn items(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.items.iter().copied()
    }

    /// The items front first, as one slice. Straightens the ring buffer if it wrapped.
    pub fn as_slice(&mut self) -> &[i64] {
        self.items.make_contiguous()
    }

    pub fn into_items(self) -> Vec<i64> {
        self.items.into()
    }

    /// Appends at the rear.
    pub fn enqueue(&mut self, value: i64) -> Complexity {
        vtrace!(value, len = self.items.len(), "Queue::enqueue");
        self.items.push_back(value);
        Complexity::constant()
    }

    /// Removes the front value. An empty queue yields `None` and an explanatory message.
    pub fn dequeue(&mut self) -> Outcome<Option<i64>> {
        let dequeued = self.items.pop_front();
        vtrace!(?dequeued, len = self.items.len(), "Queue::dequeue");
        with_empty_message(dequeued)
    }

    /// Reads the front value without removing it.
    pub fn peek(&self) -> Outcome<Option<i64>> {
        with_empty_message(self.items.front().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<Vec<i64>> for Queue {
    fn from(items: Vec<i64>) -> Self {
        Self::from_items(items)
    }
}

fn with_empty_message(value: Option<i64>) -> Outcome<Option<i64>> {
    let outcome = Outcome::new(value, Complexity::constant());
    match value {
        Some(_) => outcome,
        None => outcome.with_message(EMPTY_QUEUE),
    }
}
