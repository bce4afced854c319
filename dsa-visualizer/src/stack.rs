use alloc::vec::Vec;

use crate::{Complexity, Outcome};

const EMPTY_STACK: &str = "Stack is empty.";

/// A last-in-first-out view over a caller-owned sequence.
///
/// The top of the stack is the end of the sequence. Rehydrate one per interaction with
/// [`Stack::from_items`] and hand the sequence back with [`Stack::into_items`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    items: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<i64>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn into_items(self) -> Vec<i64> {
        self.items
    }

    pub fn push(&mut self, value: i64) -> Complexity {
        vtrace!(value, len = self.items.len(), "Stack::push");
        self.items.push(value);
        Complexity::constant()
    }

    /// Removes the top value. An empty stack yields `None` and an explanatory message.
    pub fn pop(&mut self) -> Outcome<Option<i64>> {
        let popped = self.items.pop();
        vtrace!(?popped, len = self.items.len(), "Stack::pop");
        with_empty_message(popped)
    }

    /// Reads the top value without removing it.
    pub fn peek(&self) -> Outcome<Option<i64>> {
        with_empty_message(self.items.last().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<Vec<i64>> for Stack {
    fn from(items: Vec<i64>) -> Self {
        Self::from_items(items)
    }
}

fn with_empty_message(value: Option<i64>) -> Outcome<Option<i64>> {
    let outcome = Outcome::new(value, Complexity::constant());
    match value {
        Some(_) => outcome,
        None => outcome.with_message(EMPTY_STACK),
    }
}
