//! Singly linked list operations.
//!
//! Every operation takes the head by value and hands back the (possibly new) head inside an
//! [`Outcome`], so callers can keep the list wherever they like between interactions.
//! Requests that cannot be applied as asked never fail: they fall back to a defined behavior and
//! explain it in [`Outcome::message`].

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use crate::emitter::FrameEmitter;
use crate::{Complexity, Frame, Order, Outcome};

/// The owning reference to a list node; `None` is the empty list.
pub type Link = Option<Box<ListNode>>;

/// One list node. `Clone`, `PartialEq`, `Debug` and `Drop` all walk the chain iteratively.
pub struct ListNode {
    pub value: i64,
    pub next: Link,
}

impl ListNode {
    pub fn new(value: i64, next: Link) -> Self {
        Self { value, next }
    }

    fn chain(&self) -> impl Iterator<Item = &ListNode> {
        core::iter::successors(Some(self), |node| node.next.as_deref())
    }
}

impl Clone for ListNode {
    fn clone(&self) -> Self {
        let rest: Vec<i64> = self.chain().skip(1).map(|node| node.value).collect();
        Self::new(self.value, from_values(&rest))
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.chain()
            .map(|node| node.value)
            .eq(other.chain().map(|node| node.value))
    }
}

impl Eq for ListNode {}

impl core::fmt::Debug for ListNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.chain().map(|node| node.value))
            .finish()
    }
}

impl Drop for ListNode {
    // Unlink iteratively so long chains don't recurse once per node.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

const AT_HEAD: Complexity = Complexity::constant();
const WALK: Complexity = Complexity::new(Order::Linear, Order::Constant);

const EMPTY_LIST: &str = "The list is empty; nothing to delete.";

/// Builds a list holding `values` in order.
pub fn from_values(values: &[i64]) -> Link {
    values
        .iter()
        .rev()
        .fold(None, |next, &value| Some(Box::new(ListNode::new(value, next))))
}

pub fn iter(head: &Link) -> impl Iterator<Item = &ListNode> {
    core::iter::successors(head.as_deref(), |node| node.next.as_deref())
}

/// Collects the list into a sequence, head first.
pub fn to_values(head: &Link) -> Vec<i64> {
    iter(head).map(|node| node.value).collect()
}

pub fn len(head: &Link) -> usize {
    iter(head).count()
}

/// Returns the link that points at the node with index `steps`, or the tail link if the list is
/// shorter than that.
fn link_at(head: &mut Link, steps: usize) -> &mut Link {
    let mut slot = head;
    for _ in 0..steps {
        match slot {
            Some(node) => slot = &mut node.next,
            None => break,
        }
    }
    slot
}

pub fn insert_at_beginning(head: Link, value: i64) -> Outcome<Link> {
    vtrace!(value, "insert_at_beginning");
    Outcome::new(Some(Box::new(ListNode::new(value, head))), AT_HEAD)
}

pub fn insert_at_end(mut head: Link, value: i64) -> Outcome<Link> {
    vtrace!(value, "insert_at_end");
    let mut slot = &mut head;
    while let Some(node) = slot {
        slot = &mut node.next;
    }
    *slot = Some(Box::new(ListNode::new(value, None)));
    Outcome::new(head, WALK)
}

/// Inserts `value` so that it ends up at index `position`.
///
/// Each node walked past is reported as inspected, then the new node is reported as confirmed.
/// A `position` at or past the current length appends at the end and says so in the message.
pub fn insert_at_position(
    mut head: Link,
    value: i64,
    position: usize,
    mut on_step: impl FnMut(Frame<'_>),
) -> Outcome<Link> {
    vtrace!(value, position, "insert_at_position");
    let mut e = FrameEmitter::new(&mut on_step);
    let before = to_values(&head);
    let len = before.len();
    let target = position.min(len);

    for i in 0..target {
        e.inspect(&before, i);
    }
    let slot = link_at(&mut head, target);
    let rest = slot.take();
    *slot = Some(Box::new(ListNode::new(value, rest)));
    e.confirm(&to_values(&head), target);
    vdebug!(index = target, frames = e.emitted(), "insert_at_position: done");

    let complexity = if position == 0 { AT_HEAD } else { WALK };
    let outcome = Outcome::new(head, complexity);
    if position != 0 && position >= len {
        return outcome.with_message(format!(
            "Position {position} is at or past the end of the list (length {len}); \
             {value} was inserted at the end instead."
        ));
    }
    outcome
}

pub fn delete_at_beginning(head: Link) -> Outcome<Link> {
    vtrace!("delete_at_beginning");
    match head {
        None => Outcome::new(None, AT_HEAD).with_message(EMPTY_LIST),
        Some(mut node) => Outcome::new(node.next.take(), AT_HEAD),
    }
}

pub fn delete_at_end(mut head: Link) -> Outcome<Link> {
    vtrace!("delete_at_end");
    let count = len(&head);
    if count == 0 {
        return Outcome::new(head, WALK).with_message(EMPTY_LIST);
    }
    *link_at(&mut head, count - 1) = None;
    Outcome::new(head, WALK)
}

/// Removes the node at index `position`.
///
/// Each node walked past is reported as inspected, the doomed node as confirmed, and the list is
/// reported once more after relinking. An out-of-range `position` leaves the list untouched and
/// explains why in the message.
pub fn delete_at_position(
    mut head: Link,
    position: usize,
    mut on_step: impl FnMut(Frame<'_>),
) -> Outcome<Link> {
    vtrace!(position, "delete_at_position");
    let mut e = FrameEmitter::new(&mut on_step);
    let before = to_values(&head);
    let len = before.len();
    let complexity = if position == 0 { AT_HEAD } else { WALK };

    if len == 0 {
        return Outcome::new(head, complexity).with_message(EMPTY_LIST);
    }
    if position >= len {
        for i in 0..len {
            e.inspect(&before, i);
        }
        e.clear(&before);
        vdebug!(position, len, "delete_at_position: out of range");
        return Outcome::new(head, complexity).with_message(format!(
            "Position {position} is out of bounds for a list of length {len}; nothing was deleted."
        ));
    }

    for i in 0..position {
        e.inspect(&before, i);
    }
    e.confirm(&before, position);
    let slot = link_at(&mut head, position);
    if let Some(mut node) = slot.take() {
        *slot = node.next.take();
    }
    e.clear(&to_values(&head));
    vdebug!(index = position, frames = e.emitted(), "delete_at_position: done");
    Outcome::new(head, complexity)
}
