//! Headless data-structure and algorithm operations that narrate themselves.
//!
//! For adapter-level utilities (algorithm selection, input parsing, session state, pacing), see
//! the `dsa-visualizer-adapter` crate.
//!
//! Every algorithm here runs synchronously to completion and pushes a snapshot to a caller-supplied
//! observer after each meaningful step, so a UI can render it as an animation frame:
//! - searching: linear, binary, jump
//! - sorting: bubble, insertion, selection, merge, quick
//! - binary search trees: construction plus in/pre/post/level-order traversal
//! - singly linked lists: insert and delete at the beginning, end, or a position
//! - stacks and queues over a caller-owned sequence
//!
//! Each entry point also reports its time and space complexity. The crate is UI-agnostic and
//! keeps no state between calls.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
pub mod linked_list;
mod queue;
mod search;
mod sort;
mod stack;
mod state;
mod tree;
mod types;

#[cfg(test)]
mod tests;

pub use emitter::FrameEmitter;
pub use linked_list::{Link, ListNode};
pub use queue::Queue;
pub use search::{binary_search, jump_search, jump_step, linear_search};
pub use sort::{
    Pivot, bubble_sort, insertion_sort, merge_sort, quick_sort, quick_sort_with, selection_sort,
};
pub use stack::Stack;
pub use state::{Frame, FrameSnapshot, Recorder, Visit, VisitSnapshot};
pub use tree::{Bst, BstNode, build_bst, inorder, level_order, postorder, preorder};
pub use types::{Complexity, Order, Outcome};
