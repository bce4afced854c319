use alloc::vec::Vec;
use core::time::Duration;

use dsa_visualizer::{Complexity, Frame, Outcome, Visit, linked_list};

use crate::{
    Category, ListOperation, Pace, QueueOperation, SearchAlgorithm, SessionOptions, SessionState,
    SortAlgorithm, StackOperation, Traversal,
};

/// One user interaction, with everything needed to run it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    Search {
        algorithm: SearchAlgorithm,
        values: Vec<i64>,
        target: i64,
    },
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i64>,
    },
    /// Builds a BST from `values` in insertion order, then traverses it.
    Traverse {
        traversal: Traversal,
        values: Vec<i64>,
    },
    /// `value` is ignored by deletes; `position` only by the positional operations.
    List {
        operation: ListOperation,
        values: Vec<i64>,
        value: i64,
        position: usize,
    },
    /// `value` is only used by `Push`.
    Stack { operation: StackOperation, value: i64 },
    /// `value` is only used by `Enqueue`.
    Queue { operation: QueueOperation, value: i64 },
}

impl Request {
    pub fn category(&self) -> Category {
        match self {
            Self::Search { .. } => Category::Searching,
            Self::Sort { .. } => Category::Sorting,
            Self::Traverse { .. } => Category::TreeTraversal,
            Self::List { .. } => Category::ListOperations,
            Self::Stack { .. } => Category::StackOperations,
            Self::Queue { .. } => Category::QueueOperations,
        }
    }

    /// The explanatory sentence for the selected algorithm or operation.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Search { algorithm, .. } => algorithm.explanation(),
            Self::Sort { algorithm, .. } => algorithm.explanation(),
            Self::Traverse { traversal, .. } => traversal.explanation(),
            Self::List { operation, .. } => operation.explanation(),
            Self::Stack { operation, .. } => operation.explanation(),
            Self::Queue { operation, .. } => operation.explanation(),
        }
    }
}

/// A step delivered by [`Controller::run`].
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// Search, sort and positional list steps.
    Frame(Frame<'a>),
    /// Tree traversal steps.
    Visit(Visit<'a>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// The sequence that was actually searched: a sorted copy for binary and jump search.
    pub searched: Vec<i64>,
    pub outcome: Outcome<Option<usize>>,
}

/// What a stack or queue operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading {
    /// The pushed, popped or peeked item; `None` when the container was empty.
    Item(Option<i64>),
    IsEmpty(bool),
    Size(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerReport {
    /// The backing sequence after the operation.
    pub items: Vec<i64>,
    pub outcome: Outcome<Reading>,
}

/// The final result of a [`Request`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Report {
    Search(SearchReport),
    /// The sorted copy.
    Sort(Outcome<Vec<i64>>),
    /// The visit order.
    Traverse(Outcome<Vec<i64>>),
    /// The list contents after the operation, head first.
    List(Outcome<Vec<i64>>),
    Stack(ContainerReport),
    Queue(ContainerReport),
}

impl Report {
    pub fn complexity(&self) -> Complexity {
        match self {
            Self::Search(r) => r.outcome.complexity,
            Self::Sort(o) | Self::Traverse(o) | Self::List(o) => o.complexity,
            Self::Stack(r) | Self::Queue(r) => r.outcome.complexity,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Search(r) => r.outcome.message.as_deref(),
            Self::Sort(o) | Self::Traverse(o) | Self::List(o) => o.message.as_deref(),
            Self::Stack(r) | Self::Queue(r) => r.outcome.message.as_deref(),
        }
    }
}

/// A framework-neutral front end for the `dsa_visualizer` algorithms.
///
/// The controller holds no UI objects and no per-session data. Adapters drive it by calling one of
/// the typed entry points (or [`Controller::run`]) per user interaction, rendering each step from
/// the observer. Inputs are copied at the boundary, so the caller's sequences are never mutated.
///
/// Every delivered step is followed by the family delay from [`SessionOptions`], applied through
/// the configured pacer.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    options: SessionOptions,
}

impl Controller {
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    fn pace(&self, delay: Duration) -> Pace {
        Pace::new(delay, self.options.pacer.clone())
    }

    pub fn search(
        &self,
        algorithm: SearchAlgorithm,
        values: &[i64],
        target: i64,
        mut on_frame: impl FnMut(Frame<'_>),
    ) -> SearchReport {
        vtrace!(?algorithm, len = values.len(), target, "Controller::search");
        let mut searched = values.to_vec();
        if algorithm.needs_sorted_input() && self.options.sort_search_input {
            searched.sort_unstable();
        }

        let mut pace = self.pace(self.options.search_delay);
        let mut step = |frame: Frame<'_>| {
            on_frame(frame);
            pace.tick();
        };
        let outcome = match algorithm {
            SearchAlgorithm::Linear => dsa_visualizer::linear_search(&searched, target, &mut step),
            SearchAlgorithm::Binary => dsa_visualizer::binary_search(&searched, target, &mut step),
            SearchAlgorithm::Jump => dsa_visualizer::jump_search(&searched, target, &mut step),
        };
        vdebug!(
            ?algorithm,
            found = ?outcome.value,
            frames = pace.ticks(),
            "Controller::search: done"
        );
        SearchReport { searched, outcome }
    }

    /// Sorts a copy of `values` and returns it.
    pub fn sort(
        &self,
        algorithm: SortAlgorithm,
        values: &[i64],
        mut on_frame: impl FnMut(Frame<'_>),
    ) -> Outcome<Vec<i64>> {
        vtrace!(?algorithm, len = values.len(), "Controller::sort");
        let mut sorted = values.to_vec();

        let mut pace = self.pace(self.options.sort_delay);
        let mut step = |frame: Frame<'_>| {
            on_frame(frame);
            pace.tick();
        };
        let complexity = match algorithm {
            SortAlgorithm::Bubble => dsa_visualizer::bubble_sort(&mut sorted, &mut step),
            SortAlgorithm::Insertion => dsa_visualizer::insertion_sort(&mut sorted, &mut step),
            SortAlgorithm::Selection => dsa_visualizer::selection_sort(&mut sorted, &mut step),
            SortAlgorithm::Merge => dsa_visualizer::merge_sort(&mut sorted, &mut step),
            SortAlgorithm::Quick => {
                dsa_visualizer::quick_sort_with(&mut sorted, self.options.pivot, &mut step)
            }
        };
        vdebug!(?algorithm, frames = pace.ticks(), "Controller::sort: done");
        Outcome::new(sorted, complexity)
    }

    /// Builds a BST from `values` (insertion order, no rebalancing) and traverses it.
    pub fn traverse(
        &self,
        traversal: Traversal,
        values: &[i64],
        mut on_visit: impl FnMut(Visit<'_>),
    ) -> Outcome<Vec<i64>> {
        vtrace!(?traversal, len = values.len(), "Controller::traverse");
        let tree = dsa_visualizer::build_bst(values);

        let mut pace = self.pace(self.options.traversal_delay);
        let mut step = |visit: Visit<'_>| {
            on_visit(visit);
            pace.tick();
        };
        let outcome = match traversal {
            Traversal::Inorder => dsa_visualizer::inorder(&tree, &mut step),
            Traversal::Preorder => dsa_visualizer::preorder(&tree, &mut step),
            Traversal::Postorder => dsa_visualizer::postorder(&tree, &mut step),
            Traversal::LevelOrder => dsa_visualizer::level_order(&tree, &mut step),
        };
        vdebug!(?traversal, visits = pace.ticks(), "Controller::traverse: done");
        outcome
    }

    /// Builds a linked list from `values`, applies `operation` and returns the resulting contents.
    ///
    /// Only the positional operations report frames.
    pub fn list(
        &self,
        operation: ListOperation,
        values: &[i64],
        value: i64,
        position: usize,
        mut on_frame: impl FnMut(Frame<'_>),
    ) -> Outcome<Vec<i64>> {
        vtrace!(?operation, len = values.len(), value, position, "Controller::list");
        let head = linked_list::from_values(values);

        let mut pace = self.pace(self.options.list_delay);
        let mut step = |frame: Frame<'_>| {
            on_frame(frame);
            pace.tick();
        };
        let outcome = match operation {
            ListOperation::InsertAtBeginning => linked_list::insert_at_beginning(head, value),
            ListOperation::InsertAtEnd => linked_list::insert_at_end(head, value),
            ListOperation::InsertAtPosition => {
                linked_list::insert_at_position(head, value, position, &mut step)
            }
            ListOperation::DeleteAtBeginning => linked_list::delete_at_beginning(head),
            ListOperation::DeleteAtEnd => linked_list::delete_at_end(head),
            ListOperation::DeleteAtPosition => {
                linked_list::delete_at_position(head, position, &mut step)
            }
        };
        if outcome.message.is_some() {
            vdebug!(
                ?operation,
                message = ?outcome.message,
                "Controller::list: not applied as asked"
            );
        }
        outcome.map(|head| linked_list::to_values(&head))
    }

    /// Applies `operation` to the session's stack; `value` is only used by `Push`.
    pub fn stack(
        &self,
        operation: StackOperation,
        value: i64,
        state: &mut SessionState,
    ) -> ContainerReport {
        vtrace!(?operation, value, "Controller::stack");
        let outcome = state.with_stack(|stack| match operation {
            StackOperation::Push => Outcome::new(Reading::Item(Some(value)), stack.push(value)),
            StackOperation::Pop => stack.pop().map(Reading::Item),
            StackOperation::Peek => stack.peek().map(Reading::Item),
            StackOperation::IsEmpty => {
                Outcome::new(Reading::IsEmpty(stack.is_empty()), Complexity::constant())
            }
            StackOperation::Size => {
                Outcome::new(Reading::Size(stack.len()), Complexity::constant())
            }
        });
        ContainerReport {
            items: state.stack_data.clone(),
            outcome,
        }
    }

    /// Applies `operation` to the session's queue; `value` is only used by `Enqueue`.
    pub fn queue(
        &self,
        operation: QueueOperation,
        value: i64,
        state: &mut SessionState,
    ) -> ContainerReport {
        vtrace!(?operation, value, "Controller::queue");
        let outcome = state.with_queue(|queue| match operation {
            QueueOperation::Enqueue => {
                Outcome::new(Reading::Item(Some(value)), queue.enqueue(value))
            }
            QueueOperation::Dequeue => queue.dequeue().map(Reading::Item),
            QueueOperation::Peek => queue.peek().map(Reading::Item),
            QueueOperation::IsEmpty => {
                Outcome::new(Reading::IsEmpty(queue.is_empty()), Complexity::constant())
            }
            QueueOperation::Size => {
                Outcome::new(Reading::Size(queue.len()), Complexity::constant())
            }
        });
        ContainerReport {
            items: state.queue_data.clone(),
            outcome,
        }
    }

    /// Runs one request, delivering every step to `on_event`.
    ///
    /// Only stack and queue requests read or write `state`.
    pub fn run(
        &self,
        request: Request,
        state: &mut SessionState,
        mut on_event: impl FnMut(Event<'_>),
    ) -> Report {
        match request {
            Request::Search {
                algorithm,
                values,
                target,
            } => Report::Search(self.search(algorithm, &values, target, |frame| {
                on_event(Event::Frame(frame))
            })),
            Request::Sort { algorithm, values } => {
                Report::Sort(self.sort(algorithm, &values, |frame| {
                    on_event(Event::Frame(frame))
                }))
            }
            Request::Traverse { traversal, values } => {
                Report::Traverse(self.traverse(traversal, &values, |visit| {
                    on_event(Event::Visit(visit))
                }))
            }
            Request::List {
                operation,
                values,
                value,
                position,
            } => Report::List(self.list(operation, &values, value, position, |frame| {
                on_event(Event::Frame(frame))
            })),
            Request::Stack { operation, value } => {
                Report::Stack(self.stack(operation, value, state))
            }
            Request::Queue { operation, value } => {
                Report::Queue(self.queue(operation, value, state))
            }
        }
    }
}
