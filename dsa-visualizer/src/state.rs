use alloc::vec::Vec;

use crate::BstNode;

/// One animation step for sequence-shaped structures (arrays and linked lists).
///
/// `inspected` holds the indexes touched by this step (compared, scanned, walked past);
/// `confirmed` holds the indexes whose role was just settled (a match, a swap, a placement).
/// Both are ordered and always in bounds for `values`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    pub values: &'a [i64],
    pub inspected: &'a [usize],
    pub confirmed: &'a [usize],
}

impl Frame<'_> {
    pub fn to_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::from(*self)
    }
}

/// One animation step of a tree traversal: the node being visited and the visit order so far
/// (including `node`).
#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub node: &'a BstNode,
    pub order: &'a [i64],
}

impl Visit<'_> {
    pub fn to_snapshot(&self) -> VisitSnapshot {
        VisitSnapshot::from(*self)
    }
}

/// An owned copy of a [`Frame`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    pub values: Vec<i64>,
    pub inspected: Vec<usize>,
    pub confirmed: Vec<usize>,
}

impl From<Frame<'_>> for FrameSnapshot {
    fn from(frame: Frame<'_>) -> Self {
        Self {
            values: frame.values.to_vec(),
            inspected: frame.inspected.to_vec(),
            confirmed: frame.confirmed.to_vec(),
        }
    }
}

/// An owned copy of a [`Visit`], keeping the visited value rather than the node.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitSnapshot {
    pub node: i64,
    pub order: Vec<i64>,
}

impl From<Visit<'_>> for VisitSnapshot {
    fn from(visit: Visit<'_>) -> Self {
        Self {
            node: visit.node.value(),
            order: visit.order.to_vec(),
        }
    }
}

/// Collects owned snapshots so a renderer can replay them later instead of drawing inline.
///
/// ```
/// use dsa_visualizer::{Recorder, bubble_sort};
///
/// let mut rec = Recorder::new();
/// let mut values = [3, 1, 2];
/// bubble_sort(&mut values, rec.frames());
/// assert_eq!(rec.frame_snapshots().last().unwrap().values, [1, 2, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recorder {
    frames: Vec<FrameSnapshot>,
    visits: Vec<VisitSnapshot>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a frame observer that appends to this recorder.
    pub fn frames(&mut self) -> impl FnMut(Frame<'_>) + '_ {
        |frame| self.frames.push(frame.into())
    }

    /// Returns a visit observer that appends to this recorder.
    pub fn visits(&mut self) -> impl FnMut(Visit<'_>) + '_ {
        |visit| self.visits.push(visit.into())
    }

    pub fn frame_snapshots(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn visit_snapshots(&self) -> &[VisitSnapshot] {
        &self.visits
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.visits.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.visits.clear();
    }
}
