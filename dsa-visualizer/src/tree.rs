use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Complexity, Order, Outcome, Visit};

type Child = Option<Box<BstNode>>;

/// A node of a [`Bst`]. Nodes are immutable once the tree is built.
pub struct BstNode {
    value: i64,
    left: Child,
    right: Child,
}

impl BstNode {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn left(&self) -> Option<&BstNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&BstNode> {
        self.right.as_deref()
    }

    fn children(&self) -> impl Iterator<Item = &BstNode> {
        self.left().into_iter().chain(self.right())
    }
}

impl Drop for BstNode {
    // Unlink iteratively: a tree built from sorted input is as deep as it is long.
    fn drop(&mut self) {
        let mut pending: Vec<Box<BstNode>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// Shows the node and its direct children only; subtrees can be arbitrarily deep.
impl core::fmt::Debug for BstNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BstNode")
            .field("value", &self.value)
            .field("left", &self.left().map(BstNode::value))
            .field("right", &self.right().map(BstNode::value))
            .finish()
    }
}

/// An unbalanced binary search tree of integers.
///
/// Values smaller than a node go left; values greater than *or equal to* a node go right, so
/// duplicates are kept and appear after the original in an in-order traversal.
///
/// Dropping, cloning, comparing and measuring a tree never recurse, so degenerate (list-shaped)
/// trees of any size are safe to hold.
#[derive(Default)]
pub struct Bst {
    root: Child,
    len: usize,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: i64) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(BstNode::leaf(value)));
        self.len += 1;
    }

    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; `0` for an empty tree.
    pub fn height(&self) -> usize {
        let mut level: Vec<&BstNode> = self.root().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level.iter().flat_map(|&node| node.children()).collect();
        }
        height
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                core::cmp::Ordering::Equal => return true,
                core::cmp::Ordering::Less => node.left(),
                core::cmp::Ordering::Greater => node.right(),
            };
        }
        false
    }
}

impl Clone for Bst {
    fn clone(&self) -> Self {
        // Rebuild bottom-up in post-order: each node's clone is made after its subtrees'.
        let mut post_order = Vec::with_capacity(self.len);
        let mut stack: Vec<&BstNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            post_order.push(node);
            stack.extend(node.children());
        }

        let mut built: Vec<Box<BstNode>> = Vec::new();
        for node in post_order.into_iter().rev() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(BstNode {
                value: node.value,
                left,
                right,
            }));
        }
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl PartialEq for Bst {
    /// Same shape and same values.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut pairs = vec![(self.root(), other.root())];
        while let Some(pair) = pairs.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    pairs.push((a.left(), b.left()));
                    pairs.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Bst {}

impl core::fmt::Debug for Bst {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bst")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish_non_exhaustive()
    }
}

impl FromIterator<i64> for Bst {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// Builds a BST by inserting `values` one at a time, without rebalancing.
pub fn build_bst(values: &[i64]) -> Bst {
    vtrace!(len = values.len(), "build_bst");
    values.iter().copied().collect()
}

const DEPTH_FIRST: Complexity = Complexity::new(Order::Linear, Order::Height);

#[derive(Clone, Copy)]
enum DepthFirst {
    In,
    Pre,
    Post,
}

/// Left subtree, node, right subtree.
pub fn inorder(tree: &Bst, on_visit: impl FnMut(Visit<'_>)) -> Outcome<Vec<i64>> {
    depth_first(tree, DepthFirst::In, on_visit)
}

/// Node, left subtree, right subtree.
pub fn preorder(tree: &Bst, on_visit: impl FnMut(Visit<'_>)) -> Outcome<Vec<i64>> {
    depth_first(tree, DepthFirst::Pre, on_visit)
}

/// Left subtree, right subtree, node.
pub fn postorder(tree: &Bst, on_visit: impl FnMut(Visit<'_>)) -> Outcome<Vec<i64>> {
    depth_first(tree, DepthFirst::Post, on_visit)
}

fn depth_first(
    tree: &Bst,
    kind: DepthFirst,
    mut on_visit: impl FnMut(Visit<'_>),
) -> Outcome<Vec<i64>> {
    let mut order = Vec::with_capacity(tree.len());
    walk(tree.root(), kind, &mut order, &mut on_visit);
    vdebug!(visited = order.len(), "depth_first traversal: done");
    Outcome::new(order, DEPTH_FIRST)
}

fn walk(
    node: Option<&BstNode>,
    kind: DepthFirst,
    order: &mut Vec<i64>,
    on_visit: &mut dyn FnMut(Visit<'_>),
) {
    let Some(node) = node else {
        return;
    };
    if let DepthFirst::Pre = kind {
        visit(node, order, on_visit);
    }
    walk(node.left(), kind, order, on_visit);
    if let DepthFirst::In = kind {
        visit(node, order, on_visit);
    }
    walk(node.right(), kind, order, on_visit);
    if let DepthFirst::Post = kind {
        visit(node, order, on_visit);
    }
}

fn visit(node: &BstNode, order: &mut Vec<i64>, on_visit: &mut dyn FnMut(Visit<'_>)) {
    order.push(node.value);
    on_visit(Visit {
        node,
        order: order.as_slice(),
    });
}

/// Breadth-first, left to right within each level, using a FIFO frontier.
pub fn level_order(tree: &Bst, mut on_visit: impl FnMut(Visit<'_>)) -> Outcome<Vec<i64>> {
    let mut order = Vec::with_capacity(tree.len());
    let mut frontier: VecDeque<&BstNode> = tree.root().into_iter().collect();

    while let Some(node) = frontier.pop_front() {
        visit(node, &mut order, &mut on_visit);
        frontier.extend(node.left());
        frontier.extend(node.right());
    }

    vdebug!(visited = order.len(), "level_order: done");
    Outcome::new(order, Complexity::new(Order::Linear, Order::Linear))
}
