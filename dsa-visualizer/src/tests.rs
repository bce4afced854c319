use crate::*;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_value(&mut self) -> i64 {
        self.gen_range_u64(0, 41) as i64 - 20
    }

    fn gen_values(&mut self, max_len: usize) -> Vec<i64> {
        let len = self.gen_range_usize(0, max_len + 1);
        (0..len).map(|_| self.gen_value()).collect()
    }
}

type SortFn = fn(&mut [i64], &mut dyn FnMut(Frame<'_>)) -> Complexity;

fn all_sorts() -> [(&'static str, SortFn); 7] {
    [
        ("bubble", |v, f| bubble_sort(v, f)),
        ("insertion", |v, f| insertion_sort(v, f)),
        ("selection", |v, f| selection_sort(v, f)),
        ("merge", |v, f| merge_sort(v, f)),
        ("quick", |v, f| quick_sort(v, f)),
        ("quick/first", |v, f| quick_sort_with(v, Pivot::First, f)),
        ("quick/middle", |v, f| quick_sort_with(v, Pivot::Middle, f)),
    ]
}

fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn frames_in_bounds(rec: &Recorder) -> bool {
    rec.frame_snapshots().iter().all(|f| {
        f.inspected
            .iter()
            .chain(&f.confirmed)
            .all(|&i| i < f.values.len())
    })
}

#[test]
fn linear_search_scenario() {
    let values = [10, 5, 8, 2, 7, 1, 9, 4, 6, 3];
    let mut rec = Recorder::new();
    let out = linear_search(&values, 5, rec.frames());
    assert_eq!(out.value, Some(1));
    assert_eq!(out.index_or_sentinel(), 1);
    assert_eq!(out.complexity.time.label(), "O(n)");
    assert_eq!(out.complexity.space.label(), "O(1)");
    assert!(out.message.is_none());

    // inspect 0, inspect 1, confirm 1
    let frames = rec.frame_snapshots();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].inspected, [0]);
    assert!(frames[0].confirmed.is_empty());
    assert_eq!(frames[2].inspected, [1]);
    assert_eq!(frames[2].confirmed, [1]);
}

#[test]
fn linear_search_returns_first_match() {
    let out = linear_search(&[4, 7, 7, 7], 7, |_| {});
    assert_eq!(out.value, Some(1));
}

#[test]
fn linear_search_miss_ends_with_cleared_frame() {
    let values = [3, 1, 2];
    let mut rec = Recorder::new();
    let out = linear_search(&values, 9, rec.frames());
    assert_eq!(out.value, None);
    assert_eq!(out.index_or_sentinel(), -1);
    let last = rec.frame_snapshots().last().unwrap();
    assert!(last.inspected.is_empty() && last.confirmed.is_empty());
    assert_eq!(rec.frame_snapshots().len(), 4);
}

#[test]
fn binary_search_scenario() {
    let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut rec = Recorder::new();
    let out = binary_search(&values, 7, rec.frames());
    assert_eq!(out.value, Some(6));
    assert_eq!(out.complexity.time.label(), "O(log n)");

    // mids: 4, 7, 5, 6 (found)
    let mids: Vec<usize> = rec
        .frame_snapshots()
        .iter()
        .filter(|f| f.confirmed.is_empty())
        .map(|f| f.inspected[0])
        .collect();
    assert_eq!(mids, [4, 7, 5, 6]);
}

#[test]
fn searches_on_empty_input_are_immediate_misses() {
    for out in [
        linear_search(&[], 1, |_| {}),
        binary_search(&[], 1, |_| {}),
        jump_search(&[], 1, |_| {}),
    ] {
        assert_eq!(out.value, None);
        assert_eq!(out.index_or_sentinel(), -1);
    }
}

#[test]
fn jump_search_reports_blocks_then_single_indexes() {
    let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    assert_eq!(jump_step(values.len()), 3);
    let mut rec = Recorder::new();
    let out = jump_search(&values, 8, rec.frames());
    assert_eq!(out.value, Some(7));
    assert_eq!(out.complexity.time.label(), "O(√n)");

    let frames = rec.frame_snapshots();
    assert_eq!(frames[0].inspected, [0, 1, 2, 3]);
    assert_eq!(frames[1].inspected, [3, 4, 5, 6]);
    assert_eq!(frames[2].inspected, [6, 7, 8, 9]);
    assert_eq!(frames[3].inspected, [6]);
    assert_eq!(frames[4].inspected, [7]);
    assert_eq!(frames[5].confirmed, [7]);
    assert_eq!(frames.len(), 6);
}

#[test]
fn jump_search_misses() {
    let values = [2, 4, 6, 8, 10];
    assert_eq!(jump_search(&values, 1, |_| {}).value, None);
    assert_eq!(jump_search(&values, 5, |_| {}).value, None);
    assert_eq!(jump_search(&values, 11, |_| {}).value, None);
}

#[test]
fn sorted_searches_agree_with_position_for_distinct_values() {
    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let mut values = rng.gen_values(40);
        values.sort_unstable();
        values.dedup();

        for (i, &v) in values.iter().enumerate() {
            assert_eq!(binary_search(&values, v, |_| {}).value, Some(i));
            assert_eq!(jump_search(&values, v, |_| {}).value, Some(i));
        }
        for absent in [-100, -21, 21, 100] {
            assert_eq!(binary_search(&values, absent, |_| {}).value, None);
            assert_eq!(jump_search(&values, absent, |_| {}).value, None);
        }
        let target = rng.gen_value();
        if !values.contains(&target) {
            assert_eq!(binary_search(&values, target, |_| {}).index_or_sentinel(), -1);
            assert_eq!(jump_search(&values, target, |_| {}).index_or_sentinel(), -1);
        }
    }
}

#[test]
fn linear_search_matches_position() {
    let mut rng = Lcg::new(11);
    for _ in 0..200 {
        let values = rng.gen_values(30);
        let target = rng.gen_value();
        let mut rec = Recorder::new();
        let out = linear_search(&values, target, rec.frames());
        assert_eq!(out.value, values.iter().position(|&v| v == target));
        assert!(frames_in_bounds(&rec));
    }
}

#[test]
fn bubble_sort_scenario() {
    let mut values = [5, 1, 4, 2, 8];
    let complexity = bubble_sort(&mut values, |_| {});
    assert_eq!(values, [1, 2, 4, 5, 8]);
    assert_eq!(complexity, Complexity::new(Order::Quadratic, Order::Constant));
}

#[test]
fn every_sort_yields_sorted_permutation() {
    let mut rng = Lcg::new(42);
    for _ in 0..150 {
        let input = rng.gen_values(32);
        let mut expected = input.clone();
        expected.sort_unstable();

        for (name, sort) in all_sorts() {
            let mut values = input.clone();
            let mut rec = Recorder::new();
            sort(&mut values, &mut rec.frames());
            assert!(is_non_decreasing(&values), "{name}: {values:?}");
            assert_eq!(values, expected, "{name}: not a permutation of {input:?}");
            assert!(frames_in_bounds(&rec), "{name}");
        }
    }
}

#[test]
fn sorts_end_with_everything_confirmed() {
    for (name, sort) in all_sorts() {
        let mut values = vec![3, -1, 2, 2, 0];
        let mut rec = Recorder::new();
        sort(&mut values, &mut rec.frames());
        let last = rec.frame_snapshots().last().unwrap();
        assert_eq!(last.values, [-1, 0, 2, 2, 3], "{name}");
        assert_eq!(last.confirmed, [0, 1, 2, 3, 4], "{name}");
    }
}

#[test]
fn sorts_handle_empty_and_single() {
    for (name, sort) in all_sorts() {
        let mut empty: Vec<i64> = Vec::new();
        sort(&mut empty, &mut |_| {});
        assert!(empty.is_empty(), "{name}");

        let mut one = vec![9];
        sort(&mut one, &mut |_| {});
        assert_eq!(one, [9], "{name}");
    }
}

#[test]
fn sort_complexity_labels() {
    let mut v = [2, 1];
    assert_eq!(
        merge_sort(&mut v, |_| {}).to_string(),
        "Time Complexity: O(n log n), Space Complexity: O(n)"
    );
    let mut v = [2, 1];
    let quick = quick_sort(&mut v, |_| {});
    assert_eq!((quick.time.label(), quick.space.label()), ("O(n log n)", "O(log n)"));
    let mut v = [2, 1];
    assert_eq!(insertion_sort(&mut v, |_| {}).time.label(), "O(n²)");
}

#[test]
fn bubble_sort_reports_swaps_as_confirmed_pairs() {
    let mut values = [2, 1];
    let mut rec = Recorder::new();
    bubble_sort(&mut values, rec.frames());
    let frames = rec.frame_snapshots();
    assert_eq!(frames[0].values, [2, 1]);
    assert_eq!(frames[0].inspected, [0, 1]);
    assert_eq!(frames[1].values, [1, 2]);
    assert_eq!(frames[1].confirmed, [0, 1]);
}

#[test]
fn quick_sort_last_pivot_trace_is_deterministic() {
    let mut a = [4, 2, 5, 1, 3];
    let mut b = a;
    let mut rec_a = Recorder::new();
    let mut rec_b = Recorder::new();
    quick_sort(&mut a, rec_a.frames());
    quick_sort_with(&mut b, Pivot::Last, rec_b.frames());
    assert_eq!(rec_a, rec_b);
    // First comparison is element 0 against the last-element pivot.
    assert_eq!(rec_a.frame_snapshots()[0].inspected, [0, 4]);
}

#[test]
fn quick_sort_survives_sorted_input() {
    let mut values: Vec<i64> = (0..2000).collect();
    quick_sort(&mut values, |_| {});
    assert!(is_non_decreasing(&values));
    let mut values: Vec<i64> = (0..2000).rev().collect();
    quick_sort(&mut values, |_| {});
    assert!(is_non_decreasing(&values));
}

#[test]
fn bst_inorder_scenario() {
    let tree = build_bst(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(tree.len(), 9);
    assert_eq!(tree.height(), 4);
    let mut rec = Recorder::new();
    let out = inorder(&tree, rec.visits());
    assert_eq!(out.value, [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(out.complexity, Complexity::new(Order::Linear, Order::Height));

    let visits = rec.visit_snapshots();
    assert_eq!(visits.len(), 9);
    assert_eq!(visits[0].node, 1);
    assert_eq!(visits[0].order, [1]);
    assert_eq!(visits[8].order, out.value);
}

#[test]
fn bst_preorder_postorder_level_order() {
    let tree = build_bst(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(preorder(&tree, |_| {}).value, [8, 3, 1, 6, 4, 7, 10, 14, 13]);
    assert_eq!(postorder(&tree, |_| {}).value, [1, 4, 7, 6, 3, 13, 14, 10, 8]);

    let level = level_order(&tree, |_| {});
    assert_eq!(level.value, [8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(level.complexity, Complexity::new(Order::Linear, Order::Linear));
}

#[test]
fn bst_duplicates_go_right() {
    let tree = build_bst(&[5, 5, 3, 5]);
    assert_eq!(tree.len(), 4);
    let root = tree.root().unwrap();
    assert_eq!(root.value(), 5);
    assert_eq!(root.right().map(BstNode::value), Some(5));
    assert_eq!(inorder(&tree, |_| {}).value, [3, 5, 5, 5]);
}

#[test]
fn bst_contains() {
    let tree: Bst = [8, 3, 10].into_iter().collect();
    assert!(tree.contains(3));
    assert!(tree.contains(10));
    assert!(!tree.contains(4));
    assert!(!Bst::new().contains(0));
}

#[test]
fn empty_tree_traversals_visit_nothing() {
    let tree = build_bst(&[]);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    let mut rec = Recorder::new();
    assert!(inorder(&tree, rec.visits()).value.is_empty());
    assert!(level_order(&tree, rec.visits()).value.is_empty());
    assert!(rec.is_empty());
}

#[test]
fn random_trees_traverse_every_node_once() {
    let mut rng = Lcg::new(3);
    for _ in 0..100 {
        let mut values = rng.gen_values(40);
        values.sort_unstable();
        values.dedup();
        // Shuffle so the tree shape varies.
        for i in (1..values.len()).rev() {
            let j = rng.gen_range_usize(0, i + 1);
            values.swap(i, j);
        }
        let tree = build_bst(&values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(inorder(&tree, |_| {}).value, sorted);

        let level = level_order(&tree, |_| {}).value;
        assert_eq!(level.len(), values.len());
        let mut seen = level.clone();
        seen.sort_unstable();
        assert_eq!(seen, sorted);

        // A parent is visited before its children.
        fn check(node: Option<&BstNode>, level: &[i64]) {
            let Some(node) = node else { return };
            let at = |v: i64| level.iter().position(|&x| x == v).unwrap();
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert!(at(node.value()) < at(child.value()));
            }
            check(node.left(), level);
            check(node.right(), level);
        }
        check(tree.root(), &level);
    }
}

#[test]
fn linked_list_round_trip_at_beginning() {
    let head = linked_list::from_values(&[1, 2, 3]);
    let inserted = linked_list::insert_at_beginning(head, 0);
    assert_eq!(linked_list::to_values(&inserted.value), [0, 1, 2, 3]);
    assert_eq!(inserted.complexity, Complexity::constant());

    let deleted = linked_list::delete_at_beginning(inserted.value);
    assert_eq!(linked_list::to_values(&deleted.value), [1, 2, 3]);
    assert!(deleted.message.is_none());
}

#[test]
fn linked_list_insert_at_end() {
    let out = linked_list::insert_at_end(linked_list::from_values(&[1, 2]), 9);
    assert_eq!(linked_list::to_values(&out.value), [1, 2, 9]);
    assert_eq!(out.complexity.time, Order::Linear);

    let out = linked_list::insert_at_end(None, 4);
    assert_eq!(linked_list::to_values(&out.value), [4]);
}

#[test]
fn linked_list_insert_at_position_walks_then_confirms() {
    let head = linked_list::from_values(&[1, 2, 3, 4, 5]);
    let mut rec = Recorder::new();
    let out = linked_list::insert_at_position(head, 7, 2, rec.frames());
    assert_eq!(linked_list::to_values(&out.value), [1, 2, 7, 3, 4, 5]);
    assert!(out.message.is_none());

    let frames = rec.frame_snapshots();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].inspected, [0]);
    assert_eq!(frames[1].inspected, [1]);
    assert_eq!(frames[2].values, [1, 2, 7, 3, 4, 5]);
    assert_eq!(frames[2].confirmed, [2]);
}

#[test]
fn linked_list_insert_past_end_appends_with_message() {
    let head = linked_list::from_values(&[1, 2]);
    let out = linked_list::insert_at_position(head, 3, 10, |_| {});
    assert_eq!(linked_list::to_values(&out.value), [1, 2, 3]);
    let message = out.message.unwrap();
    assert!(message.contains("inserted at the end"), "{message}");
}

#[test]
fn linked_list_insert_at_position_zero_is_insert_at_beginning() {
    let out = linked_list::insert_at_position(linked_list::from_values(&[1]), 0, 0, |_| {});
    assert_eq!(linked_list::to_values(&out.value), [0, 1]);
    assert_eq!(out.complexity, Complexity::constant());
    assert!(out.message.is_none());
}

#[test]
fn linked_list_deletes() {
    let out = linked_list::delete_at_end(linked_list::from_values(&[1, 2, 3]));
    assert_eq!(linked_list::to_values(&out.value), [1, 2]);

    let out = linked_list::delete_at_end(linked_list::from_values(&[1]));
    assert!(out.value.is_none());
    assert!(out.message.is_none());

    let mut rec = Recorder::new();
    let head = linked_list::from_values(&[1, 2, 3, 4]);
    let out = linked_list::delete_at_position(head, 1, rec.frames());
    assert_eq!(linked_list::to_values(&out.value), [1, 3, 4]);
    let frames = rec.frame_snapshots();
    assert_eq!(frames[1].confirmed, [1]);
    assert_eq!(frames.last().unwrap().values, [1, 3, 4]);
}

#[test]
fn linked_list_deletes_on_empty_are_noops() {
    for out in [
        linked_list::delete_at_beginning(None),
        linked_list::delete_at_end(None),
        linked_list::delete_at_position(None, 0, |_| {}),
    ] {
        assert!(out.value.is_none());
        assert!(out.message.is_some());
    }
}

#[test]
fn linked_list_delete_out_of_range_is_noop_with_message() {
    let out = linked_list::delete_at_position(linked_list::from_values(&[1, 2, 3]), 3, |_| {});
    assert_eq!(linked_list::to_values(&out.value), [1, 2, 3]);
    let message = out.message.unwrap();
    assert!(message.contains("out of bounds"), "{message}");
}

#[test]
fn linked_list_random_ops_match_vec_model() {
    let mut rng = Lcg::new(99);
    let mut model: Vec<i64> = Vec::new();
    let mut head: Link = None;
    for _ in 0..500 {
        let value = rng.gen_value();
        let position = rng.gen_range_usize(0, model.len() + 3);
        let out = match rng.gen_range_usize(0, 6) {
            0 => {
                model.insert(0, value);
                linked_list::insert_at_beginning(head, value)
            }
            1 => {
                model.push(value);
                linked_list::insert_at_end(head, value)
            }
            2 => {
                model.insert(position.min(model.len()), value);
                linked_list::insert_at_position(head, value, position, |_| {})
            }
            3 => {
                if !model.is_empty() {
                    model.remove(0);
                }
                linked_list::delete_at_beginning(head)
            }
            4 => {
                model.pop();
                linked_list::delete_at_end(head)
            }
            _ => {
                if position < model.len() {
                    model.remove(position);
                }
                linked_list::delete_at_position(head, position, |_| {})
            }
        };
        head = out.value;
        assert_eq!(linked_list::to_values(&head), model);
        assert_eq!(linked_list::len(&head), model.len());
    }
}

#[test]
fn long_list_drops_without_recursion() {
    let values: Vec<i64> = (0..200_000).collect();
    let head = linked_list::from_values(&values);
    assert_eq!(linked_list::len(&head), values.len());
    drop(head);
}

#[test]
fn long_degenerate_tree_drops_without_recursion() {
    // Building is quadratic on sorted input; this is deep enough to overflow a recursive drop.
    let values: Vec<i64> = (0..30_000).collect();
    let tree = build_bst(&values);
    assert_eq!(tree.len(), values.len());
    assert_eq!(tree.height(), values.len());
    assert!(tree.contains(29_999));
    assert_eq!(level_order(&tree, |_| {}).value.len(), values.len());

    let copy = tree.clone();
    assert_eq!(copy, tree);
    drop(copy);
    drop(tree);

    // Descending input leans the other way.
    let descending: Bst = (0..30_000).rev().collect();
    assert_eq!(descending.height(), 30_000);
    drop(descending);
}

#[test]
fn tree_clone_and_eq_follow_shape() {
    let tree = build_bst(&[8, 3, 10, 1, 6, 14, 4, 7, 13, 8]);
    let copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(preorder(&copy, |_| {}).value, preorder(&tree, |_| {}).value);
    assert_eq!(copy.height(), tree.height());

    // Same values, different insertion order, different shape.
    let other = build_bst(&[3, 8, 10, 1, 6, 14, 4, 7, 13, 8]);
    assert_eq!(inorder(&other, |_| {}).value, inorder(&tree, |_| {}).value);
    assert_ne!(other, tree);
    assert_ne!(build_bst(&[1, 2]), build_bst(&[1]));
    assert_eq!(Bst::new(), build_bst(&[]));
}

#[test]
fn long_list_clone_and_eq_do_not_recurse() {
    let values: Vec<i64> = (0..200_000).collect();
    let head = linked_list::from_values(&values);
    let copy = head.clone();
    assert_eq!(copy, head);
    assert_eq!(linked_list::to_values(&copy), values);

    let shorter = linked_list::delete_at_end(copy).value;
    assert_ne!(shorter, head);

    let small = linked_list::from_values(&[1, 2, 3]);
    assert_eq!(alloc::format!("{small:?}"), "Some([1, 2, 3])");
}

#[test]
fn stack_push_pop_round_trip() {
    let mut stack = Stack::from_items(vec![1, 2]);
    assert_eq!(stack.push(3), Complexity::constant());
    let popped = stack.pop();
    assert_eq!(popped.value, Some(3));
    assert!(popped.message.is_none());
    assert_eq!(stack.into_items(), [1, 2]);
}

#[test]
fn stack_empty_signals() {
    let mut stack = Stack::new();
    let popped = stack.pop();
    assert_eq!(popped.value, None);
    assert_eq!(popped.message.as_deref(), Some("Stack is empty."));
    assert_eq!(stack.peek().value, None);
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn stack_peek_does_not_remove() {
    let stack = Stack::from(vec![4, 5]);
    assert_eq!(stack.peek().value, Some(5));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.items(), [4, 5]);
}

#[test]
fn queue_is_fifo() {
    let mut rng = Lcg::new(5);
    for _ in 0..50 {
        let values = rng.gen_values(20);
        let mut queue = Queue::new();
        for &v in &values {
            queue.enqueue(v);
        }
        assert_eq!(queue.len(), values.len());
        let drained: Vec<i64> = (0..values.len())
            .filter_map(|_| queue.dequeue().value)
            .collect();
        assert_eq!(drained, values);
        assert!(queue.is_empty());
    }
}

#[test]
fn queue_empty_signals_and_rehydration() {
    let mut queue = Queue::from_items(vec![7, 8]);
    assert_eq!(queue.peek().value, Some(7));
    assert_eq!(queue.dequeue().value, Some(7));
    assert_eq!(queue.items().collect::<Vec<_>>(), [8]);
    assert_eq!(queue.into_items(), [8]);

    let mut empty = Queue::new();
    let out = empty.dequeue();
    assert_eq!(out.value, None);
    assert_eq!(out.message.as_deref(), Some("Queue is empty."));
    assert_eq!(empty.peek().message.as_deref(), Some("Queue is empty."));
}

#[test]
fn queue_slice_view_survives_wraparound() {
    let mut queue = Queue::from_items(vec![1, 2, 3, 4]);
    for v in 5..40 {
        queue.dequeue();
        queue.enqueue(v);
    }
    let expected: Vec<i64> = (36..40).collect();
    assert_eq!(queue.items().collect::<Vec<_>>(), expected);
    assert_eq!(queue.as_slice(), expected.as_slice());
    assert_eq!(queue.len(), 4);

    let mut stack = Stack::from_items(expected.clone());
    stack.push(40);
    assert_eq!(stack.items()[..4], queue.as_slice()[..]);
}

#[test]
fn frame_emitter_counts_frames() {
    let mut seen = 0usize;
    let mut sink = |_: Frame<'_>| seen += 1;
    let mut e = FrameEmitter::new(&mut sink);
    e.inspect(&[1, 2], 1);
    e.clear(&[1, 2]);
    assert_eq!(e.emitted(), 2);
    drop(e);
    assert_eq!(seen, 2);
}

#[cfg(feature = "serde")]
#[test]
fn snapshots_serialize() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<FrameSnapshot>();
    assert_serde::<VisitSnapshot>();
    assert_serde::<Recorder>();
    assert_serde::<Outcome<Option<usize>>>();
    assert_serde::<Stack>();
    assert_serde::<Queue>();
}
