use alloc::vec::Vec;

use crate::emitter::FrameEmitter;
use crate::{Complexity, Frame, Order};

/// Pivot selection for [`quick_sort_with`].
///
/// The chosen element is moved to the end of the partition before partitioning, so every
/// strategy shares the same partition trace shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pivot {
    First,
    Middle,
    #[default]
    Last,
}

impl Pivot {
    fn index(self, lo: usize, hi: usize) -> usize {
        match self {
            Self::First => lo,
            Self::Middle => lo + (hi - lo - 1) / 2,
            Self::Last => hi - 1,
        }
    }
}

/// Repeated adjacent compare-and-swap passes; stops early once a pass makes no swap.
///
/// Every comparison is reported with the compared pair inspected; a swap is reported with the
/// pair confirmed.
pub fn bubble_sort(values: &mut [i64], mut on_step: impl FnMut(Frame<'_>)) -> Complexity {
    vtrace!(len = values.len(), "bubble_sort");
    let mut e = FrameEmitter::new(&mut on_step);
    let n = values.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            e.emit(values, &[j, j + 1], &[]);
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                e.emit(values, &[j, j + 1], &[j, j + 1]);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    e.settle(values);
    vdebug!(frames = e.emitted(), "bubble_sort: done");
    Complexity::new(Order::Quadratic, Order::Constant)
}

/// Grows a sorted prefix, shifting larger elements right to open a slot for each new element.
pub fn insertion_sort(values: &mut [i64], mut on_step: impl FnMut(Frame<'_>)) -> Complexity {
    vtrace!(len = values.len(), "insertion_sort");
    let mut e = FrameEmitter::new(&mut on_step);

    for i in 1..values.len() {
        let key = values[i];
        e.inspect(values, i);
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            e.emit(values, &[j - 1], &[j]);
            j -= 1;
        }
        values[j] = key;
        e.emit(values, &[i], &[j]);
    }

    e.settle(values);
    vdebug!(frames = e.emitted(), "insertion_sort: done");
    Complexity::new(Order::Quadratic, Order::Constant)
}

/// Finds the minimum of the unsorted suffix and swaps it to the front of the suffix.
pub fn selection_sort(values: &mut [i64], mut on_step: impl FnMut(Frame<'_>)) -> Complexity {
    vtrace!(len = values.len(), "selection_sort");
    let mut e = FrameEmitter::new(&mut on_step);
    let n = values.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            e.emit(values, &[min, j], &[]);
            if values[j] < values[min] {
                min = j;
                e.inspect(values, min);
            }
        }
        if min != i {
            values.swap(i, min);
        }
        e.emit(values, &[min], &[i]);
    }

    e.settle(values);
    vdebug!(frames = e.emitted(), "selection_sort: done");
    Complexity::new(Order::Quadratic, Order::Constant)
}

/// Top-down merge sort using one scratch buffer; each written index is reported.
pub fn merge_sort(values: &mut [i64], mut on_step: impl FnMut(Frame<'_>)) -> Complexity {
    vtrace!(len = values.len(), "merge_sort");
    let mut e = FrameEmitter::new(&mut on_step);
    let n = values.len();
    let mut scratch = Vec::with_capacity(n);

    merge_sort_range(values, 0, n, &mut scratch, &mut e);

    e.settle(values);
    vdebug!(frames = e.emitted(), "merge_sort: done");
    Complexity::new(Order::Linearithmic, Order::Linear)
}

fn merge_sort_range(
    values: &mut [i64],
    lo: usize,
    hi: usize,
    scratch: &mut Vec<i64>,
    e: &mut FrameEmitter<'_>,
) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort_range(values, lo, mid, scratch, e);
    merge_sort_range(values, mid, hi, scratch, e);

    scratch.clear();
    scratch.extend_from_slice(&values[lo..hi]);
    let (left, right) = scratch.split_at(mid - lo);
    let (mut i, mut j, mut k) = (0usize, 0usize, lo);

    while i < left.len() && j < right.len() {
        // `<=` keeps equal keys in their original order.
        if left[i] <= right[j] {
            values[k] = left[i];
            i += 1;
        } else {
            values[k] = right[j];
            j += 1;
        }
        e.confirm(values, k);
        k += 1;
    }
    for &v in left[i..].iter().chain(&right[j..]) {
        values[k] = v;
        e.confirm(values, k);
        k += 1;
    }
}

/// Quick sort with the last element as pivot. See [`quick_sort_with`].
pub fn quick_sort(values: &mut [i64], on_step: impl FnMut(Frame<'_>)) -> Complexity {
    quick_sort_with(values, Pivot::Last, on_step)
}

/// Lomuto-partition quick sort.
///
/// Comparisons against the pivot are reported as inspected pairs; swaps as confirmed pairs; the
/// pivot's final slot as a single confirmed index. Recursion always descends into the smaller
/// partition, so the stack stays `O(log n)` even on adversarial input.
pub fn quick_sort_with(
    values: &mut [i64],
    pivot: Pivot,
    mut on_step: impl FnMut(Frame<'_>),
) -> Complexity {
    vtrace!(len = values.len(), ?pivot, "quick_sort");
    let mut e = FrameEmitter::new(&mut on_step);

    let n = values.len();
    quick_sort_range(values, 0, n, pivot, &mut e);

    e.settle(values);
    vdebug!(frames = e.emitted(), "quick_sort: done");
    Complexity::new(Order::Linearithmic, Order::Logarithmic)
}

fn quick_sort_range(
    values: &mut [i64],
    mut lo: usize,
    mut hi: usize,
    pivot: Pivot,
    e: &mut FrameEmitter<'_>,
) {
    while hi - lo >= 2 {
        let p = partition(values, lo, hi, pivot, e);
        if p - lo < hi - (p + 1) {
            quick_sort_range(values, lo, p, pivot, e);
            lo = p + 1;
        } else {
            quick_sort_range(values, p + 1, hi, pivot, e);
            hi = p;
        }
    }
}

fn partition(
    values: &mut [i64],
    lo: usize,
    hi: usize,
    pivot: Pivot,
    e: &mut FrameEmitter<'_>,
) -> usize {
    let last = hi - 1;
    let chosen = pivot.index(lo, hi);
    if chosen != last {
        values.swap(chosen, last);
        e.emit(values, &[chosen, last], &[chosen, last]);
    }

    let pivot_value = values[last];
    let mut store = lo;
    for j in lo..last {
        e.emit(values, &[j, last], &[]);
        if values[j] < pivot_value {
            if store != j {
                values.swap(store, j);
                e.emit(values, &[store, j], &[store, j]);
            }
            store += 1;
        }
    }
    values.swap(store, last);
    e.confirm(values, store);
    store
}
