use crate::emitter::FrameEmitter;
use crate::{Complexity, Frame, Order, Outcome};

/// Scans left to right and returns the first index holding `target`.
///
/// Each index is reported as inspected before it is compared; a match is reported again as
/// confirmed.
pub fn linear_search(
    values: &[i64],
    target: i64,
    mut on_step: impl FnMut(Frame<'_>),
) -> Outcome<Option<usize>> {
    const COMPLEXITY: Complexity = Complexity::new(Order::Linear, Order::Constant);
    vtrace!(len = values.len(), target, "linear_search");
    let mut e = FrameEmitter::new(&mut on_step);

    for (i, &v) in values.iter().enumerate() {
        e.inspect(values, i);
        if v == target {
            e.confirm(values, i);
            vdebug!(index = i, frames = e.emitted(), "linear_search: found");
            return Outcome::new(Some(i), COMPLEXITY);
        }
    }

    e.clear(values);
    vdebug!(frames = e.emitted(), "linear_search: not found");
    Outcome::new(None, COMPLEXITY)
}

/// Halves the search interval until `target` is found or the interval is empty.
///
/// `values` must be sorted ascending; this is not checked.
pub fn binary_search(
    values: &[i64],
    target: i64,
    mut on_step: impl FnMut(Frame<'_>),
) -> Outcome<Option<usize>> {
    const COMPLEXITY: Complexity = Complexity::new(Order::Logarithmic, Order::Constant);
    vtrace!(len = values.len(), target, "binary_search");
    let mut e = FrameEmitter::new(&mut on_step);

    // Half-open [low, high) so the bounds never go negative.
    let mut low = 0usize;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        e.inspect(values, mid);
        match values[mid].cmp(&target) {
            core::cmp::Ordering::Equal => {
                e.confirm(values, mid);
                vdebug!(index = mid, frames = e.emitted(), "binary_search: found");
                return Outcome::new(Some(mid), COMPLEXITY);
            }
            core::cmp::Ordering::Less => low = mid + 1,
            core::cmp::Ordering::Greater => high = mid,
        }
    }

    e.clear(values);
    vdebug!(frames = e.emitted(), "binary_search: not found");
    Outcome::new(None, COMPLEXITY)
}

/// Jumps ahead in blocks of `floor(sqrt(n))`, then scans the block that may hold `target`.
///
/// Each jump reports the whole block as inspected; the final scan reports single indexes.
/// `values` must be sorted ascending; this is not checked.
pub fn jump_search(
    values: &[i64],
    target: i64,
    mut on_step: impl FnMut(Frame<'_>),
) -> Outcome<Option<usize>> {
    const COMPLEXITY: Complexity = Complexity::new(Order::SquareRoot, Order::Constant);
    vtrace!(len = values.len(), target, "jump_search");
    let mut e = FrameEmitter::new(&mut on_step);

    let n = values.len();
    let step = jump_step(n);
    let mut left = 0usize;
    let mut right = 0usize;
    while left < n && values[left] <= target {
        right = (left + step).min(n - 1);
        e.inspect_block(values, left, right);
        if target <= values[right] {
            break;
        }
        left += step;
    }

    if left >= n || values[left] > target {
        vdebug!(frames = e.emitted(), "jump_search: no candidate block");
        return Outcome::new(None, COMPLEXITY);
    }

    for i in left..=right {
        e.inspect(values, i);
        if values[i] == target {
            e.confirm(values, i);
            vdebug!(index = i, frames = e.emitted(), "jump_search: found");
            return Outcome::new(Some(i), COMPLEXITY);
        }
    }

    e.clear(values);
    vdebug!(frames = e.emitted(), "jump_search: not found");
    Outcome::new(None, COMPLEXITY)
}

/// Block size for [`jump_search`]: `floor(sqrt(n))`, at least 1.
pub fn jump_step(n: usize) -> usize {
    n.isqrt().max(1)
}
