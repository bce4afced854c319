// Example: the three searches over the same input, recorded for later replay.
use dsa_visualizer::{Complexity, Recorder, binary_search, jump_search, linear_search};

fn report(name: &str, index: isize, rec: &Recorder, complexity: Complexity) {
    println!(
        "{name}: index={index} frames={} ({complexity})",
        rec.frame_snapshots().len()
    );
}

fn main() {
    let values = [10, 5, 8, 2, 7, 1, 9, 4, 6, 3];
    let mut rec = Recorder::new();

    let out = linear_search(&values, 5, rec.frames());
    report("linear", out.index_or_sentinel(), &rec, out.complexity);

    let mut sorted = values;
    sorted.sort_unstable();

    rec.clear();
    let out = binary_search(&sorted, 7, rec.frames());
    report("binary", out.index_or_sentinel(), &rec, out.complexity);

    rec.clear();
    let out = jump_search(&sorted, 7, rec.frames());
    report("jump", out.index_or_sentinel(), &rec, out.complexity);
}
