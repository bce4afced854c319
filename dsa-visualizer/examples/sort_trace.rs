// Example: print every frame of a quick sort as a text animation.
use dsa_visualizer::{Frame, Pivot, quick_sort_with};

fn render(frame: Frame<'_>) {
    let cells: Vec<String> = frame
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if frame.confirmed.contains(&i) {
                format!("[{v}]")
            } else if frame.inspected.contains(&i) {
                format!("<{v}>")
            } else {
                format!(" {v} ")
            }
        })
        .collect();
    println!("{}", cells.join(""));
}

fn main() {
    let mut values = [5, 1, 4, 2, 8];
    let complexity = quick_sort_with(&mut values, Pivot::Last, render);
    println!("sorted={values:?}");
    println!("{complexity}");
}
