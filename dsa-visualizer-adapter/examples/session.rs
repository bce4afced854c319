// Example: drive a short interactive session from text input, the way a UI would.
use std::time::Duration;

use dsa_visualizer_adapter::{
    Controller, Event, Report, Request, SessionOptions, SessionState, SortAlgorithm,
    StackOperation, Traversal, parse_values,
};

fn main() {
    let controller = Controller::new(
        SessionOptions::new()
            .with_delay(Duration::from_millis(20))
            .with_thread_sleep(),
    );
    let mut state = SessionState::new();

    match parse_values("5, 1, x") {
        Ok(values) => println!("unexpected: {values:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    let values = parse_values("8,3,10,1,6,14,4,7,13").unwrap_or_default();
    let algorithm: SortAlgorithm = "quick sort".parse().unwrap_or(SortAlgorithm::Bubble);
    let requests = [
        Request::Sort {
            algorithm,
            values: values.clone(),
        },
        Request::Traverse {
            traversal: Traversal::LevelOrder,
            values,
        },
        Request::Stack {
            operation: StackOperation::Push,
            value: 42,
        },
        Request::Stack {
            operation: StackOperation::Pop,
            value: 0,
        },
        Request::Stack {
            operation: StackOperation::Pop,
            value: 0,
        },
    ];

    for request in requests {
        println!("== {:?}: {}", request.category(), request.explanation());
        let report = controller.run(request, &mut state, |event| match event {
            Event::Frame(f) => println!("  {:?} inspected={:?}", f.values, f.inspected),
            Event::Visit(v) => println!("  visit {} -> {:?}", v.node.value(), v.order),
        });
        match &report {
            Report::Sort(o) | Report::Traverse(o) => println!("result={:?}", o.value),
            Report::Stack(r) => println!("stack={:?} read={:?}", r.items, r.outcome.value),
            other => println!("{other:?}"),
        }
        println!("{}", report.complexity());
        if let Some(message) = report.message() {
            println!("note: {message}");
        }
    }
}
