//! Adapter utilities for the `dsa-visualizer` crate.
//!
//! The `dsa-visualizer` crate runs algorithms and reports each step; it knows nothing about menus,
//! text boxes or timers. This crate provides small, framework-neutral helpers a UI layer needs
//! around it:
//!
//! - Algorithm identifiers with display names, string lookup and one-line explanations
//! - Parsing of comma-separated number input
//! - Explicit session state for the stack and queue demos
//! - Per-step pacing through an adapter-supplied pacer
//! - A single dispatch entry point ([`Controller::run`])
//!
//! This crate is intentionally framework-agnostic (no terminal or web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod algorithm;
mod controller;
mod error;
mod options;
mod pace;
mod parse;
mod session;


pub use algorithm::{
    Category, ListOperation, QueueOperation, SearchAlgorithm, SortAlgorithm, StackOperation,
    Traversal,
};
pub use controller::{ContainerReport, Controller, Event, Reading, Report, Request, SearchReport};
pub use error::Error;
pub use options::{Pacer, SessionOptions};
pub use pace::Pace;
pub use parse::parse_values;
pub use session::SessionState;
