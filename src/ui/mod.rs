//! User interface components

pub mod report;

pub use report::{format_event, print_event};
