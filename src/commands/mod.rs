//! Top-level commands

pub mod backup;
