//! Command-line interface.

pub mod args;
