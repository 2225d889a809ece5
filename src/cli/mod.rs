//! Command-line interface definitions and command implementations.

pub mod args;
pub mod commands;
