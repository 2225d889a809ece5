//! Core utilities shared across the crate.

pub mod duration;

pub use duration::{format_duration, parse_duration};
