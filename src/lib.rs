//! focusguard - a focus/grace/lock break timer
//!
//! Tracks continuous PC usage: after a configurable focus interval it sends
//! a break reminder, and after a further grace interval it locks the screen
//! and starts a new cycle.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod platform;
pub mod session;

pub use cli::args::{Cli, Commands};
pub use error::FocusGuardError;
pub use session::{Phase, SessionConfig, SessionTimer};
