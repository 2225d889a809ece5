//! The focus/grace session state machine.
//!
//! A two-phase countdown: a focus phase that ends with a break reminder,
//! then a grace phase that ends with a screen lock and a fresh cycle.

pub mod timer;

pub use timer::{Clock, Notifier, Phase, ScreenLocker, SessionConfig, SessionTimer};
