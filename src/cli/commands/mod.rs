//! Command implementations for focusguard.

mod config;
mod run;
mod service;

pub use config::config;
pub use run::run;
pub use service::service;
