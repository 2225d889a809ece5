//! The `run` command: the foreground timer loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;

use crate::cli::args::RunArgs;
use crate::config::settings::parse_duration_setting;
use crate::config::{Config, Paths};
use crate::core::duration::format_duration;
use crate::error::FocusGuardError;
use crate::platform::{
    DesktopNotifier, NoopLocker, SessionLocker, SystemClock, TerminalNotifier,
};
use crate::session::{Notifier, ScreenLocker, SessionConfig, SessionTimer};

/// Run the focus/grace/lock loop until the process is stopped.
///
/// Durations resolve as CLI flag > config file > built-in default. Any
/// invalid duration is fatal here, before the loop starts.
///
/// # Errors
///
/// Returns an error for invalid configuration or if the shutdown signal
/// handler cannot be installed.
pub fn run(args: RunArgs) -> Result<(), FocusGuardError> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;

    let focus = match args.focus {
        Some(ref s) => parse_duration_setting(s, "focus")?,
        None => config.focus_duration()?,
    };
    let grace = match args.grace {
        Some(ref s) => parse_duration_setting(s, "grace")?,
        None => config.grace_duration()?,
    };
    let session = SessionConfig::new(focus, grace)?;

    let notifier: Box<dyn Notifier> = if args.no_notify || !config.timer.notifications {
        Box::new(TerminalNotifier)
    } else {
        Box::new(DesktopNotifier)
    };
    let locker: Box<dyn ScreenLocker> = if args.no_lock || !config.timer.lock {
        Box::new(NoopLocker)
    } else {
        Box::new(SessionLocker)
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| FocusGuardError::Signal(e.to_string()))?;

    println!(
        "{} focus for {} -> reminder -> {} -> lock",
        "focusguard:".bold(),
        format_duration(focus).cyan(),
        format_duration(grace).cyan()
    );

    let mut timer = SessionTimer::new(session, SystemClock, notifier, locker);
    timer.run(&shutdown);

    println!("{}", "Stopped.".dimmed());
    Ok(())
}
