//! Break reminder delivery.

use std::io::Write;

use log::debug;
use notify_rust::Notification;

use crate::error::FocusGuardError;
use crate::session::Notifier;

/// Notifier backed by the desktop notification daemon.
///
/// Rings the terminal bell as a fallback when delivery fails, then reports
/// the failure so the timer can log it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, summary: &str, body: &str) -> Result<(), FocusGuardError> {
        match Notification::new()
            .appname("focusguard")
            .summary(summary)
            .body(body)
            .show()
        {
            Ok(_) => {
                debug!("notification delivered: {summary}");
                Ok(())
            }
            Err(e) => {
                beep();
                Err(FocusGuardError::Notify(e.to_string()))
            }
        }
    }
}

/// Notifier that only writes to the terminal. Used with `--no-notify`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, summary: &str, body: &str) -> Result<(), FocusGuardError> {
        beep();
        println!("[NOTIFY] {summary} - {body}");
        Ok(())
    }
}

fn beep() {
    print!("\x07");
    let _ = std::io::stdout().flush();
}
