//! Screen lock invocation.

use std::process::Command;

use log::{debug, info};

use crate::error::FocusGuardError;
use crate::session::ScreenLocker;

/// Lock commands to try in order; the first one that succeeds wins.
#[cfg(target_os = "linux")]
const LOCK_COMMANDS: &[&[&str]] = &[
    // systemd/logind (most distros)
    &["loginctl", "lock-session"],
    // GNOME (D-Bus)
    &[
        "gdbus",
        "call",
        "--session",
        "--dest",
        "org.gnome.ScreenSaver",
        "--object-path",
        "/org/gnome/ScreenSaver",
        "--method",
        "org.gnome.ScreenSaver.Lock",
    ],
    // GNOME (legacy)
    &["gnome-screensaver-command", "-l"],
    // XDG fallback (some DEs implement this)
    &["xdg-screensaver", "lock"],
    // LightDM
    &["dm-tool", "lock"],
    // XScreenSaver
    &["xscreensaver-command", "-lock"],
];

#[cfg(target_os = "macos")]
const LOCK_COMMANDS: &[&[&str]] = &[
    &[
        "/System/Library/CoreServices/Menu Extras/User.menu/Contents/Resources/CGSession",
        "-suspend",
    ],
    &["pmset", "displaysleepnow"],
];

#[cfg(target_os = "windows")]
const LOCK_COMMANDS: &[&[&str]] = &[&["rundll32", "user32.dll,LockWorkStation"]];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const LOCK_COMMANDS: &[&[&str]] = &[];

/// Screen locker that shells out to the platform's lock command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLocker;

impl ScreenLocker for SessionLocker {
    fn lock(&self) -> Result<(), FocusGuardError> {
        for cmd in LOCK_COMMANDS {
            if try_command(cmd) {
                debug!("screen locked via {}", cmd[0]);
                return Ok(());
            }
        }
        Err(FocusGuardError::Lock(
            "no screen lock command succeeded; install a compatible locker".to_string(),
        ))
    }
}

/// Locker that does nothing but log. Used with `--no-lock`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLocker;

impl ScreenLocker for NoopLocker {
    fn lock(&self) -> Result<(), FocusGuardError> {
        info!("lock skipped (--no-lock)");
        Ok(())
    }
}

fn try_command(cmd: &[&str]) -> bool {
    let Some((program, args)) = cmd.split_first() else {
        return false;
    };
    Command::new(program)
        .args(args)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
