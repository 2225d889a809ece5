//! The `service` command: startup registration glue.
//!
//! focusguard does not daemonize itself; it relies on the OS service
//! manager to start it at login and restart it on exit. This module only
//! writes the registration: a systemd user unit on Linux, a logon task via
//! schtasks on Windows.

use colored::Colorize;

use crate::cli::args::ServiceCommands;
use crate::config::settings::parse_duration_setting;
use crate::error::FocusGuardError;

/// Name of the registered service/task.
const SERVICE_NAME: &str = "focusguard";

/// Execute service subcommands.
///
/// # Errors
///
/// Returns an error for invalid durations, unsupported platforms, or failed
/// service-manager invocations.
pub fn service(cmd: ServiceCommands) -> Result<String, FocusGuardError> {
    match cmd {
        ServiceCommands::Install {
            print,
            focus,
            grace,
        } => install(print, focus.as_deref(), grace.as_deref()),
        ServiceCommands::Uninstall => uninstall(),
        ServiceCommands::Status => status(),
    }
}

/// Build the `focusguard run ...` invocation the service manager will start.
fn exec_start(
    focus: Option<&str>,
    grace: Option<&str>,
) -> Result<String, FocusGuardError> {
    // Reject bad durations at registration time, not first service start.
    if let Some(f) = focus {
        parse_duration_setting(f, "focus")?;
    }
    if let Some(g) = grace {
        parse_duration_setting(g, "grace")?;
    }

    let exe = std::env::current_exe()?;
    let mut cmd = format!("{} run", exe.display());
    if let Some(f) = focus {
        cmd.push_str(&format!(" --focus {f}"));
    }
    if let Some(g) = grace {
        cmd.push_str(&format!(" --grace {g}"));
    }
    Ok(cmd)
}

/// Render the systemd user unit for the given `ExecStart` line.
fn render_unit(exec: &str) -> String {
    format!(
        "[Unit]\n\
         Description=focusguard break timer\n\
         After=graphical-session.target\n\
         PartOf=graphical-session.target\n\
         \n\
         [Service]\n\
         Type=simple\n\
         ExecStart={exec}\n\
         Restart=always\n\
         RestartSec=5\n\
         \n\
         [Install]\n\
         WantedBy=default.target\n"
    )
}

#[cfg(target_os = "linux")]
fn unit_path() -> Result<std::path::PathBuf, FocusGuardError> {
    let home = std::env::var("HOME").map_err(|_| {
        FocusGuardError::Config("Could not determine home directory".to_string())
    })?;
    Ok(std::path::PathBuf::from(home)
        .join(".config/systemd/user")
        .join(format!("{SERVICE_NAME}.service")))
}

#[cfg(target_os = "linux")]
fn systemctl(args: &[&str]) -> Result<String, FocusGuardError> {
    let output = std::process::Command::new("systemctl")
        .arg("--user")
        .args(args)
        .output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FocusGuardError::Service(format!(
            "systemctl --user {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "linux")]
fn install(
    print: bool,
    focus: Option<&str>,
    grace: Option<&str>,
) -> Result<String, FocusGuardError> {
    let unit = render_unit(&exec_start(focus, grace)?);
    if print {
        return Ok(unit);
    }

    let path = unit_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(&path, unit)?;

    systemctl(&["daemon-reload"])?;
    systemctl(&["enable", "--now", &format!("{SERVICE_NAME}.service")])?;

    Ok(format!(
        "{} Installed and started {}",
        "✓".green(),
        path.display().to_string().cyan()
    ))
}

#[cfg(target_os = "linux")]
fn uninstall() -> Result<String, FocusGuardError> {
    // Best effort: the unit may already be stopped or half-removed.
    let _ = systemctl(&["disable", "--now", &format!("{SERVICE_NAME}.service")]);

    let path = unit_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        let _ = systemctl(&["daemon-reload"]);
    }

    Ok(format!("{} Uninstalled", "✓".green()))
}

#[cfg(target_os = "linux")]
fn status() -> Result<String, FocusGuardError> {
    let path = unit_path()?;
    if !path.exists() {
        return Ok(format!("{} Not installed", "✗".red()));
    }

    let state = systemctl(&["is-active", &format!("{SERVICE_NAME}.service")])
        .unwrap_or_else(|_| "inactive".to_string());
    let marker = if state == "active" {
        "✓".green()
    } else {
        "✗".yellow()
    };
    Ok(format!("{marker} Installed, {state}"))
}

#[cfg(target_os = "windows")]
fn schtasks(args: &[&str]) -> Result<String, FocusGuardError> {
    let output = std::process::Command::new("schtasks").args(args).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FocusGuardError::Service(format!(
            "schtasks {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "windows")]
fn install(
    print: bool,
    focus: Option<&str>,
    grace: Option<&str>,
) -> Result<String, FocusGuardError> {
    let exec = exec_start(focus, grace)?;
    if print {
        return Ok(format!(
            "schtasks /Create /SC ONLOGON /TN {SERVICE_NAME} /TR \"{exec}\" /F"
        ));
    }

    schtasks(&[
        "/Create", "/SC", "ONLOGON", "/TN", SERVICE_NAME, "/TR", &exec, "/F",
    ])?;
    Ok(format!("{} Registered logon task {SERVICE_NAME}", "✓".green()))
}

#[cfg(target_os = "windows")]
fn uninstall() -> Result<String, FocusGuardError> {
    schtasks(&["/Delete", "/TN", SERVICE_NAME, "/F"])?;
    Ok(format!("{} Uninstalled", "✓".green()))
}

#[cfg(target_os = "windows")]
fn status() -> Result<String, FocusGuardError> {
    match schtasks(&["/Query", "/TN", SERVICE_NAME]) {
        Ok(out) => Ok(out),
        Err(_) => Ok(format!("{} Not installed", "✗".red())),
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn install(
    print: bool,
    focus: Option<&str>,
    grace: Option<&str>,
) -> Result<String, FocusGuardError> {
    // Still render for --print so the unit can be adapted by hand.
    let unit = render_unit(&exec_start(focus, grace)?);
    if print {
        return Ok(unit);
    }
    Err(unsupported())
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn uninstall() -> Result<String, FocusGuardError> {
    Err(unsupported())
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn status() -> Result<String, FocusGuardError> {
    Err(unsupported())
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn unsupported() -> FocusGuardError {
    FocusGuardError::Service(
        "startup registration is not supported on this platform".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unit_contains_exec_and_restart() {
        let unit = render_unit("/usr/bin/focusguard run --focus 45m");
        assert!(unit.contains("ExecStart=/usr/bin/focusguard run --focus 45m"));
        assert!(unit.contains("Restart=always"));
        assert!(unit.contains("WantedBy=default.target"));
    }

    #[test]
    fn test_exec_start_includes_durations() {
        let cmd = exec_start(Some("45m"), Some("15m")).unwrap();
        assert!(cmd.ends_with("run --focus 45m --grace 15m"));
    }

    #[test]
    fn test_exec_start_omits_unset_durations() {
        let cmd = exec_start(None, None).unwrap();
        assert!(cmd.ends_with(" run"));
    }

    #[test]
    fn test_exec_start_rejects_bad_durations() {
        assert!(exec_start(Some("soon"), None).is_err());
        assert!(exec_start(None, Some("0m")).is_err());
    }
}
