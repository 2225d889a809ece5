//! The `config` command: inspect or scaffold the configuration file.

use colored::Colorize;

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::FocusGuardError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed, or written.
pub fn config(cmd: ConfigCommands) -> Result<String, FocusGuardError> {
    let paths = Paths::new()?;

    match cmd {
        ConfigCommands::Show => show(&paths),
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(&paths, force),
    }
}

fn show(paths: &Paths) -> Result<String, FocusGuardError> {
    let config = Config::load(paths)?;
    // Surface bad durations here instead of at the next `run`.
    config.focus_duration()?;
    config.grace_duration()?;

    let source = if paths.config_file.exists() {
        paths.config_file.display().to_string()
    } else {
        "defaults (no config file)".to_string()
    };

    let yaml = serde_yaml::to_string(&config)?;
    Ok(format!("{} {}\n\n{}", "# source:".dimmed(), source.dimmed(), yaml))
}

fn init(paths: &Paths, force: bool) -> Result<String, FocusGuardError> {
    if paths.config_file.exists() && !force {
        return Err(FocusGuardError::Config(format!(
            "{} already exists (use --force to overwrite)",
            paths.config_file.display()
        )));
    }

    Config::default().save(paths)?;
    Ok(format!(
        "{} Wrote {}",
        "✓".green(),
        paths.config_file.display().to_string().cyan()
    ))
}
