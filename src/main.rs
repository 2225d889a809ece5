use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use focusguard::cli::args::{Cli, Commands};
use focusguard::cli::commands;
use focusguard::error::FocusGuardError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusGuardError> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Run(args) => {
            commands::run(args)?;
            String::new()
        }
        Commands::Service(args) => commands::service(args.command)?,
        Commands::Config(args) => commands::config(args.command)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
