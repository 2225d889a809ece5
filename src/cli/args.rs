use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "focusguard")]
#[command(about = "A focus/grace/lock break timer for the desktop")]
#[command(long_about = "focusguard - a break timer that means it

Tracks continuous PC usage: after a configurable focus interval it sends a
break reminder, and after a further grace interval with no break taken it
locks the screen and starts a new cycle.

QUICK START:
  focusguard run                       45m focus, 15m grace (defaults)
  focusguard run --focus 1h --grace 10m
  focusguard service install           Start at login via the OS service manager
  focusguard config init               Write a config file with the defaults

Settings come from ~/.focusguard/config.yaml; command-line flags override
the file. Run it in the foreground or let the service manager supervise it.

For more information on a specific command, run:
  focusguard <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer loop in the foreground
    ///
    /// Starts a focus phase immediately. When it expires a break reminder
    /// is shown and the grace phase begins; when that expires the screen is
    /// locked and a fresh focus phase starts. The loop runs until the
    /// process is stopped (Ctrl+C or a service-manager stop).
    ///
    /// # Examples
    ///
    ///   focusguard run
    ///   focusguard run --focus 45m --grace 15m
    ///   focusguard run --focus 90s --no-lock      Try it out without locking
    #[command(alias = "r")]
    Run(RunArgs),

    /// Manage startup registration with the OS service manager
    ///
    /// Registers the timer so it starts at login and is restarted if it
    /// exits: a systemd user unit on Linux, a logon task on Windows.
    /// focusguard itself stays a plain foreground process; supervision is
    /// the service manager's job.
    ///
    /// # Examples
    ///
    ///   focusguard service install
    ///   focusguard service install --print        Show the unit, touch nothing
    ///   focusguard service status
    ///   focusguard service uninstall
    Service(ServiceArgs),

    /// Inspect or scaffold the configuration file
    ///
    /// # Examples
    ///
    ///   focusguard config show
    ///   focusguard config path
    ///   focusguard config init
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Focus interval before the break reminder (e.g. 45m, 1h30m, 90s)
    #[arg(short, long, env = "FOCUSGUARD_FOCUS")]
    pub focus: Option<String>,

    /// Grace interval between the reminder and the screen lock
    #[arg(short, long, env = "FOCUSGUARD_GRACE")]
    pub grace: Option<String>,

    /// Log instead of locking the screen at grace expiry
    #[arg(long)]
    pub no_lock: bool,

    /// Print reminders to the terminal instead of the notification daemon
    #[arg(long)]
    pub no_notify: bool,
}

#[derive(Args)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub command: ServiceCommands,
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Register the timer with the service manager
    Install {
        /// Print the generated service definition instead of installing it
        #[arg(long)]
        print: bool,

        /// Focus interval baked into the service definition
        #[arg(short, long)]
        focus: Option<String>,

        /// Grace interval baked into the service definition
        #[arg(short, long)]
        grace: Option<String>,
    },

    /// Remove the startup registration
    Uninstall,

    /// Show whether the service is registered and running
    Status,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file populated with the defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
