use clap::{Parser, Subcommand};

/// Command-line interface definition for lockin
/// Track study sessions with SQLite and review your hours week by week
#[derive(Parser)]
#[command(
    name = "lockin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A study-session tracker: clock in, clock out, and review weekly hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Open the interactive tracking view (clock in / clock out)
    Track,

    /// Print hours worked per ISO week
    Summary,

    /// Print total hours worked
    Total,

    /// Delete all recorded sessions
    Reset {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}
