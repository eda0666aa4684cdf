use clap::{Parser, Subcommand};

/// Command-line interface definition for dogcare
#[derive(Parser)]
#[command(
    name = "dogcare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track when your dog got water, count incident-free days and keep the best streak",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record that water was given
    Water {
        /// When it happened: RFC 3339, "YYYY-MM-DD HH:MM[:SS]" (local) or epoch milliseconds
        #[arg(long = "at", value_name = "TIME")]
        at: Option<String>,
    },

    /// Record an incident (resets the streak)
    Incident {
        #[arg(long = "at", value_name = "TIME", help = "When it happened (default: now)")]
        at: Option<String>,
    },

    /// Show last water, current streak, high score and recent water history
    Status {
        #[arg(long = "at", value_name = "TIME", help = "Evaluate as of this time (default: now)")]
        at: Option<String>,

        #[arg(
            long = "limit",
            default_value_t = 10,
            help = "How many history entries to show (0 = all)"
        )]
        limit: usize,
    },

    /// List the water history, most recent first
    History {
        #[arg(long = "limit", help = "Show only the N most recent entries")]
        limit: Option<usize>,
    },

    /// Keep refreshing the status on a timer
    Watch {
        #[arg(long = "interval", value_name = "SECS", help = "Refresh interval in seconds (default from config: 60)")]
        interval: Option<u64>,

        #[arg(long = "ticks", value_name = "N", help = "Stop after N refreshes")]
        ticks: Option<u64>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export all records to CSV
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: dogcare_records_<date>.csv)")]
        file: Option<String>,

        #[arg(long, value_name = "DIR", conflicts_with = "file", help = "Directory for the default file name")]
        dir: Option<String>,

        #[arg(long = "at", value_name = "TIME", help = "Export moment, used for the file name date")]
        at: Option<String>,

        #[arg(long, conflicts_with_all = ["file", "dir"], help = "Print the CSV to stdout instead of a file")]
        stdout: bool,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
