use crate::export::ExportFormat;
use clap::{ArgGroup, Args, Parser, Subcommand};

/// Command-line interface definition for deskbook
/// A grade tracker, a weather lookup tool and a SQLite contact book
#[derive(Parser)]
#[command(
    name = "deskbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small desk toolkit: track grades, look up the weather and keep a contact book",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory holding the weather JSON files
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, data directory and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Start an interactive grade tracking session
    Grades {
        /// Read session commands from FILE instead of stdin
        #[arg(long = "script", value_name = "FILE")]
        script: Option<String>,
    },

    /// Manage the contact book
    Contact {
        #[command(subcommand)]
        action: ContactCommand,
    },

    /// Look up the weather and manage history, favorites and units
    Weather {
        #[command(subcommand)]
        action: WeatherCommand,
    },

    /// Manage the database (integrity checks, info, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long = "file", value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long = "compress")]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum ContactCommand {
    /// Add a new contact
    Add(ContactFields),

    /// List contacts, optionally filtered
    List {
        /// Case-insensitive match on name, phone or email
        #[arg(long = "search", short = 's')]
        search: Option<String>,
    },

    /// Edit an existing contact; omitted fields keep their value
    Edit {
        id: i64,

        #[command(flatten)]
        fields: ContactFields,
    },

    /// Delete a contact
    Del {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Export all contacts to a file
    Export {
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "file", value_name = "FILE")]
        file: String,

        /// Overwrite an existing file without asking
        #[arg(long = "force")]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ContactFields {
    #[arg(long = "name")]
    pub name: Option<String>,

    #[arg(long = "phone")]
    pub phone: Option<String>,

    #[arg(long = "email")]
    pub email: Option<String>,
}

#[derive(Subcommand)]
pub enum WeatherCommand {
    /// Fetch the current weather for a city
    Search {
        /// City name
        city: String,
    },

    /// Fetch the weather again for the most recent city
    Refresh,

    /// Show or edit the recent searches
    #[command(group(ArgGroup::new("history_action").args(["remove", "clear"])))]
    History {
        /// Remove CITY from the history
        #[arg(long = "remove", value_name = "CITY")]
        remove: Option<String>,

        /// Remove every entry
        #[arg(long = "clear")]
        clear: bool,
    },

    /// Show or edit favorite cities
    #[command(group(ArgGroup::new("fav_action").args(["add", "remove", "toggle"])))]
    Fav {
        #[arg(long = "add", value_name = "CITY")]
        add: Option<String>,

        #[arg(long = "remove", value_name = "CITY")]
        remove: Option<String>,

        /// Toggle the most recently searched city
        #[arg(long = "toggle")]
        toggle: bool,
    },

    /// Show or change the temperature unit
    #[command(group(ArgGroup::new("unit_action").args(["celsius", "fahrenheit", "toggle"])))]
    Unit {
        #[arg(long = "celsius")]
        celsius: bool,

        #[arg(long = "fahrenheit")]
        fahrenheit: bool,

        #[arg(long = "toggle")]
        toggle: bool,
    },
}
