//! Addrbook CLI
//!
//! Command-line interface for addrbook - a personal contact directory.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, DEFAULT_FILE_NAME};

#[derive(Parser)]
#[command(name = "addrbook")]
#[command(version, about = "Personal contact directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir + /addrbook)
    #[arg(long, global = true, env = "ADDRBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Snapshot file name inside the data directory
    #[arg(long, global = true, env = "ADDRBOOK_FILE", default_value = DEFAULT_FILE_NAME)]
    file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a contact, or extend an existing one
    Add {
        /// Contact name
        name: String,

        /// Phone number
        phone: Option<String>,

        /// Birthday (DD-MM-YYYY)
        #[arg(long)]
        birthday: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Add a phone number to a contact
    AddPhone {
        /// Contact name
        name: String,
        /// Phone number
        phone: String,
    },

    /// Replace a contact's phone number
    Change {
        /// Contact name
        name: String,
        /// Current phone number
        old: String,
        /// New phone number
        new: String,
    },

    /// Remove a phone number from a contact
    RemovePhone {
        /// Contact name
        name: String,
        /// Phone number to remove
        phone: String,
    },

    /// Set a contact's birthday
    SetBirthday {
        /// Contact name
        name: String,
        /// Birthday (DD-MM-YYYY)
        date: String,
    },

    /// Set a contact's email
    SetEmail {
        /// Contact name
        name: String,
        /// Email address
        email: String,
    },

    /// Remove a contact
    Remove {
        /// Contact name
        name: String,
    },

    /// Show contact details
    Show {
        /// Contact name
        name: String,
    },

    /// List all contacts
    List,

    /// Search contacts by name or phone
    Search {
        /// Search query
        query: String,
    },

    /// List contacts a page at a time
    Page {
        /// Contacts per page
        size: usize,

        /// Print every page instead of only the first
        #[arg(long)]
        all: bool,
    },

    /// Days until a contact's next birthday
    Birthday {
        /// Contact name
        name: String,
    },

    /// Export all contacts as vCard
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Import contacts from a vCard file
    Import {
        /// Input file path
        input: PathBuf,
    },

    /// Interactive command shell reading from stdin
    Shell,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("addrbook=warn,addrbook_core=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            display::report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("addrbook")
    });

    let config = CliConfig {
        data_dir,
        file_name: cli.file,
    };

    match cli.command {
        Commands::Add {
            name,
            phone,
            birthday,
            email,
        } => {
            commands::contacts::add(
                &config,
                &name,
                phone.as_deref(),
                birthday.as_deref(),
                email.as_deref(),
            )?;
        }
        Commands::AddPhone { name, phone } => commands::contacts::add_phone(&config, &name, &phone)?,
        Commands::Change { name, old, new } => {
            commands::contacts::change(&config, &name, &old, &new)?;
        }
        Commands::RemovePhone { name, phone } => {
            commands::contacts::remove_phone(&config, &name, &phone)?;
        }
        Commands::SetBirthday { name, date } => {
            commands::contacts::set_birthday(&config, &name, &date)?;
        }
        Commands::SetEmail { name, email } => {
            commands::contacts::set_email(&config, &name, &email)?;
        }
        Commands::Remove { name } => commands::contacts::remove(&config, &name)?,
        Commands::Show { name } => commands::contacts::show(&config, &name)?,
        Commands::List => commands::contacts::list(&config)?,
        Commands::Search { query } => commands::contacts::search(&config, &query)?,
        Commands::Page { size, all } => commands::contacts::page(&config, size, all)?,
        Commands::Birthday { name } => commands::contacts::birthday(&config, &name)?,
        Commands::Export { output } => commands::interchange::export(&config, &output)?,
        Commands::Import { input } => commands::interchange::import(&config, &input)?,
        Commands::Shell => commands::shell::run(&config)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "addrbook", &mut io::stdout());
        }
    }

    Ok(())
}
