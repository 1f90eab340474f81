//! Formcraft CLI
//!
//! Command-line access to the forms and surveys kept in the local store.
//!
//! # Usage
//!
//! ```bash
//! formcraft forms list --status draft
//! formcraft forms new "Leave request"
//! formcraft forms layout <id> --tab 0
//! formcraft forms export <id> > leave.json
//! formcraft login "Camille" hr@example.com --role hr_manager
//! formcraft surveys list --search pulse
//! formcraft stats
//! formcraft templates
//! ```

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use formcraft_core::{FormId, Status};
use formcraft_settings::{FormcraftSettings, ensure_directories};
use formcraft_storage::{FileStore, Role};
use formcraft_survey::SurveyId;
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "formcraft")]
#[command(version)]
#[command(about = "Formcraft form and survey store", long_about = None)]
struct Cli {
    /// Store directory, overriding the settings file
    #[arg(long, global = true, env = "FORMCRAFT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage forms
    Forms {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// Manage surveys
    Surveys {
        #[command(subcommand)]
        action: SurveyCommands,
    },
    /// List the built-in survey templates
    Templates,
    /// Survey counters
    Stats,
    /// Sign in; creating, copying and deleting need hr_manager or admin
    Login {
        name: String,
        email: String,
        /// admin, hr_manager or employee
        #[arg(long, default_value = "employee")]
        role: Role,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
pub enum FormCommands {
    /// List stored forms
    List {
        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
        /// draft, published or closed
        #[arg(long)]
        status: Option<Status>,
    },
    /// Show the fields of a form
    Show { id: FormId },
    /// Print a form as a JSON document
    Export { id: FormId },
    /// Store a form from a JSON document
    Import { path: PathBuf },
    /// Show how the groups of a tab pack into rows
    Layout {
        id: FormId,
        #[arg(long, default_value_t = 0)]
        tab: usize,
    },
    /// Store a copy of a form
    Duplicate { id: FormId },
    /// Delete a form
    Delete { id: FormId },
    /// Create an empty draft form
    New { name: String },
}

#[derive(Subcommand)]
pub enum SurveyCommands {
    /// List stored surveys
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<Status>,
    },
    /// Delete a survey
    Delete { id: SurveyId },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.settings {
        Some(path) => FormcraftSettings::load_from(path)?,
        None => FormcraftSettings::load()?,
    };

    let _guard = logging::init(&logging::LoggingConfig::from_settings(&settings.logging)?)?;
    ensure_directories()?;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => settings.storage.resolved_data_dir()?,
    };
    let store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open store at {}", data_dir.display()))?;
    let app = commands::App::new(Arc::new(store));

    let output = match cli.command {
        Commands::Forms { action } => app.forms(action)?,
        Commands::Surveys { action } => app.surveys(action)?,
        Commands::Templates => commands::templates(),
        Commands::Stats => app.stats()?,
        Commands::Login { name, email, role } => app.login(name, email, role)?,
        Commands::Logout => app.logout()?,
        Commands::Whoami => app.whoami()?,
    };
    println!("{output}");
    Ok(())
}
