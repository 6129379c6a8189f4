//! Namaskar command-line front-end
//!
//! Subcommands mirror the account and reading flows: register, login,
//! logout, whoami, profile show/set, report, config.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use namaskar::auth::{self, IdentityProvider};
use namaskar::config::AppConfig;
use namaskar::error::{NamaskarError, NamaskarResult};
use namaskar::insight;
use namaskar::observability::{init_default_logging, init_logging, LogFormat};
use namaskar::profile::UserProfile;
use namaskar::reading::Reading;
use namaskar::store::{DataPaths, ProfileStore, SessionStore};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

/// Numerology readings with pluggable identity and insight backends
#[derive(Parser)]
#[command(name = "namaskar")]
#[command(about = "Numerology readings with pluggable identity and insight backends")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in and stay signed in between invocations
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Show or update the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Print the full numerology reading
    Report {
        /// Fetch a personalized Life Path annotation
        #[arg(long)]
        annotate: bool,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the stored profile
    Show,
    /// Set the full name and date of birth
    Set {
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        dob: NaiveDate,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // -v bumps the level past whatever the environment says
    match cli.verbose {
        0 => init_default_logging(),
        1 => init_logging(Level::DEBUG, LogFormat::Compact, false),
        _ => init_logging(Level::TRACE, LogFormat::Compact, true),
    }

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e.display_message());
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        eprintln!("{}", e.display_message());
        process::exit(1);
    }
}

fn load_configuration(config_path: &Option<PathBuf>) -> NamaskarResult<AppConfig> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(AppConfig::load_from_file(path)?)
        }
        None => {
            let default_paths = ["namaskar.toml", "config/namaskar.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(AppConfig::load_from_file(&path)?);
                }
            }

            // No file means the built-in defaults: local auth, no insight
            info!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

async fn run_command(command: Commands, config: AppConfig) -> NamaskarResult<()> {
    let paths = DataPaths::resolve(&config)?;
    paths.ensure_dirs()?;
    let sessions = SessionStore::new(&paths);

    match command {
        Commands::Register { email, password } => {
            let provider = auth::provider_from_config(&config, &paths)?;
            let session = provider.sign_up(&email, &password).await?;
            info!(provider = provider.name(), uid = %session.uid, "account created");
            println!("Account created for {}. Please log in.", session.email);
        }
        Commands::Login { email, password } => {
            let provider = auth::provider_from_config(&config, &paths)?;
            let session = provider.sign_in(&email, &password).await?;
            info!(provider = provider.name(), uid = %session.uid, "signed in");
            sessions.save(&session)?;
            println!("Logged in as {}.", session.email);
        }
        Commands::Logout => {
            sessions.clear()?;
            println!("Logged out.");
        }
        Commands::Whoami => {
            let session = auth::require_session(&sessions)?;
            println!("{} (uid {})", session.email, session.uid);
            println!("Session expires at {}.", session.expires_at);
        }
        Commands::Profile { command } => {
            let session = auth::require_session(&sessions)?;
            let profiles = ProfileStore::new(&paths);
            match command {
                ProfileCommands::Show => match profiles.load(&session.uid)? {
                    Some(profile) => {
                        println!("Full name:     {}", profile.full_name);
                        println!("Date of birth: {}", profile.date_of_birth);
                    }
                    None => {
                        println!("No profile saved yet. Run `namaskar profile set`.");
                    }
                },
                ProfileCommands::Set { name, dob } => {
                    let profile = UserProfile::new(&name, dob)?;
                    profiles.save(&session.uid, &profile)?;
                    info!(uid = %session.uid, "profile updated");
                    println!("Profile saved.");
                }
            }
        }
        Commands::Report { annotate } => {
            let session = auth::require_session(&sessions)?;
            let profiles = ProfileStore::new(&paths);
            let profile = profiles.load(&session.uid)?.ok_or_else(|| {
                NamaskarError::invalid_input(
                    "Please update your full name and date of birth first.",
                )
            })?;

            let mut reading = Reading::from_profile(&profile)?;
            if annotate {
                let provider = insight::provider_from_config(&config)?;
                reading.annotate(provider.as_ref()).await;
            }
            print!("{}", reading.render());
        }
        Commands::Config { show } => {
            if show {
                println!("Current configuration:");
                println!(
                    "{}",
                    toml::to_string_pretty(&config)
                        .map_err(|e| NamaskarError::internal_error(e.to_string()))?
                );
            }
            info!("Configuration validation complete");
        }
    }

    Ok(())
}
