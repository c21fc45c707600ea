use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, error};
use std::process;

use storefront_validation::config::{self, OutputFormat};
use storefront_validation::validation::SystemClock;

mod cli;

use cli::{check, DateDirection, Outcome};

/// Exit status when the input is rejected
const EXIT_REJECTED: i32 = 1;

/// Exit status for usage or configuration errors
const EXIT_ERROR: i32 = 2;

/// Storefront Validate - run the storefront form validators from the shell
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "storefront-validate.toml")]
    config: String,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Print the result as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an email address
    Email {
        value: String,
    },

    /// Check password strength and list unmet rules
    Password {
        value: String,
    },

    /// Check a US phone number
    Phone {
        value: String,
    },

    /// Check a payment card number (length and Luhn checksum)
    Card {
        value: String,
    },

    /// Check a 5-digit or ZIP+4 code
    Zip {
        value: String,
    },

    /// Check an absolute URL
    Url {
        value: String,
    },

    /// Check that a value is present and not blank
    Present {
        value: Option<String>,
    },

    /// Check that a number lies within inclusive bounds
    Range {
        #[clap(allow_hyphen_values = true)]
        value: f64,
        #[clap(allow_hyphen_values = true)]
        min: f64,
        #[clap(allow_hyphen_values = true)]
        max: f64,
    },

    /// Check a date (RFC 3339 or YYYY-MM-DD) against the current time
    Date {
        value: String,

        /// Require the date to be in the future
        #[clap(long, conflicts_with = "past", required_unless_present = "past")]
        future: bool,

        /// Require the date to be in the past
        #[clap(long)]
        past: bool,
    },

    /// Check a value by field kind (email, password, phone, card, zip, url)
    Field {
        kind: String,
        value: String,
    },
}

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides the verbosity flags
    let default_filter = match cli.debug {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(err) = config::load_config(&cli.config) {
        error!("Failed to load configuration: {:#}", err);
        process::exit(EXIT_ERROR);
    }
    let settings = config::get_config();
    info!("{} {} ready", settings.app_name, settings.version);

    let format = if cli.json { OutputFormat::Json } else { settings.output.format };

    let result: anyhow::Result<Outcome> = match &cli.command {
        Commands::Email { value } => Ok(check::check_email(value)),
        Commands::Password { value } => Ok(check::check_password(
            value,
            &settings.password,
            settings.output.show_password_feedback,
        )),
        Commands::Phone { value } => Ok(check::check_phone(value)),
        Commands::Card { value } => Ok(check::check_card(value)),
        Commands::Zip { value } => Ok(check::check_zip(value)),
        Commands::Url { value } => Ok(check::check_url(value)),
        Commands::Present { value } => Ok(check::check_present(value.as_deref())),
        Commands::Range { value, min, max } => check::check_range(*value, *min, *max),
        Commands::Date { value, future, .. } => {
            let direction = if *future { DateDirection::Future } else { DateDirection::Past };
            check::check_date(value, direction, &SystemClock)
        }
        Commands::Field { kind, value } => check::check_kind(kind, value, &settings.password),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            process::exit(EXIT_ERROR);
        }
    };

    match cli::render(&outcome, format) {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => {
            error!("Failed to render result: {:#}", err);
            process::exit(EXIT_ERROR);
        }
    }

    if !outcome.valid {
        process::exit(EXIT_REJECTED);
    }
}
