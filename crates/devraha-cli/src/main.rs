//! Devraha CLI - normalize backend payloads into canonical contract shapes.

use clap::{Args, Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use commands::{cow, cows, error_message, gender, user};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "devraha")]
#[command(about = "Normalize Devraha backend payloads into canonical JSON")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct FormatArgs {
    /// Pretty-print the JSON output
    #[arg(long, conflicts_with = "canonical")]
    pretty: bool,
    /// Emit canonical JSON (sorted keys, no whitespace)
    #[arg(long)]
    canonical: bool,
}

impl FormatArgs {
    fn format(self) -> OutputFormat {
        if self.canonical {
            OutputFormat::Canonical
        } else if self.pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Compact
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single cow record
    Cow {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Include the normalization report alongside the cow
        #[arg(long)]
        report: bool,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Normalize a cow list (array or {data, meta} envelope)
    Cows {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Emit the list envelope with pagination metadata
        #[arg(long)]
        meta: bool,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the canonical gender for a raw value
    Gender {
        /// Raw gender value
        value: String,
        /// Treat VALUE as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Normalize a user payload
    User {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Classify the payload as a login response
        #[arg(long)]
        login: bool,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Extract a human-readable message from an error payload
    ErrorMessage {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Read the payload as an HTTP-client error
        #[arg(long)]
        axios: bool,
        /// Message used when the payload carries none
        #[arg(long)]
        fallback: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Cow {
            input,
            report,
            format,
        } => cow::run(input, report, format.format()),
        Commands::Cows {
            input,
            meta,
            format,
        } => cows::run(input, meta, format.format()),
        Commands::Gender { value, json } => gender::run(value, json),
        Commands::User {
            input,
            login,
            format,
        } => user::run(input, login, format.format()),
        Commands::ErrorMessage {
            input,
            axios,
            fallback,
        } => error_message::run(input, axios, fallback),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
