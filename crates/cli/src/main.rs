//! Realty CLI - Listing database inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Count listings and dump them with their agents
//! realty inspect
//!
//! # Same, but with each listing's images
//! realty inspect --include images
//!
//! # Print the title/agentId and id/name/email projections side by side
//! realty mappings
//!
//! # Make a user an administrator
//! realty promote -e owner@realty.test
//!
//! # Row totals, and schema migrations
//! realty counts
//! realty migrate
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr. Set
//! `REALTY_LOG_FORMAT=json` for structured logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use realty_core::{Email, UserRole};
use realty_db::services::Include;

mod commands;
mod error;
mod output;

use error::CommandError;

#[derive(Parser, Debug)]
#[command(name = "realty")]
#[command(author, version, about = "Realty listing database tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count listings and print them with a joined relation
    Inspect {
        /// Relation to include with each listing
        #[arg(short, long, value_enum, default_value_t = IncludeArg::Agent)]
        include: IncludeArg,
    },
    /// Print listing and user projections for ownership checks
    Mappings,
    /// Change a user's role, looked up by email
    Promote {
        /// Email of the user to change
        #[arg(short, long)]
        email: Email,

        /// Role to assign (ADMIN, AGENT, USER)
        #[arg(short, long, default_value = "ADMIN")]
        role: UserRole,
    },
    /// Print row totals for listings, users and inquiries
    Counts,
    /// Run database migrations
    Migrate,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum IncludeArg {
    Agent,
    Images,
}

impl From<IncludeArg> for Include {
    fn from(arg: IncludeArg) -> Self {
        match arg {
            IncludeArg::Agent => Self::Agent,
            IncludeArg::Images => Self::Images,
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` sets the filter (default `info`); `REALTY_LOG_FORMAT=json`
/// switches to one JSON object per event.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("REALTY_LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let store = commands::connect().await?;

    let result = match cli.command {
        Commands::Inspect { include } => commands::inspect::run(&store, include.into()).await,
        Commands::Mappings => commands::mappings::run(&store).await,
        Commands::Promote { email, role } => commands::promote::run(&store, &email, role).await,
        Commands::Counts => commands::counts::run(&store).await,
        Commands::Migrate => commands::migrate::run(&store).await,
    };

    // Release the pool whether or not the command succeeded
    store.close().await;
    tracing::debug!("Database connection closed");

    result
}
