mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use calgrid_core::config::OutputFormat;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::Overrides;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Render dated events as month-by-month calendar grids")]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// Locale for month and weekday names (e.g. "en-US", "fr_FR")
    #[arg(short, long)]
    locale: Option<String>,

    /// Start weeks on Monday
    #[arg(long, conflicts_with = "sunday")]
    monday: bool,

    /// Start weeks on Sunday
    #[arg(long)]
    sunday: bool,

    /// Output format: text, html or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Disable colors in text output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every month spanned by the events in a .json, .toml or .ics file
    Show {
        file: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Render a single month without events
    Month {
        /// Month to render (YYYY-MM); defaults to the current month
        month: Option<String>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

impl LayoutArgs {
    fn into_overrides(self) -> Overrides {
        let start_on_monday = match (self.monday, self.sunday) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Overrides {
            locale: self.locale,
            start_on_monday,
            format: self.format,
            color: !self.no_color && std::io::stdout().is_terminal(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Show { file, layout } => commands::show::run(&file, layout.into_overrides()).await,
        Commands::Month { month, layout } => {
            commands::month::run(month.as_deref(), layout.into_overrides())
        }
    }
}

/// Log to stderr. `CALGRID_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_env("CALGRID_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
}
