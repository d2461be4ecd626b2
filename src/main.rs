use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tempora::commands;
use tempora::config::Settings;
use tempora::export::{ExportFormat, Prefix, DEFAULT_PREFIX};

const LONG_ABOUT: &str = "\
Tempora gives AI coding agents an accurate sense of the current date and time.

It derives a consistent set of calendar fields from a single clock reading: local
date and time, ISO-8601 week, quarter, day of week, plus coarse period flags for
business hours, weekends and the US equity market session.

The results can be printed, exported as environment variables for a shell session,
or described in an agent instruction file so the agent knows they exist.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Show the current context:
        $ tempora now

    Show it for another zone at a fixed instant:
        $ tempora --tz US/Eastern --at 2025-06-16T10:15:00-04:00 now

    Export variables into the current shell:
        $ eval \"$(tempora env)\"

    Document the variables in CLAUDE.md:
        $ tempora directive

TIMEZONE:
    Resolved from --tz / TEMPORA_TZ, then TZ, then the host configuration.
    Unknown or missing zones fall back to UTC with a warning.";

#[derive(Parser)]
#[command(name = "tempora")]
#[command(version)]
#[command(about = "Current date and time context for AI coding agents")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// IANA timezone (e.g. Australia/Sydney)
    #[arg(long, global = true, env = "TEMPORA_TZ")]
    tz: Option<String>,

    /// Use this instant instead of the clock (RFC 3339 or epoch seconds)
    #[arg(long, global = true, env = "TEMPORA_AT")]
    at: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the temporal context
    #[command(after_help = "\
EXAMPLES:
    $ tempora now
    $ tempora now --json

OUTPUT:
    Temporal Context
    ────────────────
    Now:     Thursday, November 20, 2025 at 04:06:25 AEDT
    Zone:    Australia/Sydney (UTC+11:00)
    Week:    47 of 2025 (Q4)
    Day:     4 of 7, day 324 of the year

    Business hours: no
    Weekend:        no
    Market hours:   no")]
    Now {
        /// Output the full record as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Print the context as PREFIX_<FIELD> variables
    #[command(after_help = "\
EXAMPLES:
    $ eval \"$(tempora env)\"
    $ tempora env --prefix CLAUDE --format powershell | Invoke-Expression
    $ tempora env --format dotenv > .env.time")]
    Env {
        /// Variable name prefix
        #[arg(long, env = "TEMPORA_PREFIX", default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Output syntax
        #[arg(long, value_enum, default_value_t = ExportFormat::Shell)]
        format: ExportFormat,
    },

    /// Add or refresh the variable documentation block in an instruction file
    #[command(
        long_about = "\
Add or refresh the variable documentation block in an instruction file.

The block is wrapped in <!-- tempora:begin --> / <!-- tempora:end --> markers.
Running the command again leaves an identical block untouched and replaces an
outdated one in place; the rest of the file is never modified.",
        after_help = "\
EXAMPLES:
    $ tempora directive
    $ tempora directive --file ~/.claude/CLAUDE.md --prefix CLAUDE
    $ tempora directive --dry-run"
    )]
    Directive {
        /// File to update
        #[arg(long, default_value = "CLAUDE.md")]
        file: PathBuf,

        /// Variable name prefix used in the documentation
        #[arg(long, env = "TEMPORA_PREFIX", default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Print the block instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

fn run(cli: Cli) -> tempora::Result<()> {
    match cli.command {
        Commands::Now { json } => {
            let settings = Settings::load(cli.tz.as_deref(), cli.at.as_deref())?;
            commands::now::run(&settings, json)
        }
        Commands::Env { prefix, format } => {
            let prefix = Prefix::parse(&prefix)?;
            let settings = Settings::load(cli.tz.as_deref(), cli.at.as_deref())?;
            commands::env::run(&settings, &prefix, format)
        }
        Commands::Directive {
            file,
            prefix,
            dry_run,
        } => {
            let options = commands::directive::DirectiveOptions {
                file,
                prefix: Prefix::parse(&prefix)?,
                dry_run,
            };
            commands::directive::run(&options)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
