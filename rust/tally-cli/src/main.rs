//! Tally CLI — sort values and count occurrences from the command line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_cli::colors::Palette;
use tally_cli::commands::{self, Render};
use tally_cli::config::TallyConfig;
use tally_cli::input::{gather_tokens, parse_values};
use tally_cli::CliError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tally", version, about = "Selection sort and frequency counting")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Read configuration from this file instead of searching for tally.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort values ascending with selection sort
    Sort {
        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Parse values as floating point (NaN sorts last)
        #[arg(long)]
        float: bool,

        /// Print pass, comparison and swap counts
        #[arg(long)]
        stats: bool,

        /// Read additional whitespace-separated values from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Count occurrences of each integer value
    Count {
        /// Values to count
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Value to look up (repeatable)
        #[arg(short, long = "query", allow_negative_numbers = true)]
        queries: Vec<String>,

        /// Read additional whitespace-separated values from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Count the characters of a piece of ASCII text
    Chars {
        /// Text to count
        text: String,

        /// Character to look up (repeatable)
        #[arg(short, long = "query")]
        queries: Vec<String>,
    },
    /// Create a tally.toml config file in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let early = Palette::new(!cli.no_color);
    let config = match TallyConfig::resolve(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => fail(early, &e),
    };
    if let Err(e) = init_tracing(&config) {
        fail(early, &e);
    }

    let render = Render::resolve(&config, cli.json, cli.no_color);
    let errors = Palette::new(config.output.color && !cli.no_color);

    match run(cli.command, &render) {
        Ok(out) => println!("{}", out),
        Err(e) => fail(errors, &e),
    }
}

fn run(command: Commands, render: &Render) -> Result<String, CliError> {
    match command {
        Commands::Sort {
            values,
            float,
            stats,
            file,
        } => {
            let tokens = gather_tokens(&values, file.as_deref())?;
            if float {
                commands::sort_floats(parse_values(&tokens)?, stats, render)
            } else {
                commands::sort_integers(parse_values(&tokens)?, stats, render)
            }
        }
        Commands::Count {
            values,
            queries,
            file,
        } => {
            let tokens = gather_tokens(&values, file.as_deref())?;
            commands::count_values(parse_values(&tokens)?, parse_values(&queries)?, render)
        }
        Commands::Chars { text, queries } => commands::count_chars(&text, &queries, render),
        Commands::Init => {
            let cwd = std::env::current_dir().map_err(|source| CliError::Io {
                path: PathBuf::from("."),
                source,
            })?;
            commands::init(&cwd, render)
        }
    }
}

fn init_tracing(config: &TallyConfig) -> Result<(), CliError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = config.log_filter(env.as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn fail(palette: Palette, e: &CliError) -> ! {
    eprintln!("{} {}", palette.red("error:"), e);
    std::process::exit(1);
}
