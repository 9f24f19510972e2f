use clap::{Parser, Subcommand};
use eyre::Result;
use gremlin_cli::{
    commands,
    config::{self, ConfigOverrides},
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gremlin-translate")]
#[command(version)]
struct Cli {
    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate bytecode JSON into Gremlin query text
    Translate {
        /// Bytecode JSON file (defaults to stdin)
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// TOML config file
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Traversal source variable (defaults to `g`)
        #[clap(short, long)]
        source: Option<String>,

        /// Emit source instructions such as withSack() before the steps
        #[clap(long)]
        include_sources: bool,

        /// Backslash-escape quotes inside string literals
        #[clap(long)]
        escape_strings: bool,

        /// Maximum nesting depth
        #[clap(long)]
        max_depth: Option<usize>,

        /// Do not bound nesting depth
        #[clap(long)]
        unbounded: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// TOML config file
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Translate {
            input,
            config: config_path,
            source,
            include_sources,
            escape_strings,
            max_depth,
            unbounded,
        } => {
            let overrides = ConfigOverrides {
                source_name: source,
                include_source_instructions: include_sources,
                escape_strings,
                max_depth,
                unbounded,
            };
            let config =
                config::apply_overrides(config::load_config(config_path.as_deref())?, &overrides)?;
            let bytecode = commands::read_bytecode(input.as_deref())?;
            println!("{}", commands::translate(&bytecode, config)?);
        }
        Commands::Config {
            config: config_path,
        } => {
            let config = config::load_config(config_path.as_deref())?;
            print!("{}", config::to_toml(&config)?);
        }
    }

    Ok(())
}
