//! crmgen CLI - Code generator for CRM entity metadata
//!
//! Commands:
//! - `crmgen list` - List the entities in a metadata document
//! - `crmgen generate` - Generate the class file and client module
//! - `crmgen check` - Validate a metadata document, configuration and template

use anyhow::Result;
use clap::{Parser, Subcommand};
use crmgen_core::GeneratorConfig;
use std::path::{Path, PathBuf};

mod check;
mod generate;
mod list;
mod logging;

use generate::{Artifact, GenerateArgs};

/// Configuration file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "crmgen.toml";

#[derive(Parser)]
#[command(name = "crmgen")]
#[command(author, version, about = "Code generator for CRM entity metadata", long_about = None)]
struct Cli {
    /// Path to crmgen.toml (default: ./crmgen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entities in a metadata document
    List {
        /// Metadata document (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate the class file and the client module
    Generate {
        /// Metadata document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Entity logical name to generate, in order (default: all entities)
        #[arg(short, long = "entity")]
        entities: Vec<String>,

        /// Output directory for generated files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Namespace for the generated classes
        #[arg(short, long)]
        namespace: Option<String>,

        /// Template for the client module
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Generate only one artifact
        #[arg(long, value_enum)]
        only: Option<Artifact>,
    },

    /// Validate a metadata document, configuration and template
    Check {
        /// Metadata document (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Load the configuration from an explicit path, the working directory, or defaults
fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            GeneratorConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => GeneratorConfig::default(),
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init_logging(cli.verbose, &config.log_level);

    match cli.command {
        Commands::List { input } => {
            list::run(&input)?;
        }
        Commands::Generate {
            input,
            entities,
            output,
            namespace,
            template,
            only,
        } => {
            let args = GenerateArgs {
                input,
                entities,
                output,
                namespace,
                template,
                only,
            };
            generate::run(&args, config)?;
        }
        Commands::Check { input } => {
            check::run(&input, &config)?;
        }
    }

    Ok(())
}
