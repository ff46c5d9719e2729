//! Main CLI application structure

use clap::Parser;
use std::path::PathBuf;

use crate::cli::commands::{check, tags, version, Commands};
use crate::cli::config_file::load_config;
use crate::cli::error::CliResult;

/// framecheck - Validate frame button meta tags
#[derive(Debug, Parser)]
#[command(name = "framecheck")]
#[command(version = framecheck::VERSION)]
#[command(about = "framecheck - Validate frame button meta tags")]
#[command(long_about = "framecheck extracts fc:frame meta tags from HTML and checks the declared buttons.\n\n\
                         Settings are read from .framecheck.toml in the current directory\n\
                         (or --config), and command-line flags override them.\n\n\
                         Examples:\n\
                           framecheck check index.html                 # Validate buttons\n\
                           framecheck check --format json index.html   # JSON report\n\
                           curl -s https://example.com | framecheck check -\n\
                           framecheck tags --prefix fc: index.html     # List frame tags")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (defaults to ./.framecheck.toml)
    #[arg(long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> CliResult<()> {
        framecheck::init_logging(self.verbose);

        // Handle version command early (no config needed)
        if let Commands::Version(args) = self.command {
            return version::execute_version(args);
        }

        let config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::Check(args) => check::execute_check(args, &config),
            Commands::Tags(args) => tags::execute_tags(args, &config),
            Commands::Version(args) => version::execute_version(args),
        }
    }
}
