//! Version command implementation

use crate::cli::error::CliResult;
use clap::Args;

/// Display framecheck version
#[derive(Debug, Args)]
pub struct VersionArgs {}

pub fn execute_version(_args: VersionArgs) -> CliResult<()> {
    println!("framecheck {}", framecheck::VERSION);
    Ok(())
}
