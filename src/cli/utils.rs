//! Utility functions for CLI operations

use crate::cli::config_file::{FramecheckConfig, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use framecheck::MetaSelector;
use std::io::Read;
use std::path::Path;

/// Read frame HTML from a file, or from stdin when `input` is `-`
pub fn read_input(input: &Path) -> CliResult<String> {
    if input == Path::new("-") {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        return Ok(html);
    }

    std::fs::read_to_string(input).map_err(|source| CliError::Input {
        path: input.display().to_string(),
        source,
    })
}

/// Build the meta selector: command-line prefixes win over config prefixes
pub fn resolve_selector(cli_prefixes: &[String], config: &FramecheckConfig) -> MetaSelector {
    if !cli_prefixes.is_empty() {
        return MetaSelector::with_prefixes(cli_prefixes.iter().cloned());
    }
    match &config.prefixes {
        Some(prefixes) => MetaSelector::with_prefixes(prefixes.iter().cloned()),
        None => MetaSelector::default(),
    }
}

/// Pick the output format: command line, then config, then text
pub fn resolve_format(cli_format: Option<OutputFormat>, config: &FramecheckConfig) -> OutputFormat {
    cli_format.or(config.format).unwrap_or_default()
}
