//! Tags command implementation

use crate::cli::config_file::{FramecheckConfig, OutputFormat};
use crate::cli::error::CliResult;
use crate::cli::utils::{read_input, resolve_format, resolve_selector};
use clap::Args;
use framecheck::html_to_meta_tags;
use std::path::PathBuf;

/// Print the meta tags extracted from a frame HTML document
#[derive(Debug, Args)]
pub struct TagsArgs {
    /// HTML file to read (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Meta property prefix to extract; may be repeated
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

pub fn execute_tags(args: TagsArgs, config: &FramecheckConfig) -> CliResult<()> {
    let html = read_input(&args.input)?;
    let tags = html_to_meta_tags(&html, &resolve_selector(&args.prefixes, config));

    match resolve_format(args.format, config) {
        OutputFormat::Text => {
            for tag in &tags {
                println!("{} = {}", tag.property, tag.content);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tags)?),
    }
    Ok(())
}
