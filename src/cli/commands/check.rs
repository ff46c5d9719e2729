//! Check command implementation

use crate::cli::config_file::{FramecheckConfig, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{read_input, resolve_format, resolve_selector};
use clap::Args;
use framecheck::{
    html_to_meta_tags, parse_buttons, validate_buttons, Button, ButtonValidationResult,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Validate the buttons declared in a frame HTML document
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// HTML file to check (`-` reads stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Meta property prefix to extract; may be repeated
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

/// JSON report: the parsed buttons next to the validation result
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    buttons: &'a [Button],
    #[serde(flatten)]
    result: &'a ButtonValidationResult,
}

pub fn execute_check(args: CheckArgs, config: &FramecheckConfig) -> CliResult<()> {
    let html = read_input(&args.input)?;
    let selector = resolve_selector(&args.prefixes, config);

    let tags = html_to_meta_tags(&html, &selector);
    let buttons = parse_buttons(&tags);
    let result = validate_buttons(&buttons);
    info!(
        "Checked {}: {} buttons, valid = {}",
        args.input.display(),
        buttons.len(),
        result.is_valid()
    );

    let rendered = match resolve_format(args.format, config) {
        OutputFormat::Text => render_text(&buttons, &result),
        OutputFormat::Json => serde_json::to_string_pretty(&CheckReport {
            buttons: &buttons,
            result: &result,
        })?,
    };
    println!("{}", rendered);

    if result.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(summarize(&result)))
    }
}

/// Human-readable report
pub(crate) fn render_text(buttons: &[Button], result: &ButtonValidationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Buttons: {}", buttons.len());
    for button in buttons {
        let action = button
            .action
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "post".to_string());
        match &button.target {
            Some(target) => {
                let _ = writeln!(
                    out,
                    "  [{}] {} ({} -> {})",
                    button.index, button.label, action, target
                );
            }
            None => {
                let _ = writeln!(out, "  [{}] {} ({})", button.index, button.label, action);
            }
        }
    }

    if result.buttons_are_out_of_order {
        let indices: Vec<String> = buttons.iter().map(|b| b.index.to_string()).collect();
        let _ = writeln!(
            out,
            "[ERROR] Buttons are out of order: found [{}], expected a run starting at 1",
            indices.join(", ")
        );
    }
    for invalid in &result.invalid_buttons {
        let _ = writeln!(out, "[ERROR] Button {}: {}", invalid.index, invalid.reason);
    }
    if result.is_valid() {
        let _ = writeln!(out, "[OK] Frame buttons are valid");
    }

    out.trim_end().to_string()
}

fn summarize(result: &ButtonValidationResult) -> String {
    let mut problems = Vec::new();
    if result.buttons_are_out_of_order {
        problems.push("buttons out of order".to_string());
    }
    if !result.invalid_buttons.is_empty() {
        problems.push(format!("{} invalid button(s)", result.invalid_buttons.len()));
    }
    problems.join(", ")
}
