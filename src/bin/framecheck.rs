//! framecheck CLI binary entry point

#[path = "../cli/mod.rs"]
mod cli;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::error::CliError;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    std::process::exit(0);
                }
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    let _ = Cli::command().print_help();
                    std::process::exit(0);
                }
                _ => {
                    let _ = e.print();
                    std::process::exit(1);
                }
            }
        }
    };

    // Execute the CLI command
    match cli.execute() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            match &e {
                // The report is already on stdout
                CliError::ValidationFailed(_) => eprintln!("{}", e),
                _ => eprintln!("Error: {}", e),
            }
            std::process::exit(e.exit_code());
        }
    }
}
