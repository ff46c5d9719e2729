//! Command modules for CLI

pub mod check;
pub mod tags;
pub mod version;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
#[command(about = "framecheck commands")]
pub enum Commands {
    /// Validate frame buttons in an HTML document
    #[command(about = "Validate the frame buttons declared in an HTML document")]
    Check(check::CheckArgs),

    /// Print extracted meta tags
    #[command(about = "Print the meta tags extracted from an HTML document")]
    Tags(tags::TagsArgs),

    /// Show version information
    #[command(about = "Show version information")]
    Version(version::VersionArgs),
}
