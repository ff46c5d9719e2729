//! # framecheck
//!
//! Validation for frame button declarations. A frame declares up to four
//! buttons through indexed meta tags (`fc:frame:button:1` .. `:4`, each with
//! optional `:action` and `:target`). This crate extracts those tags from HTML,
//! assembles the buttons and reports:
//!
//! - whether the declared indices form a gap-free run starting at 1
//! - which buttons pair their action with a missing, forbidden or malformed target
//!
//! ## Example Usage
//!
//! ```rust
//! use framecheck::{html_to_meta_tags, parse_buttons, validate_buttons, MetaSelector};
//!
//! let html = r#"
//!     <meta property="fc:frame:button:1" content="Docs">
//!     <meta property="fc:frame:button:1:action" content="link">
//!     <meta property="fc:frame:button:1:target" content="https://example.com">
//! "#;
//!
//! let tags = html_to_meta_tags(html, &MetaSelector::default());
//! let buttons = parse_buttons(&tags);
//! let result = validate_buttons(&buttons);
//!
//! assert!(!result.buttons_are_out_of_order);
//! assert!(result.invalid_buttons.is_empty());
//! ```

pub mod core;
pub mod validation;

pub use crate::core::{
    html_to_meta_tags, parse_buttons, Button, ButtonAction, MetaSelector, MetaTag, MAX_BUTTONS,
};
pub use crate::validation::{
    validate_buttons, ButtonValidationResult, InvalidButton, InvalidButtonReason, TargetShape,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging (safe for testing)
pub fn init_logging(verbose: bool) {
    // Only initialize logging once
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let default_filter = if verbose {
            "framecheck=debug"
        } else {
            "framecheck=warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // This will fail silently if already initialized
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
