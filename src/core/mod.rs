//! Frame meta tag extraction and button model

pub mod button;
pub mod buttons;
pub mod meta_tags;

pub use button::{Button, ButtonAction, MAX_BUTTONS};
pub use buttons::parse_buttons;
pub use meta_tags::{html_to_meta_tags, MetaSelector, MetaTag, DEFAULT_PREFIXES};
