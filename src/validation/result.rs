//! Validation report types for frame buttons.

use crate::core::button::ButtonAction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of validating a frame's button list
///
/// Serialized with camelCase keys so reports match what frame tooling
/// already consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonValidationResult {
    /// Whether present indices differ from the contiguous run `1..=N`
    pub buttons_are_out_of_order: bool,

    /// Per-button shape violations, in input order
    pub invalid_buttons: Vec<InvalidButton>,
}

impl ButtonValidationResult {
    /// True when the list is contiguous and every button is well formed
    pub fn is_valid(&self) -> bool {
        !self.buttons_are_out_of_order && self.invalid_buttons.is_empty()
    }
}

/// A button that failed its action's target rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidButton {
    pub index: u8,
    pub reason: InvalidButtonReason,
}

/// Why a button was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum InvalidButtonReason {
    #[error("target required for action '{action}' but missing")]
    TargetRequired { action: ButtonAction },

    #[error("target not allowed for {} but present", display_action(.action))]
    TargetForbidden { action: Option<ButtonAction> },

    #[error("target '{target}' is not a valid {expected} for action '{action}'")]
    InvalidTarget {
        action: ButtonAction,
        target: String,
        expected: TargetShape,
    },

    #[error("unknown action type '{action}'")]
    UnknownAction { action: String },
}

fn display_action(action: &Option<ButtonAction>) -> String {
    match action {
        Some(action) => format!("action '{}'", action),
        None => "plain post-back button".to_string(),
    }
}

/// Target format an action expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    /// Absolute `http` or `https` URL
    Url,
    /// `namespace:chainId:address[:tokenId]`
    ChainAsset,
}

impl std::fmt::Display for TargetShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetShape::Url => f.write_str("absolute http(s) URL"),
            TargetShape::ChainAsset => f.write_str("chain-scoped asset identifier"),
        }
    }
}
