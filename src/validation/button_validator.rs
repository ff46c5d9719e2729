//! Frame button validation
//!
//! Two independent checks run over the button list: contiguity of the
//! indices and the per-button action/target rule. Problems are reported as
//! data in [`ButtonValidationResult`]; validation itself cannot fail.
//!
//! Input is expected to be what [`parse_buttons`](crate::core::parse_buttons)
//! produces: at most four buttons, indices unique, ascending, within 1..=4.
//! Nothing here re-sorts, deduplicates or range-checks. Input breaking that
//! contract is still accepted and never panics; each index is compared with
//! its position as given, so duplicates, descending runs and stray indices
//! surface as `buttons_are_out_of_order`. Enforcing the four-button limit is
//! left to the parser.

use crate::core::button::{Button, ButtonAction};
use crate::validation::result::{
    ButtonValidationResult, InvalidButton, InvalidButtonReason, TargetShape,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// CAIP-10 account id with an optional token id suffix
static CHAIN_ASSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[-a-z0-9]{3,8}:[-_a-zA-Z0-9]{1,32}:[-.%a-zA-Z0-9]{1,128}(?::[-.%a-zA-Z0-9]{1,78})?$")
        .expect("Invalid chain asset regex")
});

/// Validate contiguity and per-button shape of `buttons`
pub fn validate_buttons(buttons: &[Button]) -> ButtonValidationResult {
    let buttons_are_out_of_order = buttons
        .iter()
        .enumerate()
        .any(|(position, button)| usize::from(button.index) != position + 1);

    let invalid_buttons: Vec<InvalidButton> = buttons
        .iter()
        .filter_map(|button| {
            check_target(button).map(|reason| InvalidButton {
                index: button.index,
                reason,
            })
        })
        .collect();

    debug!(
        buttons = buttons.len(),
        out_of_order = buttons_are_out_of_order,
        invalid = invalid_buttons.len(),
        "Validated frame buttons"
    );

    ButtonValidationResult {
        buttons_are_out_of_order,
        invalid_buttons,
    }
}

/// Apply the action's target rule to a single button
fn check_target(button: &Button) -> Option<InvalidButtonReason> {
    let target = button.target.as_deref();

    match (&button.action, target) {
        (None, None) => None,
        (None, Some(_)) => Some(InvalidButtonReason::TargetForbidden { action: None }),
        (Some(ButtonAction::Post), _) => None,
        (Some(action @ (ButtonAction::Link | ButtonAction::PostRedirect)), target) => {
            require_target(action, target, TargetShape::Url)
        }
        (Some(action @ ButtonAction::Mint), target) => {
            require_target(action, target, TargetShape::ChainAsset)
        }
        (Some(ButtonAction::Unknown(raw)), _) => Some(InvalidButtonReason::UnknownAction {
            action: raw.clone(),
        }),
    }
}

fn require_target(
    action: &ButtonAction,
    target: Option<&str>,
    expected: TargetShape,
) -> Option<InvalidButtonReason> {
    let Some(target) = target else {
        return Some(InvalidButtonReason::TargetRequired {
            action: action.clone(),
        });
    };

    let well_formed = match expected {
        TargetShape::Url => is_absolute_http_url(target),
        TargetShape::ChainAsset => CHAIN_ASSET_REGEX.is_match(target),
    };
    if well_formed {
        None
    } else {
        Some(InvalidButtonReason::InvalidTarget {
            action: action.clone(),
            target: target.to_string(),
            expected,
        })
    }
}

fn is_absolute_http_url(target: &str) -> bool {
    match url::Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
