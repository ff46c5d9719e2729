//! Frame button validation

pub mod button_validator;
pub mod result;

#[cfg(test)]
mod button_validator_tests;

// Re-export main types
pub use button_validator::validate_buttons;
pub use result::{ButtonValidationResult, InvalidButton, InvalidButtonReason, TargetShape};
