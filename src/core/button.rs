//! Frame button model shared by the parser and the validator

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Highest button index a frame may declare
pub const MAX_BUTTONS: u8 = 4;

/// Behavior tag attached to a button via `fc:frame:button:N:action`
///
/// A button without an action tag is a plain post-back and is modelled as
/// `Option::<ButtonAction>::None` on [`Button`], not as a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonAction {
    /// Opens `target` in the client
    Link,
    /// Posts back to the frame server; `target` optionally overrides the post URL
    Post,
    /// Posts back, then redirects to `target`
    PostRedirect,
    /// Mints the on-chain asset named by `target`
    Mint,
    /// Any tag outside the known set, kept verbatim
    Unknown(String),
}

impl ButtonAction {
    /// Canonical meta-tag value for this action
    pub fn as_str(&self) -> &str {
        match self {
            ButtonAction::Link => "link",
            ButtonAction::Post => "post",
            ButtonAction::PostRedirect => "post_redirect",
            ButtonAction::Mint => "mint",
            ButtonAction::Unknown(raw) => raw,
        }
    }
}

impl FromStr for ButtonAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "link" => ButtonAction::Link,
            "post" => ButtonAction::Post,
            "post_redirect" => ButtonAction::PostRedirect,
            "mint" => ButtonAction::Mint,
            other => ButtonAction::Unknown(other.to_string()),
        })
    }
}

impl From<String> for ButtonAction {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

impl From<ButtonAction> for String {
    fn from(value: ButtonAction) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared frame button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// 1-based position taken from the `button:N` property suffix
    pub index: u8,

    /// Content of the base `fc:frame:button:N` tag
    pub label: String,

    /// Declared action, `None` for a plain post-back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ButtonAction>,

    /// URL or chain-scoped identifier the action operates on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Button {
    /// Create a plain post-back button
    pub fn new(index: u8, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            action: None,
            target: None,
        }
    }

    /// Set the action
    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str_known() {
        assert_eq!("link".parse::<ButtonAction>().unwrap(), ButtonAction::Link);
        assert_eq!("post".parse::<ButtonAction>().unwrap(), ButtonAction::Post);
        assert_eq!(
            "post_redirect".parse::<ButtonAction>().unwrap(),
            ButtonAction::PostRedirect
        );
        assert_eq!("mint".parse::<ButtonAction>().unwrap(), ButtonAction::Mint);
    }

    #[test]
    fn test_action_from_str_unknown_keeps_text() {
        let action: ButtonAction = "tx".parse().unwrap();
        assert_eq!(action, ButtonAction::Unknown("tx".to_string()));
        assert_eq!(action.to_string(), "tx");
    }

    #[test]
    fn test_action_is_case_sensitive() {
        let action: ButtonAction = "LINK".parse().unwrap();
        assert!(matches!(action, ButtonAction::Unknown(_)));
    }

    #[test]
    fn test_button_serializes_action_as_tag() {
        let button = Button::new(2, "bar")
            .with_action(ButtonAction::PostRedirect)
            .with_target("https://example.com");
        let json = serde_json::to_value(&button).unwrap();
        assert_eq!(json["action"], "post_redirect");
        assert_eq!(json["target"], "https://example.com");

        let plain = serde_json::to_value(Button::new(1, "foo")).unwrap();
        assert!(plain.get("action").is_none());
        assert!(plain.get("target").is_none());
    }
}
