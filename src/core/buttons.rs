//! Assemble frame buttons from extracted meta tags
//!
//! A button exists when its base tag `fc:frame:button:N` is present. The
//! optional `:action` and `:target` tags attach to it by index. The output of
//! [`parse_buttons`] is what the validator expects: indices in
//! `1..=MAX_BUTTONS`, unique, ascending.

use crate::core::button::{Button, ButtonAction, MAX_BUTTONS};
use crate::core::meta_tags::MetaTag;
use regex::Regex;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BUTTON_PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^fc:frame:button:(\d+)(?::(action|target))?$")
        .expect("Invalid button property regex")
});

enum ButtonField {
    Label,
    Action,
    Target,
}

/// Build the button list from `tags`, sorted by index
pub fn parse_buttons(tags: &[MetaTag]) -> Vec<Button> {
    let mut labels: BTreeMap<u8, &str> = BTreeMap::new();
    let mut actions: BTreeMap<u8, &str> = BTreeMap::new();
    let mut targets: BTreeMap<u8, &str> = BTreeMap::new();

    for tag in tags {
        let Some((index, field)) = classify(&tag.property) else {
            continue;
        };

        let slot = match field {
            ButtonField::Label => &mut labels,
            ButtonField::Action => &mut actions,
            ButtonField::Target => &mut targets,
        };
        match slot.entry(index) {
            Entry::Vacant(entry) => {
                entry.insert(tag.content.as_str());
            }
            Entry::Occupied(_) => {
                warn!("Ignoring duplicate meta tag '{}'", tag.property);
            }
        }
    }

    for index in actions.keys().chain(targets.keys()) {
        if !labels.contains_key(index) {
            debug!("Button {} has attributes but no base tag", index);
        }
    }

    labels
        .into_iter()
        .map(|(index, label)| Button {
            index,
            label: label.to_string(),
            action: actions.get(&index).map(|a| ButtonAction::from(a.to_string())),
            target: targets.get(&index).map(|t| t.to_string()),
        })
        .collect()
}

/// Split a button property into its index and field, dropping out-of-range indices
fn classify(property: &str) -> Option<(u8, ButtonField)> {
    let captures = BUTTON_PROPERTY_REGEX.captures(property)?;

    let index = match captures[1].parse::<u8>() {
        Ok(index) if (1..=MAX_BUTTONS).contains(&index) => index,
        _ => {
            warn!(
                "Ignoring '{}': button index must be between 1 and {}",
                property, MAX_BUTTONS
            );
            return None;
        }
    };

    let field = match captures.get(2).map(|m| m.as_str()) {
        Some("action") => ButtonField::Action,
        Some("target") => ButtonField::Target,
        _ => ButtonField::Label,
    };
    Some((index, field))
}
