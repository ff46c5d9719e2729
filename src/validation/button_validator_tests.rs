//! Tests for button validation over HTML fixtures.

#![allow(clippy::unwrap_used)]

use crate::core::{html_to_meta_tags, parse_buttons, MetaSelector};
use crate::validation::{validate_buttons, ButtonValidationResult};

const DEFAULT_FRAME: &str = r#"
  <meta property="fc:frame" content="vNext">

  <meta property="fc:frame:button:1" content="foo">

  <meta property="fc:frame:button:2" content="bar">
  <meta property="fc:frame:button:2:action" content="link">
  <meta property="fc:frame:button:2:target" content="https://example.com">

  <meta property="fc:frame:button:3" content="baz">
  <meta property="fc:frame:button:3:action" content="post_redirect">
  <meta property="fc:frame:button:3:target" content="https://example.com/redirect">

  <meta property="fc:frame:button:4" content="mint">
  <meta property="fc:frame:button:4:action" content="mint">
  <meta property="fc:frame:button:4:target" content="eip155:7777777:0x060f3edd18c47f59bd23d063bbeb9aa4a8fec6df">

  <meta property="fc:frame:image" content="http://example.com/image">
  <meta property="fc:frame:post_url" content="http://localhost:3001">
  <meta property="fc:frame:state" content="frog">
  <meta property="og:image" content="https://example.com/og">
"#;

fn validate_html(html: &str) -> ButtonValidationResult {
    let tags = html_to_meta_tags(html, &MetaSelector::default());
    let buttons = parse_buttons(&tags);
    validate_buttons(&buttons)
}

#[test]
fn test_default_frame() {
    let result = validate_html(DEFAULT_FRAME);
    assert_eq!(
        result,
        ButtonValidationResult {
            buttons_are_out_of_order: false,
            invalid_buttons: vec![],
        }
    );
}

#[test]
fn test_missing_first_button() {
    let result = validate_html(
        r#"
      <meta property="fc:frame:button:2" content="bar">
      <meta property="fc:frame:button:3" content="baz">
    "#,
    );
    assert_eq!(
        result,
        ButtonValidationResult {
            buttons_are_out_of_order: true,
            invalid_buttons: vec![],
        }
    );
}

#[test]
fn test_missing_middle_button() {
    let result = validate_html(
        r#"
      <meta property="fc:frame:button:1" content="foo">
      <meta property="fc:frame:button:3" content="baz">
    "#,
    );
    assert_eq!(
        result,
        ButtonValidationResult {
            buttons_are_out_of_order: true,
            invalid_buttons: vec![],
        }
    );
}

#[test]
fn test_commented_out_button_does_not_fill_gap() {
    let result = validate_html(
        r#"
      <meta property="fc:frame:button:1" content="foo">
      <!-- <meta property="fc:frame:button:2" content="bar"> -->
      <script>var s = '<meta property="fc:frame:button:4" content="qux">';</script>
      <meta property="fc:frame:button:3" content="baz">
    "#,
    );
    assert_eq!(
        result,
        ButtonValidationResult {
            buttons_are_out_of_order: true,
            invalid_buttons: vec![],
        }
    );
}

#[test]
fn test_frame_without_buttons() {
    let result = validate_html(r#"<meta property="fc:frame" content="vNext">"#);
    assert!(result.is_valid());
}

#[test]
fn test_out_of_range_button_is_dropped_before_validation() {
    let result = validate_html(
        r#"
      <meta property="fc:frame:button:1" content="foo">
      <meta property="fc:frame:button:5" content="extra">
    "#,
    );
    assert!(result.is_valid());
}

#[test]
fn test_default_frame_serializes_like_frame_tooling() {
    let result = validate_html(DEFAULT_FRAME);
    insta::assert_json_snapshot!(result, @r###"
    {
      "buttonsAreOutOfOrder": false,
      "invalidButtons": []
    }
    "###);
}

#[test]
fn test_invalid_buttons_snapshot() {
    let result = validate_html(
        r#"
      <meta property="fc:frame:button:1" content="docs">
      <meta property="fc:frame:button:1:action" content="link">
      <meta property="fc:frame:button:2" content="pay">
      <meta property="fc:frame:button:2:action" content="tx">
      <meta property="fc:frame:button:4" content="plain">
      <meta property="fc:frame:button:4:target" content="https://example.com">
    "#,
    );
    insta::assert_json_snapshot!(result, @r###"
    {
      "buttonsAreOutOfOrder": true,
      "invalidButtons": [
        {
          "index": 1,
          "reason": {
            "code": "target_required",
            "action": "link"
          }
        },
        {
          "index": 2,
          "reason": {
            "code": "unknown_action",
            "action": "tx"
          }
        },
        {
          "index": 4,
          "reason": {
            "code": "target_forbidden",
            "action": null
          }
        }
      ]
    }
    "###);
}
