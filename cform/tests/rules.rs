use cform::prelude::*;
use serde_json::{Value, json};

async fn verdict(rule: &Rule, value: Value) -> Option<String> {
    rule.check(value).await.unwrap()
}

// ============================================================================
// required
// ============================================================================

#[tokio::test]
async fn test_required_rejects_empty_values() {
    let rule = rules::required("required");

    for empty in [json!(null), json!(""), json!("   "), json!([]), json!({})] {
        assert_eq!(verdict(&rule, empty.clone()).await.as_deref(), Some("required"), "{empty}");
    }
}

#[tokio::test]
async fn test_required_accepts_values() {
    let rule = rules::required("required");

    for filled in [json!("a"), json!(0), json!(false), json!([1])] {
        assert_eq!(verdict(&rule, filled.clone()).await, None, "{filled}");
    }
}

// ============================================================================
// Length
// ============================================================================

#[tokio::test]
async fn test_min_length_counts_chars() {
    let rule = rules::min_length(3, "too short");

    assert_eq!(verdict(&rule, json!("ab")).await.as_deref(), Some("too short"));
    assert_eq!(verdict(&rule, json!("äöü")).await, None);
    assert_eq!(verdict(&rule, json!("")).await, None, "empty is left to required");
}

#[tokio::test]
async fn test_max_length_on_arrays() {
    let rule = rules::max_length(2, "too many");

    assert_eq!(verdict(&rule, json!([1, 2])).await, None);
    assert_eq!(verdict(&rule, json!([1, 2, 3])).await.as_deref(), Some("too many"));
}

// ============================================================================
// Format
// ============================================================================

#[tokio::test]
async fn test_email() {
    let rule = rules::email("bad email");

    assert_eq!(verdict(&rule, json!("a@b.com")).await, None);
    assert_eq!(verdict(&rule, json!("not-an-email")).await.as_deref(), Some("bad email"));
    assert_eq!(verdict(&rule, json!("")).await, None);
}

#[tokio::test]
async fn test_pattern() {
    let rule = rules::pattern(r"^\d{4}$", "four digits").unwrap();

    assert_eq!(verdict(&rule, json!("2024")).await, None);
    assert_eq!(verdict(&rule, json!("20x4")).await.as_deref(), Some("four digits"));
}

#[test]
fn test_pattern_invalid_regex() {
    let err = rules::pattern("(unclosed", "msg").unwrap_err();
    assert!(matches!(err, FormError::InvalidPattern(_)));
}

#[tokio::test]
async fn test_range() {
    let rule = rules::range(18.0, 99.0, "out of range");

    assert_eq!(verdict(&rule, json!(18)).await, None);
    assert_eq!(verdict(&rule, json!(17.5)).await.as_deref(), Some("out of range"));
    assert_eq!(verdict(&rule, json!("18")).await.as_deref(), Some("out of range"));
    assert_eq!(verdict(&rule, json!(null)).await, None);
}

#[tokio::test]
async fn test_equals_and_checked() {
    let equals = rules::equals("secret", "mismatch");
    let checked = rules::checked("accept the terms");

    assert_eq!(verdict(&equals, json!("secret")).await, None);
    assert_eq!(verdict(&equals, json!("other")).await.as_deref(), Some("mismatch"));
    assert_eq!(verdict(&checked, json!(true)).await, None);
    assert_eq!(verdict(&checked, json!(false)).await.as_deref(), Some("accept the terms"));
}

// ============================================================================
// Custom rules
// ============================================================================

#[test]
fn test_rule_names() {
    assert_eq!(rules::required("x").name(), "required");
    assert_eq!(Rule::new(|_| None).name(), "custom");
    assert_eq!(Rule::new(|_| None).named("unique").name(), "unique");
}

#[tokio::test]
async fn test_async_rule_sees_value() {
    let rule = Rule::new_async(|v| async move {
        (v.as_str() == Some("admin")).then(|| "taken".to_string())
    });

    assert_eq!(verdict(&rule, json!("admin")).await.as_deref(), Some("taken"));
    assert_eq!(verdict(&rule, json!("alice")).await, None);
}

#[tokio::test]
async fn test_try_async_error_is_returned() {
    let rule = Rule::try_async(|_| async { Err::<Option<String>, BoxError>("offline".into()) });

    let err = rule.check(json!("x")).await.unwrap_err();
    assert_eq!(err.to_string(), "offline");
}
