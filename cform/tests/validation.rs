//! Tests for validator registration and the validate/clear operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cform::prelude::*;
use serde_json::json;

fn form_over(value: serde_json::Value) -> Form {
    let value = FormValue::from_json(value).unwrap();
    Form::new(FormProps::new(value))
}

fn failing(msg: &'static str) -> Rule {
    Rule::new(move |_| Some(msg.to_string()))
}

fn counting(counter: &Arc<AtomicUsize>, verdict: Option<&'static str>) -> Rule {
    let counter = Arc::clone(counter);
    Rule::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        verdict.map(str::to_string)
    })
}

// ============================================================================
// validate_all
// ============================================================================

#[tokio::test]
async fn test_required_empty_email() {
    let form = form_over(json!({ "email": "" }));
    let ctx = form.context();
    ctx.add_validator("email", vec![rules::required("required")]);

    let result = form.handle().validate_all().await.unwrap();

    let errors = ctx.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message("email"), Some("required"));
    assert!(!result.is_valid());
    assert_eq!(result.first_invalid(), Some(("email", "required")));
}

#[tokio::test]
async fn test_valid_email_passes_all_rules() {
    let form = form_over(json!({ "email": "a@b.com" }));
    let ctx = form.context();
    ctx.add_validator(
        "email",
        vec![rules::required("required"), rules::email("not an email")],
    );

    let result = ctx.validate_all().await.unwrap();

    assert!(result.is_valid());
    assert_eq!(ctx.status("email"), Some(FieldStatus::Valid));
    assert_eq!(ctx.errors().len(), 1);
}

#[tokio::test]
async fn test_first_failure_wins_and_short_circuits() {
    let form = form_over(json!({ "name": "" }));
    let ctx = form.context();
    let second_calls = Arc::new(AtomicUsize::new(0));
    ctx.add_validator(
        "name",
        vec![failing("first"), counting(&second_calls, Some("second"))],
    );

    ctx.validate_all().await.unwrap();

    assert_eq!(ctx.error("name").as_deref(), Some("first"));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0, "second rule must not run");
}

#[tokio::test]
async fn test_fields_without_rules_get_no_entry() {
    let form = form_over(json!({ "a": "", "b": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![rules::required("required")]);
    ctx.add_validator("b", Vec::new());

    ctx.validate_all().await.unwrap();

    let errors = ctx.errors();
    assert!(errors.get("a").is_some());
    assert!(errors.get("b").is_none());
    assert!(errors.get("unregistered").is_none());
}

#[tokio::test]
async fn test_validate_all_replaces_previous_mapping() {
    let form = form_over(json!({ "a": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![rules::required("required")]);
    ctx.clear_field("stale");

    ctx.validate_all().await.unwrap();

    let errors = ctx.errors();
    assert!(errors.get("stale").is_none(), "old entries are dropped");
    assert_eq!(errors.message("a"), Some("required"));
}

#[tokio::test]
async fn test_validate_all_reads_current_value() {
    let value = FormValue::new();
    value.set("email", "");
    let form = Form::new(FormProps::new(value.clone()));
    let ctx = form.context();
    ctx.add_validator("email", vec![rules::required("required")]);

    ctx.validate_all().await.unwrap();
    assert_eq!(ctx.error("email").as_deref(), Some("required"));

    value.set("email", "someone@example.com");
    ctx.validate_all().await.unwrap();
    assert_eq!(ctx.status("email"), Some(FieldStatus::Valid));
}

#[tokio::test]
async fn test_missing_field_is_null() {
    let form = form_over(json!({}));
    let ctx = form.context();
    ctx.add_validator("email", vec![rules::required("required")]);

    ctx.validate_all().await.unwrap();

    assert_eq!(ctx.error("email").as_deref(), Some("required"));
}

#[tokio::test]
async fn test_async_rules_run_in_order() {
    let form = form_over(json!({ "user": "admin" }));
    let ctx = form.context();
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    let rule = |tag: &'static str, verdict: Option<&'static str>| {
        let order = Arc::clone(&order);
        Rule::new_async(move |_| {
            let order = Arc::clone(&order);
            async move {
                tokio::task::yield_now().await;
                order.lock().unwrap().push(tag);
                verdict.map(str::to_string)
            }
        })
    };
    ctx.add_validator(
        "user",
        vec![rule("one", None), rule("two", Some("taken")), rule("three", None)],
    );

    ctx.validate_all().await.unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["one", "two"]);
    assert_eq!(ctx.error("user").as_deref(), Some("taken"));
}

// ============================================================================
// Rule failures
// ============================================================================

#[tokio::test]
async fn test_rule_error_aborts_validate_all() {
    let form = form_over(json!({ "a": "", "b": "" }));
    let ctx = form.context();
    let later_calls = Arc::new(AtomicUsize::new(0));
    ctx.add_validator("a", vec![rules::required("a required")]);
    ctx.add_validator(
        "b",
        vec![Rule::try_async(|_| async {
            Err::<Option<String>, BoxError>("backend unreachable".into())
        })],
    );
    ctx.add_validator("c", vec![counting(&later_calls, None)]);

    ctx.clear_field("a");
    let before = ctx.errors();

    let err = ctx.validate_all().await.unwrap_err();

    assert!(matches!(err, FormError::Rule { .. }));
    assert_eq!(err.field(), Some("b"));
    assert!(err.to_string().contains("backend unreachable"));
    assert_eq!(later_calls.load(Ordering::SeqCst), 0, "remaining fields are skipped");
    assert_eq!(ctx.errors(), before, "nothing is committed");
}

#[tokio::test]
async fn test_rule_error_in_validate_field() {
    let form = form_over(json!({ "a": "x" }));
    let ctx = form.context();
    ctx.add_validator(
        "a",
        vec![Rule::try_async(|_| async {
            Err::<Option<String>, BoxError>("boom".into())
        })],
    );

    let err = ctx.validate_field("a").await.unwrap_err();

    assert_eq!(err.field(), Some("a"));
    assert!(ctx.status("a").is_none());
}

// ============================================================================
// validate_field / clear
// ============================================================================

#[tokio::test]
async fn test_validate_field_touches_only_that_field() {
    let form = form_over(json!({ "a": "", "b": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![rules::required("a required")]);
    ctx.add_validator("b", vec![rules::required("b required")]);

    let status = ctx.validate_field("a").await.unwrap();

    assert_eq!(status, Some(FieldStatus::Invalid("a required".into())));
    assert_eq!(ctx.error("a").as_deref(), Some("a required"));
    assert!(ctx.status("b").is_none());
}

#[tokio::test]
async fn test_validate_field_without_rules_is_noop() {
    let form = form_over(json!({ "a": "" }));
    let ctx = form.context();

    assert_eq!(ctx.validate_field("a").await.unwrap(), None);
    assert!(ctx.errors().is_empty());
}

#[tokio::test]
async fn test_clear_all_empties_errors() {
    let form = form_over(json!({ "a": "", "b": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![rules::required("required")]);
    ctx.add_validator("b", vec![rules::required("required")]);
    ctx.validate_all().await.unwrap();
    assert_eq!(ctx.errors().len(), 2);

    form.handle().clear_all();

    assert!(ctx.errors().is_empty());
}

#[tokio::test]
async fn test_clear_field_leaves_others() {
    let form = form_over(json!({ "a": "", "b": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![rules::required("a required")]);
    ctx.add_validator("b", vec![rules::required("b required")]);
    ctx.validate_all().await.unwrap();

    ctx.clear_field("a");

    assert_eq!(ctx.status("a"), Some(FieldStatus::Valid));
    assert_eq!(ctx.error("b").as_deref(), Some("b required"));
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_add_validator_replaces_rules() {
    let form = form_over(json!({ "a": "" }));
    let ctx = form.context();
    let old_calls = Arc::new(AtomicUsize::new(0));
    ctx.add_validator("a", vec![counting(&old_calls, Some("old"))]);
    ctx.add_validator("a", vec![failing("new")]);

    ctx.validate_all().await.unwrap();

    assert_eq!(ctx.error("a").as_deref(), Some("new"));
    assert_eq!(old_calls.load(Ordering::SeqCst), 0);
    assert_eq!(ctx.registered_fields(), vec!["a".to_string()]);
}

#[tokio::test]
async fn test_registration_order_is_kept() {
    let form = form_over(json!({}));
    let ctx = form.context();
    ctx.add_validator("z", vec![failing("z")]);
    ctx.add_validator("a", vec![failing("a")]);
    ctx.add_validator("z", vec![failing("z2")]);

    assert_eq!(ctx.registered_fields(), vec!["z".to_string(), "a".to_string()]);
}

#[tokio::test]
async fn test_remove_validator() {
    let form = form_over(json!({ "a": "" }));
    let ctx = form.context();
    ctx.add_validator("a", vec![failing("a")]);

    assert!(ctx.remove_validator("a"));
    assert!(!ctx.remove_validator("a"));

    ctx.validate_all().await.unwrap();
    assert!(ctx.errors().is_empty());
}

#[test]
fn test_errors_revision_changes_on_write() {
    let form = form_over(json!({}));
    let ctx = form.context();
    let before = ctx.errors_revision();

    ctx.clear_field("a");

    assert_ne!(ctx.errors_revision(), before);
}
