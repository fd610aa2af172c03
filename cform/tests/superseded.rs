//! Tests for overlapping validation runs.
//!
//! Each test parks the first run inside a rule until the test releases it,
//! so the interleaving is deterministic.

use std::sync::{Arc, Mutex};

use cform::prelude::*;
use serde_json::json;
use tokio::sync::oneshot;

/// A rule whose first call signals `started`, then waits for `release`
/// and rejects with "stale". Later calls pass immediately.
fn gated_rule() -> (Rule, oneshot::Receiver<()>, oneshot::Sender<()>) {
    let (started_tx, started_rx) = oneshot::channel::<()>();
    let (release_tx, release_rx) = oneshot::channel::<()>();
    let started = Arc::new(Mutex::new(Some(started_tx)));
    let release = Arc::new(Mutex::new(Some(release_rx)));

    let rule = Rule::new_async(move |_| {
        let started = started.lock().unwrap().take();
        let release = release.lock().unwrap().take();
        async move {
            match (started, release) {
                (Some(started), Some(release)) => {
                    let _ = started.send(());
                    let _ = release.await;
                    Some("stale".to_string())
                }
                _ => None,
            }
        }
    });

    (rule, started_rx, release_tx)
}

fn gated_form() -> (Form, oneshot::Receiver<()>, oneshot::Sender<()>) {
    let value = FormValue::from_json(json!({ "name": "x" })).unwrap();
    let form = Form::new(FormProps::new(value));
    let (rule, started, release) = gated_rule();
    form.context().add_validator("name", vec![rule]);
    (form, started, release)
}

#[tokio::test]
async fn test_stale_validate_all_does_not_overwrite_newer_run() {
    let (form, started, release) = gated_form();
    let handle = form.handle();

    let stale = tokio::spawn({
        let handle = handle.clone();
        async move { handle.validate_all().await }
    });
    started.await.unwrap();

    let fresh = handle.validate_all().await.unwrap();
    assert!(fresh.is_valid());

    release.send(()).unwrap();
    let stale = stale.await.unwrap().unwrap();

    assert_eq!(stale, Validation::Superseded);
    assert_eq!(form.context().status("name"), Some(FieldStatus::Valid));
}

#[tokio::test]
async fn test_clear_all_supersedes_running_validation() {
    let (form, started, release) = gated_form();
    let handle = form.handle();

    let running = tokio::spawn({
        let handle = handle.clone();
        async move { handle.validate_all().await }
    });
    started.await.unwrap();

    handle.clear_all();
    release.send(()).unwrap();

    assert_eq!(running.await.unwrap().unwrap(), Validation::Superseded);
    assert!(form.context().errors().is_empty());
}

#[tokio::test]
async fn test_clear_field_supersedes_running_field_validation() {
    let (form, started, release) = gated_form();
    let ctx = form.context().clone();

    let running = tokio::spawn({
        let ctx = ctx.clone();
        async move { ctx.validate_field("name").await }
    });
    started.await.unwrap();

    ctx.clear_field("name");
    release.send(()).unwrap();

    assert_eq!(running.await.unwrap().unwrap(), None);
    assert_eq!(ctx.status("name"), Some(FieldStatus::Valid));
}

#[tokio::test]
async fn test_unrelated_field_validation_is_not_superseded() {
    let value = FormValue::from_json(json!({ "name": "x", "email": "" })).unwrap();
    let form = Form::new(FormProps::new(value));
    let ctx = form.context().clone();
    let (rule, started, release) = gated_rule();
    ctx.add_validator("name", vec![rule]);
    ctx.add_validator("email", vec![rules::required("required")]);

    let running = tokio::spawn({
        let ctx = ctx.clone();
        async move { ctx.validate_field("name").await }
    });
    started.await.unwrap();

    ctx.validate_field("email").await.unwrap();
    release.send(()).unwrap();

    assert_eq!(
        running.await.unwrap().unwrap(),
        Some(FieldStatus::Invalid("stale".into()))
    );
    assert_eq!(ctx.error("name").as_deref(), Some("stale"));
    assert_eq!(ctx.error("email").as_deref(), Some("required"));
}

#[tokio::test]
async fn test_validate_all_replaces_field_writes_made_while_running() {
    let (form, started, release) = gated_form();
    let ctx = form.context().clone();

    let running = tokio::spawn({
        let handle = form.handle();
        async move { handle.validate_all().await }
    });
    started.await.unwrap();

    ctx.clear_field("name");
    assert_eq!(ctx.status("name"), Some(FieldStatus::Valid));
    release.send(()).unwrap();

    let result = running.await.unwrap().unwrap();
    assert_eq!(result.first_invalid(), Some(("name", "stale")));
    assert_eq!(ctx.error("name").as_deref(), Some("stale"));
}
