//! Signup form demo
//!
//! Builds a signup form, simulates a user filling it in, and prints the
//! rendered form after each step. Set `CFORM_LOG` (error, warn, info,
//! debug, trace) to see the form's own logging on stderr.

use std::time::Duration;

use cform::node::render::to_plain;
use cform::prelude::*;
use log::LevelFilter;
use serde::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug, Deserialize)]
struct Signup {
    username: String,
    email: String,
    terms: bool,
}

/// Pretend to ask a server whether `name` is free.
fn username_available() -> Rule {
    Rule::new_async(|value| async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        match value.as_str() {
            Some("admin") | Some("root") => Some("Username is taken".to_string()),
            _ => None,
        }
    })
    .named("username_available")
}

fn build_form(value: FormValue) -> Result<Form, FormError> {
    let config = FormConfig::from_json(r#"{ "gutterSize": "small", "labelAlign": "right" }"#)?;

    let props = FormProps::new(value)
        .col(24)
        .label_width("96px".parse()?)
        .item(
            FormItem::new("username")
                .label("Username")
                .required()
                .rule(rules::required("Username is required"))
                .rule(rules::min_length(3, "At least 3 characters"))
                .rule(rules::pattern(r"^[a-z0-9_]+$", "Lowercase letters, digits and _ only")?)
                .rule(username_available()),
        )
        .item(
            FormItem::new("email")
                .label("Email")
                .required()
                .rule(rules::required("Email is required"))
                .rule(rules::email("Not a valid email")),
        )
        .item(
            FormItem::new("terms")
                .label("Terms")
                .rule(rules::checked("You must accept the terms"))
                .trigger(ValidateTrigger::Change),
        )
        .child(Node::text("ctrl+s submit · esc reset"));

    Ok(Form::with_config(props, &config))
}

async fn submit(handle: &FormHandle, value: &FormValue) -> Result<(), FormError> {
    match handle.validate_all().await? {
        Validation::Complete(errors) if !errors.has_errors() => {
            let signup: Signup = value.to_typed()?;
            log::info!("submitting {:?}", signup);
            println!("Submitted: {} <{}> (terms: {})", signup.username, signup.email, signup.terms);
        }
        Validation::Complete(errors) => {
            for (field, msg) in errors.invalid() {
                println!("  {}: {}", field, msg);
            }
        }
        Validation::Superseded => log::warn!("submit raced with another validation"),
    }
    Ok(())
}

fn show(step: &str, form: &Form) {
    println!("--- {} ---", step);
    println!("{}\n", to_plain(&form.view()));
}

async fn run() -> Result<(), FormError> {
    let value = FormValue::new();
    value.set("username", "");
    value.set("email", "");
    value.set("terms", false);

    let form = build_form(value.clone())?;
    let handle = form.handle();
    show("empty form", &form);

    submit(&handle, &value).await?;
    show("after submitting empty", &form);

    if let Some(username) = form.item("username") {
        value.set("username", "admin");
        username.on_change().await?;
        username.on_blur().await?;
    }
    show("username taken", &form);

    value.set("username", "ada_l");
    value.set("email", "ada@example.com");
    value.set("terms", true);
    if let Some(terms) = form.item("terms") {
        terms.on_change().await?;
    }
    submit(&handle, &value).await?;
    show("submitted", &form);

    handle.clear_all();
    show("reset", &form);
    Ok(())
}

#[tokio::main]
async fn main() {
    let level = std::env::var("CFORM_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
