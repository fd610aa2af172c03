//! A single validation rule.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::status::FieldStatus;
use crate::error::{BoxError, FormError};

/// Future returned by a rule: `Ok(None)` passes, `Ok(Some(msg))` rejects
/// with a message, `Err` is an unexpected failure of the rule itself.
pub type RuleFuture = BoxFuture<'static, Result<Option<String>, BoxError>>;

type CheckFn = dyn Fn(Value) -> RuleFuture + Send + Sync;

/// A validator for one field.
///
/// Rules receive an owned snapshot of the field's current value (`Null` if
/// the field is absent) so async rules can hold it across awaits. Clones
/// share the same closure.
#[derive(Clone)]
pub struct Rule {
    name: Arc<str>,
    check: Arc<CheckFn>,
}

impl Rule {
    /// Synchronous rule returning an error message on failure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_fn("custom", move |value| {
            let verdict = f(&value);
            async move { Ok::<_, BoxError>(verdict) }.boxed()
        })
    }

    /// Rule that passes when `f` returns `true` and otherwise fails with `msg`.
    pub fn predicate<F>(f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        Self::new(move |v| if f(v) { None } else { Some(msg.clone()) })
    }

    /// Asynchronous rule, e.g. a server-side uniqueness check.
    pub fn new_async<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<String>> + Send + 'static,
    {
        Self::from_fn("custom_async", move |value| f(value).map(Ok::<_, BoxError>).boxed())
    }

    /// Asynchronous rule that can fail outright.
    ///
    /// An `Err` aborts the validation call that ran the rule.
    pub fn try_async<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<String>, BoxError>> + Send + 'static,
    {
        Self::from_fn("custom_async", move |value| f(value).boxed())
    }

    pub(crate) fn from_fn<F>(name: &str, f: F) -> Self
    where
        F: Fn(Value) -> RuleFuture + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            check: Arc::new(f),
        }
    }

    /// Give the rule a name used in log output.
    pub fn named(mut self, name: impl AsRef<str>) -> Self {
        self.name = Arc::from(name.as_ref());
        self
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the rule against `value`.
    pub fn check(&self, value: Value) -> RuleFuture {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Run `rules` in order against `value`, stopping at the first rejection.
pub(crate) async fn run_rules(
    field: &str,
    rules: &[Rule],
    value: Value,
) -> Result<FieldStatus, FormError> {
    for rule in rules {
        match rule.check(value.clone()).await {
            Ok(None) => {}
            Ok(Some(msg)) => {
                log::debug!("field '{}' rejected by rule '{}': {}", field, rule.name(), msg);
                return Ok(FieldStatus::Invalid(msg));
            }
            Err(source) => {
                log::debug!("rule '{}' on field '{}' failed: {}", rule.name(), field, source);
                return Err(FormError::rule(field, source));
            }
        }
    }
    Ok(FieldStatus::Valid)
}
