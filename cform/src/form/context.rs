//! Shared form context handed to descendant fields.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::layout::FormLayout;
use crate::state::State;
use crate::validation::{
    Errors, FieldStatus, Registry, Rule, RunTracker, Validation, run_rules,
};
use crate::value::FormValue;

use super::FormHandle;

/// Unique identifier of a mounted form, used to tell forms apart in logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct FormShared {
    id: FormId,
    layout: FormLayout,
    config: FormConfig,
    value: FormValue,
    validators: RwLock<Registry>,
    errors: State<Errors>,
    runs: RunTracker,
}

/// Everything a field inside a form can reach: the resolved layout, the
/// validator registry, the error state and the validation operations.
///
/// Cheap to clone; all clones drive the same form.
#[derive(Debug, Clone)]
pub struct FormContext {
    shared: Arc<FormShared>,
}

impl FormContext {
    pub(crate) fn new(layout: FormLayout, config: FormConfig, value: FormValue) -> Self {
        let id = FormId::new();
        log::debug!("form {} mounted with layout {:?}", id, layout);
        Self {
            shared: Arc::new(FormShared {
                id,
                layout,
                config,
                value,
                validators: RwLock::new(Registry::new()),
                errors: State::default(),
                runs: RunTracker::new(),
            }),
        }
    }

    pub fn id(&self) -> FormId {
        self.shared.id
    }

    /// Resolved layout of the form.
    pub fn layout(&self) -> &FormLayout {
        &self.shared.layout
    }

    /// Defaults the form was mounted with.
    pub fn config(&self) -> &FormConfig {
        &self.shared.config
    }

    /// The form data being validated.
    pub fn value(&self) -> &FormValue {
        &self.shared.value
    }

    /// Snapshot of the current error state.
    pub fn errors(&self) -> Errors {
        self.shared.errors.get()
    }

    /// Status of one field, if it has been validated or cleared.
    pub fn status(&self, field: &str) -> Option<FieldStatus> {
        self.shared.errors.with(|errors| errors.get(field).cloned())
    }

    /// Current error message of one field.
    pub fn error(&self, field: &str) -> Option<String> {
        self.shared
            .errors
            .with(|errors| errors.message(field).map(str::to_string))
    }

    /// Revision of the error state; changes on every write.
    pub fn errors_revision(&self) -> u64 {
        self.shared.errors.revision()
    }

    /// Register or overwrite the rules of `field`.
    pub fn add_validator(&self, field: impl Into<String>, rules: Vec<Rule>) {
        let field = field.into();
        let count = rules.len();
        let replaced = self.registry_mut(|registry| registry.set(field.clone(), rules));
        log::debug!(
            "form {} {} {} rule(s) for '{}'",
            self.id(),
            if replaced { "replaced with" } else { "registered" },
            count,
            field
        );
    }

    /// Drop the rules of `field`, e.g. when its component unmounts.
    ///
    /// The field's current status is left as is.
    pub fn remove_validator(&self, field: &str) -> bool {
        self.registry_mut(|registry| registry.remove(field)).is_some()
    }

    /// Names of registered fields, in registration order.
    pub fn registered_fields(&self) -> Vec<String> {
        self.registry(|registry| registry.fields().map(str::to_string).collect())
    }

    /// Run the rules of `field` against its current value and record the
    /// first failure (or `Valid`).
    ///
    /// Returns the committed status, or `None` when nothing was written:
    /// the field has no rules, or a newer clear or validation of the field
    /// or of the whole form started while this one was running.
    pub async fn validate_field(&self, field: &str) -> Result<Option<FieldStatus>, FormError> {
        let rules = self.registry(|registry| registry.rules(field).map(<[Rule]>::to_vec));
        let Some(rules) = rules.filter(|rules| !rules.is_empty()) else {
            log::debug!("form {} has no rules for '{}'", self.id(), field);
            return Ok(None);
        };

        let shared = &self.shared;
        let ticket = shared.runs.begin_field(field);
        let status = run_rules(field, &rules, shared.value.get(field)).await?;

        let committed = shared.errors.update_if(|errors| {
            if !shared.runs.is_field_current(field, ticket) {
                return false;
            }
            errors.set(field, status.clone());
            true
        });

        if committed {
            Ok(Some(status))
        } else {
            log::debug!("form {} dropped stale result for '{}'", self.id(), field);
            Ok(None)
        }
    }

    /// Validate every field that has rules and replace the error state
    /// with the result.
    ///
    /// Fields are visited in registration order and each rule is awaited
    /// before the next one starts. If a rule fails unexpectedly the call
    /// returns that error and the error state is left untouched.
    ///
    /// A committed run replaces the whole mapping, including statuses
    /// written by [`validate_field`](Self::validate_field) or
    /// [`clear_field`](Self::clear_field) while it was in flight. Only
    /// another `validate_all` or a `clear_all` supersedes it.
    pub async fn validate_all(&self) -> Result<Validation, FormError> {
        let shared = &self.shared;
        let ticket = shared.runs.begin_form();

        let fields: Vec<(String, Vec<Rule>)> = self.registry(|registry| {
            registry
                .with_rules()
                .map(|(field, rules)| (field.to_string(), rules.to_vec()))
                .collect()
        });
        log::debug!("form {} validating {} field(s)", self.id(), fields.len());

        let mut next = Errors::new();
        for (field, rules) in &fields {
            let status = run_rules(field, rules, shared.value.get(field)).await?;
            next.set(field.clone(), status);
        }

        let committed = shared.errors.update_if(|errors| {
            if !shared.runs.is_current(ticket) {
                return false;
            }
            *errors = next.clone();
            true
        });

        if committed {
            log::debug!(
                "form {} validated: {} invalid field(s)",
                self.id(),
                next.invalid().count()
            );
            Ok(Validation::Complete(next))
        } else {
            log::warn!("form {} validation superseded by a newer run", self.id());
            Ok(Validation::Superseded)
        }
    }

    /// Forget every field's status.
    pub fn clear_all(&self) {
        let shared = &self.shared;
        shared.errors.update(|errors| {
            shared.runs.begin_form();
            *errors = Errors::new();
        });
        log::debug!("form {} cleared", self.id());
    }

    /// Mark `field` as valid without touching other fields.
    pub fn clear_field(&self, field: &str) {
        let shared = &self.shared;
        shared.errors.update(|errors| {
            shared.runs.begin_field(field);
            errors.set(field, FieldStatus::Valid);
        });
    }

    /// Imperative handle for the form's owner.
    pub fn handle(&self) -> FormHandle {
        FormHandle::new(self.clone())
    }

    fn registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        let guard = self
            .shared
            .validators
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    fn registry_mut<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self
            .shared
            .validators
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}
