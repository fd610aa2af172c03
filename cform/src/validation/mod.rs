//! Field validation.
//!
//! Rules are registered per field and run in registration order; the first
//! rule that rejects a value decides the field's message and the remaining
//! rules are skipped. Rules may be async and are always awaited one at a
//! time.
//!
//! # Example
//!
//! ```
//! use cform::validation::{Rule, rules};
//!
//! let username = vec![
//!     rules::required("Username is required"),
//!     rules::min_length(3, "At least 3 characters"),
//!     Rule::new_async(|v| async move {
//!         (v.as_str() == Some("admin")).then(|| "Username is taken".to_string())
//!     }),
//! ];
//! # let _ = username;
//! ```

mod registry;
mod rule;
pub mod rules;
mod run;
mod status;

pub use registry::Registry;
pub use rule::{Rule, RuleFuture};
pub use run::{FieldTicket, RunTicket, RunTracker};
pub use status::{Errors, FieldStatus};

pub(crate) use rule::run_rules;

/// Outcome of a whole-form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The run finished and its errors were committed.
    Complete(Errors),
    /// A newer validation or a clear started before this run finished;
    /// nothing was committed.
    Superseded,
}

impl Validation {
    /// Whether the run was committed with no invalid field.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Complete(errors) if !errors.has_errors())
    }

    /// Committed errors, if the run was not superseded.
    pub fn errors(&self) -> Option<&Errors> {
        match self {
            Self::Complete(errors) => Some(errors),
            Self::Superseded => None,
        }
    }

    /// First invalid field in field-name order.
    pub fn first_invalid(&self) -> Option<(&str, &str)> {
        self.errors().and_then(|errors| errors.invalid().next())
    }
}
