use crate::error::FormError;
use crate::validation::Validation;

use super::{FormContext, FormId};

/// Imperative handle given to the owner of a form.
///
/// Lets a parent screen trigger whole-form validation (e.g. on submit) or
/// reset the error state without reaching into the form's fields.
///
/// # Example
///
/// ```ignore
/// async fn submit(handle: &FormHandle) -> Result<(), FormError> {
///     if handle.validate_all().await?.is_valid() {
///         // send the data
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FormHandle {
    ctx: FormContext,
}

impl FormHandle {
    pub(crate) fn new(ctx: FormContext) -> Self {
        Self { ctx }
    }

    /// Id of the form this handle drives.
    pub fn form_id(&self) -> FormId {
        self.ctx.id()
    }

    /// Validate every registered field. See [`FormContext::validate_all`].
    pub async fn validate_all(&self) -> Result<Validation, FormError> {
        self.ctx.validate_all().await
    }

    /// Reset the error state to empty.
    pub fn clear_all(&self) {
        self.ctx.clear_all();
    }
}
