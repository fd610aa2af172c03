//! Form layout and validation for component libraries.
//!
//! A [`Form`](form::Form) owns a validator registry and an error map, and
//! hands a [`FormContext`](form::FormContext) to its fields so they share
//! one size, gutter and label layout. The form's owner drives whole-form
//! validation through a [`FormHandle`](form::FormHandle).

pub mod config;
pub mod error;
pub mod form;
pub mod item;
pub mod layout;
pub mod node;
pub mod state;
pub mod validation;
pub mod value;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::error::{BoxError, FormError};
    pub use crate::form::{Form, FormContext, FormHandle, FormId, FormProps};
    pub use crate::item::{ErrorPlacement, FormItem, MountedItem, ValidateTrigger};
    pub use crate::layout::{
        FormLayout, FormSize, GutterSize, LabelAlign, LabelDirection, LabelWidth,
    };
    pub use crate::node::{Node, TextRole};
    pub use crate::state::State;
    pub use crate::validation::{Errors, FieldStatus, Rule, Validation, rules};
    pub use crate::value::FormValue;
}
