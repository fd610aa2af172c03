//! Run tickets that let newer validations supersede older ones.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket for a whole-form run (`validate_all` or `clear_all`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

/// Ticket for a single-field run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTicket {
    form: u64,
    field: u64,
}

/// Hands out tickets and tells whether a ticket is still the latest.
///
/// Whole-form runs share one sequence. Each field has its own sequence on
/// top of that, so a field validation is stale once the form was validated
/// or cleared, or once the same field was validated or cleared again.
#[derive(Debug, Default)]
pub struct RunTracker {
    form: AtomicU64,
    fields: Mutex<HashMap<String, u64>>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a whole-form run, superseding everything in flight.
    pub fn begin_form(&self) -> RunTicket {
        RunTicket(self.form.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Start a run for `field`, superseding earlier runs of that field.
    pub fn begin_field(&self, field: &str) -> FieldTicket {
        let mut fields = self
            .fields
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let seq = fields.entry(field.to_string()).or_insert(0);
        *seq += 1;
        FieldTicket {
            form: self.form.load(Ordering::SeqCst),
            field: *seq,
        }
    }

    pub fn is_current(&self, ticket: RunTicket) -> bool {
        self.form.load(Ordering::SeqCst) == ticket.0
    }

    pub fn is_field_current(&self, field: &str, ticket: FieldTicket) -> bool {
        if self.form.load(Ordering::SeqCst) != ticket.form {
            return false;
        }
        let fields = self
            .fields
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        fields.get(field).copied() == Some(ticket.field)
    }
}
