//! Field name -> rule list registry.

use super::rule::Rule;

/// Ordered registry of field rules.
///
/// Fields keep the position of their first registration; registering a
/// field again replaces its rules in place.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, Vec<Rule>)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the rules of `field`.
    ///
    /// Returns `true` if the field was already registered.
    pub fn set(&mut self, field: impl Into<String>, rules: Vec<Rule>) -> bool {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => {
                *existing = rules;
                true
            }
            None => {
                self.entries.push((field, rules));
                false
            }
        }
    }

    /// Drop the rules of `field`.
    pub fn remove(&mut self, field: &str) -> Option<Vec<Rule>> {
        let idx = self.entries.iter().position(|(name, _)| name == field)?;
        Some(self.entries.remove(idx).1)
    }

    /// Rules of `field`, if registered.
    pub fn rules(&self, field: &str) -> Option<&[Rule]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Fields that have at least one rule, in registration order.
    pub fn with_rules(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.entries
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    /// Registered field names, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
