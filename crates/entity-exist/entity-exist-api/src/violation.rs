//! This module contains the [`Violation`] type and the [`ExecutionContext`] violations are
//! reported to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A value which failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rendered message.
    pub message: String,
    /// The message template the message was rendered from.
    pub template: String,
    /// The parameters substituted into the template, keyed by placeholder.
    pub parameters: BTreeMap<String, String>,
    /// The value which failed validation.
    pub invalid_value: Value,
    /// Name of the violated constraint.
    pub constraint: String,
}

impl Violation {
    /// Starts building a [`Violation`] for the given message template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_exist_api::prelude::Violation;
    ///
    /// let violation = Violation::builder("%entity% %value% is missing")
    ///     .parameter("%entity%", "User")
    ///     .parameter("%value%", "42")
    ///     .build();
    /// assert_eq!(violation.message, "User 42 is missing");
    /// ```
    pub fn builder(template: impl Into<String>) -> ViolationBuilder {
        ViolationBuilder {
            template: template.into(),
            parameters: BTreeMap::new(),
            invalid_value: Value::Null,
            constraint: String::new(),
        }
    }

    /// Returns the parameter substituted for `placeholder`, if any.
    pub fn parameter(&self, placeholder: &str) -> Option<&str> {
        self.parameters.get(placeholder).map(String::as_str)
    }
}

/// Builder for [`Violation`]s.
#[derive(Debug, Clone)]
pub struct ViolationBuilder {
    template: String,
    parameters: BTreeMap<String, String>,
    invalid_value: Value,
    constraint: String,
}

impl ViolationBuilder {
    /// Sets the value substituted for `placeholder` in the template.
    pub fn parameter(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(placeholder.into(), value.into());
        self
    }

    /// Sets the value which failed validation.
    pub fn invalid_value(mut self, value: Value) -> Self {
        self.invalid_value = value;
        self
    }

    /// Sets the name of the violated constraint.
    pub fn constraint(mut self, name: impl Into<String>) -> Self {
        self.constraint = name.into();
        self
    }

    /// Renders the template and builds the [`Violation`].
    pub fn build(self) -> Violation {
        let message = render(&self.template, &self.parameters);
        Violation {
            message,
            template: self.template,
            parameters: self.parameters,
            invalid_value: self.invalid_value,
            constraint: self.constraint,
        }
    }
}

/// Substitutes the parameters into the template in a single pass.
///
/// Substituted text is never scanned again; at a given position the longest matching
/// placeholder wins.
fn render(template: &str, parameters: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(ch) = rest.chars().next() {
        let placeholder = parameters
            .iter()
            .filter(|(key, _)| !key.is_empty() && rest.starts_with(key.as_str()))
            .max_by_key(|(key, _)| key.len());

        match placeholder {
            Some((key, value)) => {
                rendered.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                rendered.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    rendered
}

/// The reporting capability a validation host supplies to validators.
pub trait ExecutionContext {
    /// Reports a violation.
    fn add_violation(&mut self, violation: Violation);
}

impl ExecutionContext for Vec<Violation> {
    fn add_violation(&mut self, violation: Violation) {
        self.push(violation);
    }
}

/// A collection of [`Violation`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no violation was collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the collected violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }
}

impl ExecutionContext for Violations {
    fn add_violation(&mut self, violation: Violation) {
        self.0.push(violation);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
