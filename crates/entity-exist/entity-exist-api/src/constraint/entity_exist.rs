use std::any::Any;

use serde::{Deserialize, Serialize};

use super::{Constraint, DEFAULT_GROUP};
use crate::error::ExistResult;

/// Default message reported when the value doesn't resolve to an existing record.
pub const DEFAULT_MESSAGE: &str =
    "Entity \"%entity%\" with property \"%property%\": \"%value%\" does not exist.";

/// Default property used to look the record up.
pub const DEFAULT_PROPERTY: &str = "id";

/// Constraint which requires the value to identify an existing record of `entity`,
/// matched on `property`.
///
/// The configuration is not checked on construction: a missing `entity` is only reported
/// when the constraint is validated.
///
/// # Example
///
/// ```rust
/// use entity_exist_api::prelude::EntityExist;
///
/// let constraint = EntityExist::for_entity("User").with_property("uuid");
/// assert_eq!(constraint.entity(), Some("User"));
/// assert_eq!(constraint.property(), "uuid");
///
/// let constraint = EntityExist::new();
/// assert_eq!(constraint.entity(), None);
/// assert_eq!(constraint.property(), "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntityExistOptions")]
pub struct EntityExist {
    entity: Option<String>,
    property: String,
    message: String,
    groups: Vec<String>,
    payload: Option<serde_json::Value>,
}

/// The declarative options of [`EntityExist`], as they appear in host metadata.
///
/// Every option is optional; unset options fall back to the [`EntityExist`] defaults.
///
/// # Example
///
/// ```rust
/// use entity_exist_api::prelude::{EntityExist, EntityExistOptions};
///
/// let constraint = EntityExist::from(EntityExistOptions {
///     entity: Some("User".to_string()),
///     ..Default::default()
/// });
/// assert_eq!(constraint.property(), "id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityExistOptions {
    pub entity: Option<String>,
    pub property: Option<String>,
    pub message: Option<String>,
    pub groups: Option<Vec<String>>,
    pub payload: Option<serde_json::Value>,
}

impl Default for EntityExist {
    fn default() -> Self {
        Self {
            entity: None,
            property: DEFAULT_PROPERTY.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            groups: vec![DEFAULT_GROUP.to_string()],
            payload: None,
        }
    }
}

impl From<EntityExistOptions> for EntityExist {
    fn from(options: EntityExistOptions) -> Self {
        let defaults = Self::default();
        Self {
            entity: options.entity.or(defaults.entity),
            property: options.property.unwrap_or(defaults.property),
            message: options.message.unwrap_or(defaults.message),
            groups: options.groups.unwrap_or(defaults.groups),
            payload: options.payload.or(defaults.payload),
        }
    }
}

impl EntityExist {
    /// Creates a new [`EntityExist`] with the default options and no entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`EntityExist`] checking records of `entity`.
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self::default().with_entity(entity)
    }

    /// Loads the constraint from a JSON object of [`EntityExistOptions`].
    ///
    /// ```rust
    /// use entity_exist_api::prelude::EntityExist;
    ///
    /// let constraint = EntityExist::from_json(r#"{"entity": "User", "property": "uuid"}"#).unwrap();
    /// assert_eq!(constraint, EntityExist::for_entity("User").with_property("uuid"));
    /// ```
    pub fn from_json(json: &str) -> ExistResult<Self> {
        let options: EntityExistOptions = serde_json::from_str(json)?;
        Ok(options.into())
    }

    /// Sets the entity the record is looked up in.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Sets the property matched against the value.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    /// Sets the message template reported when no record is found.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the validation groups of the constraint.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches integrator data to the constraint.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The entity (table, collection, repository...) the record is looked up in.
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// The property matched against the value.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The message template, with `%entity%`, `%property%` and `%value%` placeholders.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Integrator data attached to the constraint; never interpreted.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }
}

impl Constraint for EntityExist {
    fn name(&self) -> &'static str {
        "EntityExist"
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
