//! Test fixtures shared across the crate.

use std::any::Any;
use std::cell::RefCell;

use entity_exist_api::prelude::{
    Constraint, DEFAULT_GROUP, Repository, RepositoryError, RepositoryResult, Value,
};

/// A `find_one` call recorded by [`MockRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOneCall {
    pub entity: String,
    pub property: String,
    pub value: Value,
}

impl FindOneCall {
    pub fn new(entity: &str, property: &str, value: impl Into<Value>) -> Self {
        Self {
            entity: entity.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }
}

/// A repository returning a canned response and recording every lookup.
#[derive(Debug)]
pub struct MockRepository {
    response: RepositoryResult<Option<&'static str>>,
    calls: RefCell<Vec<FindOneCall>>,
}

impl MockRepository {
    /// A repository answering every lookup with `record`.
    pub fn returning(record: Option<&'static str>) -> Self {
        Self {
            response: Ok(record),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A repository failing every lookup with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            response: Err(error),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<FindOneCall> {
        self.calls.borrow().clone()
    }
}

impl Repository for MockRepository {
    type Record = &'static str;

    fn find_one(
        &self,
        entity: &str,
        property: &str,
        value: &Value,
    ) -> RepositoryResult<Option<Self::Record>> {
        self.calls
            .borrow_mut()
            .push(FindOneCall::new(entity, property, value.clone()));
        self.response.clone()
    }
}

/// A constraint which is not an `EntityExist`.
#[derive(Debug)]
pub struct NotNull {
    groups: Vec<String>,
}

impl Default for NotNull {
    fn default() -> Self {
        Self {
            groups: vec![DEFAULT_GROUP.to_string()],
        }
    }
}

impl Constraint for NotNull {
    fn name(&self) -> &'static str {
        "NotNull"
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[allow(clippy::module_inception)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_records_calls() {
        let repository = MockRepository::returning(Some("my_user"));

        let record = repository
            .find_one("User", "id", &Value::from("foobar"))
            .expect("should not fail");

        assert_eq!(record, Some("my_user"));
        assert_eq!(
            repository.calls(),
            vec![FindOneCall::new("User", "id", "foobar")]
        );
    }

    #[test]
    fn test_not_null_is_not_entity_exist() {
        let constraint = NotNull::default();
        assert!(
            constraint
                .as_any()
                .downcast_ref::<entity_exist_api::prelude::EntityExist>()
                .is_none()
        );
        assert_eq!(constraint.groups(), &[DEFAULT_GROUP.to_string()]);
    }
}
