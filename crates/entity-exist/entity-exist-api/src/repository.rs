//! This module contains the [`Repository`] trait, the data-access capability used to check
//! whether a record exists.

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// Errors raised by a [`Repository`].
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepositoryError {
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
    #[error("Unknown property {property} on entity {entity}")]
    UnknownProperty { entity: String, property: String },
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Repository Result type
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Trait for locating single records in a data store.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
///
/// use entity_exist_api::prelude::{Repository, RepositoryError, RepositoryResult, Value};
///
/// struct Users(HashMap<u64, String>);
///
/// impl Repository for Users {
///     type Record = String;
///
///     fn find_one(
///         &self,
///         entity: &str,
///         property: &str,
///         value: &Value,
///     ) -> RepositoryResult<Option<String>> {
///         if entity != "User" {
///             return Err(RepositoryError::UnknownEntity(entity.to_string()));
///         }
///         if property != "id" {
///             return Err(RepositoryError::UnknownProperty {
///                 entity: entity.to_string(),
///                 property: property.to_string(),
///             });
///         }
///         Ok(value.as_uint64().and_then(|id| self.0.get(id)).cloned())
///     }
/// }
///
/// let users = Users(HashMap::from([(1, "alice".to_string())]));
/// assert_eq!(users.find_one("User", "id", &Value::from(1u64)).unwrap(), Some("alice".to_string()));
/// assert_eq!(users.find_one("User", "id", &Value::from(2u64)).unwrap(), None);
/// assert!(users.find_one("Post", "id", &Value::from(1u64)).is_err());
/// ```
pub trait Repository {
    /// The record type returned by the repository; opaque to validators.
    type Record;

    /// Finds one record of `entity` whose `property` equals `value`.
    ///
    /// Returns `Ok(None)` if there is no such record.
    fn find_one(
        &self,
        entity: &str,
        property: &str,
        value: &Value,
    ) -> RepositoryResult<Option<Self::Record>>;
}

impl<R> Repository for &R
where
    R: Repository + ?Sized,
{
    type Record = R::Record;

    fn find_one(
        &self,
        entity: &str,
        property: &str,
        value: &Value,
    ) -> RepositoryResult<Option<Self::Record>> {
        (**self).find_one(entity, property, value)
    }
}

// implements Repository for smart pointers to repositories
macro_rules! impl_repository_for_pointer {
    ($pointer:ident) => {
        impl<R> Repository for $pointer<R>
        where
            R: Repository + ?Sized,
        {
            type Record = R::Record;

            fn find_one(
                &self,
                entity: &str,
                property: &str,
                value: &Value,
            ) -> RepositoryResult<Option<Self::Record>> {
                (**self).find_one(entity, property, value)
            }
        }
    };
}

impl_repository_for_pointer!(Box);
impl_repository_for_pointer!(Rc);
impl_repository_for_pointer!(Arc);
