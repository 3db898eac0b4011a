//! Prelude exposes all the types for `entity-exist-api` crate.

pub use crate::constraint::{
    Constraint, DEFAULT_GROUP, DEFAULT_MESSAGE, DEFAULT_PROPERTY, EntityExist, EntityExistOptions,
};
pub use crate::error::{ExistError, ExistResult};
pub use crate::repository::{Repository, RepositoryError, RepositoryResult};
pub use crate::value::Value;
pub use crate::violation::{ExecutionContext, Violation, ViolationBuilder, Violations};
