//! This module contains the [`Constraint`] abstraction and the constraints shipped with this crate.

mod entity_exist;

use std::any::Any;
use std::fmt::Debug;

pub use self::entity_exist::{DEFAULT_MESSAGE, DEFAULT_PROPERTY, EntityExist, EntityExistOptions};

/// Name of the group every constraint belongs to unless configured otherwise.
pub const DEFAULT_GROUP: &str = "Default";

/// Trait for the declarative configuration of a validation rule.
///
/// A validation host stores constraints as `dyn Constraint` and hands them to the validator
/// registered for them; validators recover the concrete type through [`Constraint::as_any`].
pub trait Constraint: Any + Debug + Send + Sync {
    /// Name of the constraint, used in error messages and violations.
    fn name(&self) -> &'static str;

    /// Validation groups this constraint belongs to.
    fn groups(&self) -> &[String];

    /// Returns `self` as [`Any`], so it can be downcast to the concrete constraint type.
    fn as_any(&self) -> &dyn Any;
}
