//! This module contains the validators which execute constraints.

mod entity_exist;

use entity_exist_api::prelude::{Constraint, ExecutionContext, ExistResult, Value};

pub use self::entity_exist::EntityExistValidator;

/// Trait for the logic executing a [`Constraint`].
pub trait ConstraintValidator {
    /// Validates `value` against `constraint`.
    ///
    /// A value which doesn't satisfy the constraint is reported to `context` as a
    /// [`entity_exist_api::prelude::Violation`] and `Ok(())` is returned; errors are reserved for
    /// misconfigured constraints and failures of the underlying services.
    fn validate(
        &self,
        value: &Value,
        constraint: &dyn Constraint,
        context: &mut dyn ExecutionContext,
    ) -> ExistResult<()>;
}
