use entity_exist_api::prelude::{
    Constraint, EntityExist, ExecutionContext, ExistError, ExistResult, Repository, Value,
    Violation,
};

use super::ConstraintValidator;

/// Validator for the [`EntityExist`] constraint.
///
/// Checks that the value identifies a record of the constraint's entity, looking it up by the
/// constraint's property in the [`Repository`] the validator was created with.
///
/// Blank values ([`Value::Null`] and empty text) always pass; requiring a value is up to
/// another constraint.
///
/// # Example
///
/// ```rust
/// use entity_exist::prelude::*;
///
/// struct Users;
///
/// impl Repository for Users {
///     type Record = &'static str;
///
///     fn find_one(
///         &self,
///         entity: &str,
///         property: &str,
///         value: &Value,
///     ) -> RepositoryResult<Option<Self::Record>> {
///         let found = entity == "User" && property == "uuid" && value == &Value::from("foobar");
///         Ok(found.then_some("my_user"))
///     }
/// }
///
/// let validator = EntityExistValidator::new(Users);
/// let constraint = EntityExist::for_entity("User").with_property("uuid");
/// let mut violations = Violations::new();
///
/// validator.validate(&Value::from("foobar"), &constraint, &mut violations).unwrap();
/// assert!(violations.is_empty());
///
/// validator.validate(&Value::from("barfoo"), &constraint, &mut violations).unwrap();
/// assert_eq!(violations.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EntityExistValidator<R>
where
    R: Repository,
{
    repository: R,
}

impl<R> EntityExistValidator<R>
where
    R: Repository,
{
    /// Creates a new [`EntityExistValidator`] looking records up in `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The repository records are looked up in.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates `value` against an [`EntityExist`] constraint known at compile time.
    ///
    /// Same as [`ConstraintValidator::validate`], without the constraint type check.
    pub fn validate_entity_exist(
        &self,
        value: &Value,
        constraint: &EntityExist,
        context: &mut dyn ExecutionContext,
    ) -> ExistResult<()> {
        if skip_blank(value) {
            return Ok(());
        }

        let Some(entity) = constraint.entity().filter(|entity| !entity.is_empty()) else {
            tracing::error!("EntityExist constraint has no entity set");
            return Err(ExistError::MissingEntity);
        };
        let property = constraint.property();

        tracing::trace!("looking up {entity} by {property} = {value}");
        if self.repository.find_one(entity, property, value)?.is_some() {
            return Ok(());
        }

        tracing::debug!("no {entity} found with {property} = {value}");
        context.add_violation(
            Violation::builder(constraint.message())
                .parameter("%entity%", entity)
                .parameter("%property%", property)
                .parameter("%value%", value.to_string())
                .invalid_value(value.clone())
                .constraint(constraint.name())
                .build(),
        );

        Ok(())
    }
}

impl<R> ConstraintValidator for EntityExistValidator<R>
where
    R: Repository,
{
    fn validate(
        &self,
        value: &Value,
        constraint: &dyn Constraint,
        context: &mut dyn ExecutionContext,
    ) -> ExistResult<()> {
        // blank values pass whatever the constraint is, so this runs before the downcast
        if skip_blank(value) {
            return Ok(());
        }

        let Some(entity_exist) = constraint.as_any().downcast_ref::<EntityExist>() else {
            tracing::error!(
                "EntityExistValidator called with {} constraint",
                constraint.name()
            );
            return Err(ExistError::UnexpectedConstraint {
                expected: "EntityExist".to_string(),
                found: constraint.name().to_string(),
            });
        };

        self.validate_entity_exist(value, entity_exist, context)
    }
}

/// Whether `value` is blank and the check must be skipped.
fn skip_blank(value: &Value) -> bool {
    let blank = value.is_blank();
    if blank {
        tracing::debug!("skipping EntityExist check for blank value");
    }
    blank
}
