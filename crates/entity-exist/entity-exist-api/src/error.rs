use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

/// EntityExist Error type
///
/// None of these is a validation failure: a value which doesn't resolve to a record is reported
/// as a [`crate::prelude::Violation`] instead.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ExistError {
    #[error("You can only pass {expected} constraint to this validator, got {found}")]
    UnexpectedConstraint { expected: String, found: String },
    #[error("Must set \"entity\" on \"EntityExist\" validator")]
    MissingEntity,
    #[error("Metadata error: {0}")]
    Metadata(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ExistError {
    /// Whether the error was caused by the integrating code rather than by the data-access layer.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, ExistError::Repository(_))
    }
}

impl From<serde_json::Error> for ExistError {
    fn from(err: serde_json::Error) -> Self {
        ExistError::Metadata(err.to_string())
    }
}

/// EntityExist Result type
pub type ExistResult<T> = Result<T, ExistError>;

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_should_display_unexpected_constraint_error() {
        let error = ExistError::UnexpectedConstraint {
            expected: "EntityExist".to_string(),
            found: "NotNull".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "You can only pass EntityExist constraint to this validator, got NotNull"
        );
    }

    #[test]
    fn test_should_display_missing_entity_error() {
        let error = ExistError::MissingEntity;
        assert_eq!(
            error.to_string(),
            "Must set \"entity\" on \"EntityExist\" validator"
        );
    }

    #[test]
    fn test_should_display_repository_error() {
        let error = ExistError::Repository(RepositoryError::UnknownEntity("User".to_string()));
        assert_eq!(error.to_string(), "Repository error: Unknown entity: User");
    }

    #[test]
    fn test_should_convert_from_repository_error() {
        let error: ExistError = RepositoryError::Backend("connection reset".to_string()).into();
        assert!(matches!(
            error,
            ExistError::Repository(RepositoryError::Backend(_))
        ));
    }

    #[test]
    fn test_should_convert_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ExistError = json_err.into();
        assert!(matches!(error, ExistError::Metadata(_)));
    }

    #[test]
    fn test_should_tell_configuration_errors() {
        assert!(ExistError::MissingEntity.is_configuration_error());
        assert!(
            ExistError::UnexpectedConstraint {
                expected: "EntityExist".to_string(),
                found: "NotNull".to_string(),
            }
            .is_configuration_error()
        );
        assert!(ExistError::Metadata("bad".to_string()).is_configuration_error());
        assert!(
            !ExistError::Repository(RepositoryError::Backend("down".to_string()))
                .is_configuration_error()
        );
    }
}
