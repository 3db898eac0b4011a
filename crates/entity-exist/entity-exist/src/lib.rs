#![crate_name = "entity_exist"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # EntityExist
//!
//! A validation rule which checks that a value identifies an existing record in a data store.
//!
//! The rule is split in two parts:
//!
//! - the constraint, [`EntityExist`](crate::prelude::EntityExist), which says which entity to
//!   look the record up in, which property to match and which message to report;
//! - the validator, [`EntityExistValidator`](crate::prelude::EntityExistValidator), which runs
//!   the lookup against a [`Repository`](crate::prelude::Repository).
//!
//! ```rust
//! use entity_exist::prelude::*;
//!
//! struct NoUsers;
//!
//! impl Repository for NoUsers {
//!     type Record = ();
//!
//!     fn find_one(&self, _: &str, _: &str, _: &Value) -> RepositoryResult<Option<()>> {
//!         Ok(None)
//!     }
//! }
//!
//! let validator = EntityExistValidator::new(NoUsers);
//! let constraint = EntityExist::for_entity("User");
//! let mut violations = Violations::new();
//!
//! validator
//!     .validate(&Value::from(1u32), &constraint, &mut violations)
//!     .unwrap();
//!
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations.iter().next().unwrap().message,
//!     "Entity \"User\" with property \"id\": \"1\" does not exist."
//! );
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

pub mod prelude;
#[cfg(test)]
mod tests;
mod validation;
