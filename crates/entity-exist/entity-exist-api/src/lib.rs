#![crate_name = "entity_exist_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # EntityExist API
//!
//! This crate exposes all the types shared between a validation host and the `entity-exist`
//! validator.
//!
//! You can import all the useful types and traits by using the prelude module:
//!
//! ```rust
//! use entity_exist_api::prelude::*;
//! ```
//!
//! ## Types
//!
//! ### Constraint
//!
//! - [`Constraint`](crate::prelude::Constraint)
//! - [`EntityExist`](crate::prelude::EntityExist)
//! - [`EntityExistOptions`](crate::prelude::EntityExistOptions)
//!
//! ### Error
//!
//! - [`ExistError`](crate::prelude::ExistError)
//! - [`ExistResult`](crate::prelude::ExistResult)
//!
//! ### Repository
//!
//! - [`Repository`](crate::prelude::Repository)
//! - [`RepositoryError`](crate::prelude::RepositoryError)
//! - [`RepositoryResult`](crate::prelude::RepositoryResult)
//!
//! ### Value
//!
//! - [`Value`](crate::prelude::Value)
//!
//! ### Violation
//!
//! - [`ExecutionContext`](crate::prelude::ExecutionContext)
//! - [`Violation`](crate::prelude::Violation)
//! - [`ViolationBuilder`](crate::prelude::ViolationBuilder)
//! - [`Violations`](crate::prelude::Violations)
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod constraint;
mod error;
pub mod prelude;
mod repository;
mod value;
mod violation;
