//! Re-exports all the most commonly used items from this crate.

pub use entity_exist_api::prelude::*;

pub use crate::validation::{ConstraintValidator, EntityExistValidator};
