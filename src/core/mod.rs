//! Core value types, contact validators and customer validation.
//!
//! Validation never panics and never fails with an `Err` for bad input:
//! single-field validators return a [`ValidationResult`], the customer
//! check returns an [`ErrorMap`].

mod builder;
mod contact;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use contact::*;
pub use error::*;
pub use types::*;
pub use validation::*;
