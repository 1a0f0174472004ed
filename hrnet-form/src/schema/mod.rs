//! Declarative validation schema
//!
//! A schema is a mapping from field to an ordered chain of predicate+code
//! rules, evaluated first-failure-wins per field. All fields are checked
//! independently; one field's failure never short-circuits another's chain.

mod employee;
mod rule;

pub use employee::{seal, validate};
pub use rule::{first_failure, Rule};
