//! Builder DSL for composing a resource's form document
//!
//! The DSL borrows the resource mutably for the whole setup phase:
//! [`FormBuilder`] appends sections in call order, and hands integrator code
//! an [`InputGroupBuilder`] scoped to one group at a time. Every field call
//! passes through the resource's unknown-column gate before mutating
//! anything, so a typo in a column name fails the setup chain immediately.

pub mod form_builder;
pub mod input_group_builder;

pub use form_builder::FormBuilder;
pub use input_group_builder::InputGroupBuilder;
