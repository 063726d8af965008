//! # Tabula Forms
//!
//! Resource/field binding and form composition for Tabula. This crate sits
//! between a table's schema metadata and the rendering/submission layers:
//! it maps a resource's column catalog to typed input elements and
//! assembles them into an ordered, renderable form document.
//!
//! ## Core Concepts
//!
//! - **Resource**: the admin-facing representation of one data table,
//!   bundling its column catalog, editable-column registry, and form document
//! - **FormSection**: one section of the form document (input group,
//!   paragraph, or action bar), rendered in append order
//! - **FieldElement**: a typed input bound to a catalog column (plain input
//!   or select with lazily produced options)
//! - **Validator**: an opaque function run over submitted values before
//!   persistence, attached per column through the DSL
//! - **DSL**: `FormBuilder` and `InputGroupBuilder`, the fluent setup API
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{ColumnDefinition, ColumnType};
//! use tabula_forms::{Resource, SelectOption, validator::rules};
//!
//! # fn main() -> tabula_core::PanelResult<()> {
//! let mut resource = Resource::new(
//!     "users",
//!     vec![
//!         ColumnDefinition::key("id", ColumnType::Integer),
//!         ColumnDefinition::new("email", ColumnType::Varchar),
//!         ColumnDefinition::new("active", ColumnType::Bool),
//!     ],
//! )?;
//!
//! resource.build_form(|form| {
//!     form.paragraph("Account settings")
//!         .input_group("Account", |group| {
//!             group
//!                 .input_with("email", rules::not_empty())?
//!                 .select("active", || {
//!                     vec![
//!                         SelectOption::new("1", "Yes"),
//!                         SelectOption::new("0", "No"),
//!                     ]
//!                 })?;
//!             Ok(())
//!         })?
//!         .actions();
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod dsl;
pub mod elements;
pub mod resource;
pub mod validator;

// Re-export commonly used types at crate root
pub use dsl::{FormBuilder, InputGroupBuilder};
pub use elements::{FieldElement, FormSection, InputGroup, OptionsProducer, SelectOption};
pub use resource::Resource;
pub use validator::{ValidationFailure, Validator};

// Re-export core types that are commonly used with the form DSL
pub use tabula_core::{ColumnDefinition, ColumnType, PanelError, PanelResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        ColumnDefinition, ColumnType, FieldElement, FormBuilder, FormSection, InputGroup,
        InputGroupBuilder, PanelError, PanelResult, Resource, SelectOption, ValidationFailure,
        Validator,
    };
    pub use crate::validator::{rules, validator};
}
