//! # Tabula Core
//!
//! Core types and error handling for Tabula, the declarative admin-panel
//! core for database tables.
//!
//! This crate provides the foundational building blocks shared by the
//! resource/form layer and its collaborators:
//!
//! - **Types**: `ColumnType` and `ColumnDefinition`, the schema-facing
//!   vocabulary of a resource's column catalog
//! - **Errors**: Unified error handling with `PanelError` and `PanelResult`
//!

pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PanelError, PanelResult};
pub use types::{ColumnDefinition, ColumnType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
