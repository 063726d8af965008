//! Error types for Tabula
//!
//! This module provides unified error handling for the resource/form core.
//! Configuration errors are raised synchronously at setup time and must
//! propagate out of the builder call chain to the integrator.

use thiserror::Error;

/// The main error type for the Tabula core
#[derive(Debug, Error)]
pub enum PanelError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A builder call referenced a column absent from the resource's catalog
    #[error("Column '{column}' not found for table '{table}'")]
    UnknownColumn { column: String, table: String },

    /// A catalog was constructed with two columns sharing the same name
    #[error("Duplicate column '{column}' in catalog for table '{table}'")]
    DuplicateColumn { column: String, table: String },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// The schema layer reported a SQL type this core cannot represent
    #[error("Column '{column}' has unsupported SQL type '{sql_type}'")]
    UnsupportedColumnType { column: String, sql_type: String },
}

impl PanelError {
    /// Create an unknown-column configuration error
    pub fn unknown_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        PanelError::UnknownColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    /// Create a duplicate-column configuration error
    pub fn duplicate_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        PanelError::DuplicateColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    /// Create an unsupported-column-type schema error
    pub fn unsupported_column_type(
        column: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> Self {
        PanelError::UnsupportedColumnType {
            column: column.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Check if this error is a configuration error (integrator mistake)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PanelError::UnknownColumn { .. } | PanelError::DuplicateColumn { .. }
        )
    }

    /// Check if this error originated in the schema layer
    pub fn is_schema(&self) -> bool {
        matches!(self, PanelError::UnsupportedColumnType { .. })
    }
}

/// Result type alias using PanelError
pub type PanelResult<T> = Result<T, PanelError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_column_error() {
        let err = PanelError::unknown_column("email", "users");
        assert!(err.is_configuration());
        assert!(!err.is_schema());
        assert_eq!(err.to_string(), "Column 'email' not found for table 'users'");
    }

    #[test]
    fn test_duplicate_column_error() {
        let err = PanelError::duplicate_column("id", "orders");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Duplicate column 'id' in catalog for table 'orders'"
        );
    }

    #[test]
    fn test_unsupported_column_type_error() {
        let err = PanelError::unsupported_column_type("shape", "geometry");
        assert!(err.is_schema());
        assert!(!err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Column 'shape' has unsupported SQL type 'geometry'"
        );
    }
}
