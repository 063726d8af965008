//! Core column types used throughout Tabula
//!
//! This module contains the fundamental schema-facing types shared by the
//! column catalog, the form DSL, and the rendering collaborators.

use serde::{Deserialize, Serialize};

// ============================================================================
// ColumnType
// ============================================================================

/// The type of a database column, as exposed to form fields and renderers
///
/// This is a closed set: the catalog, the field factory, and the rendering
/// layer all match exhaustively over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole number column (int, bigint, serial, ...)
    Integer,
    /// Floating point column (real, double, numeric, ...)
    Float,
    /// Boolean column
    Bool,
    /// Bounded string column (varchar, char)
    Varchar,
    /// Unbounded string column (text, clob)
    Text,
    /// Calendar date without a time component
    Date,
    /// Date and time column (timestamp, datetime)
    DateTime,
    /// UUID column
    Uuid,
}

impl ColumnType {
    /// Map a SQL type name (as reported by the schema layer) to a column type
    ///
    /// Matching is case-insensitive and ignores any parenthesized length or
    /// precision suffix, so `VARCHAR(255)` resolves the same as `varchar`.
    /// Returns `None` for type names this core does not support.
    pub fn from_sql_type(sql_type: &str) -> Option<Self> {
        let name = sql_type
            .split('(')
            .next()
            .unwrap_or(sql_type)
            .trim()
            .to_ascii_lowercase();

        match name.as_str() {
            "int" | "integer" | "smallint" | "bigint" | "serial" | "bigserial" | "int2"
            | "int4" | "int8" => Some(ColumnType::Integer),
            "float" | "real" | "double" | "double precision" | "numeric" | "decimal" => {
                Some(ColumnType::Float)
            }
            "bool" | "boolean" => Some(ColumnType::Bool),
            "varchar" | "character varying" | "char" | "character" => Some(ColumnType::Varchar),
            "text" | "clob" => Some(ColumnType::Text),
            "date" => Some(ColumnType::Date),
            "timestamp" | "timestamptz" | "timestamp with time zone" | "datetime" => {
                Some(ColumnType::DateTime)
            }
            "uuid" => Some(ColumnType::Uuid),
            _ => None,
        }
    }

    /// Get the HTML input type attribute a renderer would use for this column
    pub fn html_input_type(&self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Float => "number",
            ColumnType::Bool => "checkbox",
            ColumnType::Varchar | ColumnType::Text | ColumnType::Uuid => "text",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime-local",
        }
    }

    /// Check if this is a numeric column type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Check if this is a date or date-time column type
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::Varchar => "varchar",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Uuid => "uuid",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// ColumnDefinition
// ============================================================================

/// A single column of a resource's catalog
///
/// Column definitions are established once, when the resource is constructed
/// from the underlying table schema, and are immutable afterwards. Names are
/// unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name as it appears in the table schema
    pub name: String,

    /// Resolved column type
    pub column_type: ColumnType,

    /// Whether this column is part of the table's primary key
    pub key_column: bool,
}

impl ColumnDefinition {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            key_column: false,
        }
    }

    /// Create a new primary key column definition
    pub fn key(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            key_column: true,
        }
    }

    /// Create a column definition from a SQL type name reported by the schema layer
    ///
    /// Fails with a schema error when the SQL type is not supported.
    pub fn from_sql(
        name: impl Into<String>,
        sql_type: &str,
        key_column: bool,
    ) -> crate::error::PanelResult<Self> {
        let name = name.into();
        let column_type = ColumnType::from_sql_type(sql_type).ok_or_else(|| {
            crate::error::PanelError::unsupported_column_type(name.as_str(), sql_type)
        })?;

        Ok(Self {
            name,
            column_type,
            key_column,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_sql_type_common_names() {
        assert_eq!(ColumnType::from_sql_type("integer"), Some(ColumnType::Integer));
        assert_eq!(ColumnType::from_sql_type("bigint"), Some(ColumnType::Integer));
        assert_eq!(ColumnType::from_sql_type("boolean"), Some(ColumnType::Bool));
        assert_eq!(ColumnType::from_sql_type("text"), Some(ColumnType::Text));
        assert_eq!(ColumnType::from_sql_type("date"), Some(ColumnType::Date));
        assert_eq!(
            ColumnType::from_sql_type("timestamp"),
            Some(ColumnType::DateTime)
        );
        assert_eq!(ColumnType::from_sql_type("uuid"), Some(ColumnType::Uuid));
    }

    #[test]
    fn test_from_sql_type_case_and_length() {
        assert_eq!(
            ColumnType::from_sql_type("VARCHAR(255)"),
            Some(ColumnType::Varchar)
        );
        assert_eq!(
            ColumnType::from_sql_type("Numeric(10, 2)"),
            Some(ColumnType::Float)
        );
        assert_eq!(ColumnType::from_sql_type("TEXT"), Some(ColumnType::Text));
    }

    #[test]
    fn test_from_sql_type_unsupported() {
        assert_eq!(ColumnType::from_sql_type("geometry"), None);
        assert_eq!(ColumnType::from_sql_type(""), None);
    }

    #[test]
    fn test_html_input_type() {
        assert_eq!(ColumnType::Integer.html_input_type(), "number");
        assert_eq!(ColumnType::Bool.html_input_type(), "checkbox");
        assert_eq!(ColumnType::Varchar.html_input_type(), "text");
        assert_eq!(ColumnType::DateTime.html_input_type(), "datetime-local");
    }

    #[test]
    fn test_type_predicates() {
        assert!(ColumnType::Integer.is_numeric());
        assert!(ColumnType::Float.is_numeric());
        assert!(!ColumnType::Text.is_numeric());

        assert!(ColumnType::Date.is_temporal());
        assert!(ColumnType::DateTime.is_temporal());
        assert!(!ColumnType::Uuid.is_temporal());
    }

    #[test]
    fn test_column_type_serde_snake_case() {
        let json = serde_json::to_string(&ColumnType::DateTime).unwrap();
        assert_eq!(json, "\"date_time\"");

        let back: ColumnType = serde_json::from_str("\"varchar\"").unwrap();
        assert_eq!(back, ColumnType::Varchar);
    }

    #[test]
    fn test_column_definition_new() {
        let column = ColumnDefinition::new("email", ColumnType::Varchar);
        assert_eq!(column.name, "email");
        assert_eq!(column.column_type, ColumnType::Varchar);
        assert!(!column.key_column);

        let key = ColumnDefinition::key("id", ColumnType::Integer);
        assert!(key.key_column);
    }

    #[test]
    fn test_column_definition_from_sql() {
        let column = ColumnDefinition::from_sql("age", "INT", false).unwrap();
        assert_eq!(column.column_type, ColumnType::Integer);

        let err = ColumnDefinition::from_sql("shape", "geometry", false).unwrap_err();
        assert!(err.to_string().contains("geometry"));
    }
}
