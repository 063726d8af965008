//! Resource definitions
//!
//! This module contains the `Resource` struct: the admin-facing
//! representation of one data table, bundling its column catalog, the
//! editable-column/validator registry, and the form document.
//!
//! A resource is mutated only during the single-threaded setup phase,
//! through the builder DSL that borrows it mutably. Once setup finishes and
//! the resource is shared (typically behind an `Arc`), the borrow checker
//! guarantees the document and registry stay frozen for the request-serving
//! phase.

use crate::dsl::FormBuilder;
use crate::elements::{FormSection, InputGroup};
use crate::validator::{ValidationFailure, Validator};
use std::collections::{HashMap, HashSet};
use tabula_core::{ColumnDefinition, ColumnType, PanelError, PanelResult};
use tracing::debug;

// ============================================================================
// Resource
// ============================================================================

/// The admin-facing representation of one data table
pub struct Resource {
    /// Display name of the underlying table, used in error messages
    table_name: String,

    /// Ordered column catalog, immutable after construction
    columns: Vec<ColumnDefinition>,

    /// Editable columns with their optional validators; last registration
    /// for a column wins
    editable_columns: HashMap<String, Option<Validator>>,

    /// Ordered form document, append-only during setup
    form_document: Vec<FormSection>,

    /// Ordered column names shown on the list page
    index_columns: Vec<String>,
}

impl Resource {
    /// Create a new resource from the table's column catalog
    ///
    /// Fails when the catalog contains two columns with the same name.
    pub fn new(
        table_name: impl Into<String>,
        columns: Vec<ColumnDefinition>,
    ) -> PanelResult<Self> {
        let table_name = table_name.into();

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(PanelError::duplicate_column(&column.name, &table_name));
            }
        }

        Ok(Self {
            table_name,
            columns,
            editable_columns: HashMap::new(),
            form_document: Vec::new(),
            index_columns: Vec::new(),
        })
    }

    // ========================================================================
    // Catalog access
    // ========================================================================

    /// Get the display name of the underlying table
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the ordered column catalog
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Get the names of the table's primary key columns, in catalog order
    pub fn key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.key_column)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Check if the catalog contains a column with the given name
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.name == column)
    }

    /// Resolve a column name to its declared type
    ///
    /// This is the single gate every field-adding operation passes through:
    /// it guarantees no form field can ever reference a non-existent column,
    /// catching integrator mistakes at setup time rather than at render or
    /// submit time. Matching is exact and case-sensitive.
    pub fn column_type(&self, column: &str) -> PanelResult<ColumnType> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.column_type)
            .ok_or_else(|| PanelError::unknown_column(column, &self.table_name))
    }

    // ========================================================================
    // Form composition
    // ========================================================================

    /// Compose this resource's form document through the builder DSL
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// resource.build_form(|form| {
    ///     form.input_group("Account", |group| {
    ///         group.input("email")?.input("name")?;
    ///         Ok(())
    ///     })?
    ///     .actions();
    ///     Ok(())
    /// })?;
    /// ```
    pub fn build_form(
        &mut self,
        compose: impl FnOnce(&mut FormBuilder<'_>) -> PanelResult<()>,
    ) -> PanelResult<()> {
        let mut builder = FormBuilder::new(self);
        compose(&mut builder)
    }

    /// Get the ordered form document for rendering
    pub fn form_document(&self) -> &[FormSection] {
        &self.form_document
    }

    /// Append a section to the form document, returning its index
    pub(crate) fn push_section(&mut self, section: FormSection) -> usize {
        debug!(table = %self.table_name, sections = self.form_document.len() + 1, "appending form section");
        self.form_document.push(section);
        self.form_document.len() - 1
    }

    /// Get mutable access to the input group at the given document index
    pub(crate) fn input_group_mut(&mut self, index: usize) -> &mut InputGroup {
        match self.form_document.get_mut(index) {
            Some(FormSection::InputGroup(group)) => group,
            _ => unreachable!("form section {index} is not an input group"),
        }
    }

    // ========================================================================
    // Editable columns
    // ========================================================================

    /// Register a column as editable, with an optional validator
    ///
    /// A later registration for the same column overwrites the validator.
    pub(crate) fn add_editable_column(&mut self, column: &str, validator: Option<Validator>) {
        debug!(table = %self.table_name, column, has_validator = validator.is_some(), "registering editable column");
        self.editable_columns
            .insert(column.to_string(), validator);
    }

    /// Iterate over the names of all editable columns
    ///
    /// Registration order is not preserved; callers needing a stable order
    /// should follow the catalog.
    pub fn editable_columns(&self) -> impl Iterator<Item = &str> {
        self.editable_columns.keys().map(String::as_str)
    }

    /// Check if a column may be written from submitted form data
    pub fn is_editable(&self, column: &str) -> bool {
        self.editable_columns.contains_key(column)
    }

    /// Get the validator registered for a column, if any
    pub fn validator_for(&self, column: &str) -> Option<&Validator> {
        self.editable_columns.get(column).and_then(Option::as_ref)
    }

    /// Run a column's validator over a raw submitted value
    ///
    /// Editable columns without a validator accept the value unchanged.
    /// Whether the column is editable at all is the submission handler's
    /// check, made through [`Resource::is_editable`].
    pub fn validate_submission(
        &self,
        column: &str,
        raw: &str,
    ) -> Result<String, ValidationFailure> {
        match self.validator_for(column) {
            Some(validate) => validate(raw),
            None => Ok(raw.to_string()),
        }
    }

    // ========================================================================
    // List page columns
    // ========================================================================

    /// Add a column to the list page, in call order
    ///
    /// Passes through the same unknown-column gate as the form DSL.
    pub fn add_index_column(&mut self, column: &str) -> PanelResult<&mut Self> {
        self.column_type(column)?;
        debug!(table = %self.table_name, column, "adding index column");
        self.index_columns.push(column.to_string());
        Ok(self)
    }

    /// Get the ordered column names shown on the list page
    pub fn index_columns(&self) -> &[String] {
        &self.index_columns
    }
}

// Validators are opaque closures, so Debug is written by hand.
impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut editable: Vec<&str> = self.editable_columns().collect();
        editable.sort_unstable();
        f.debug_struct("Resource")
            .field("table_name", &self.table_name)
            .field("columns", &self.columns)
            .field("editable_columns", &editable)
            .field("form_document", &self.form_document)
            .field("index_columns", &self.index_columns)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validator;
    use pretty_assertions::assert_eq;

    fn user_resource() -> Resource {
        Resource::new(
            "users",
            vec![
                ColumnDefinition::key("id", ColumnType::Integer),
                ColumnDefinition::new("email", ColumnType::Varchar),
                ColumnDefinition::new("active", ColumnType::Bool),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let err = Resource::new(
            "users",
            vec![
                ColumnDefinition::new("email", ColumnType::Varchar),
                ColumnDefinition::new("email", ColumnType::Text),
            ],
        )
        .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Duplicate column 'email' in catalog for table 'users'"
        );
    }

    #[test]
    fn test_column_type_resolution_is_stable() {
        let resource = user_resource();
        for _ in 0..3 {
            assert_eq!(
                resource.column_type("email").unwrap(),
                ColumnType::Varchar
            );
            assert_eq!(resource.column_type("active").unwrap(), ColumnType::Bool);
        }
    }

    #[test]
    fn test_column_type_unknown_column() {
        let resource = user_resource();
        let err = resource.column_type("missing").unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Column 'missing' not found for table 'users'"
        );
    }

    #[test]
    fn test_column_type_is_case_sensitive() {
        let resource = user_resource();
        assert!(resource.column_type("Email").is_err());
    }

    #[test]
    fn test_key_columns() {
        let resource = user_resource();
        assert_eq!(resource.key_columns(), vec!["id"]);
    }

    #[test]
    fn test_editable_column_registration_last_wins() {
        let mut resource = user_resource();
        resource.add_editable_column("email", Some(validator(|_| Ok("first".to_string()))));
        resource.add_editable_column("email", Some(validator(|_| Ok("second".to_string()))));

        assert_eq!(resource.editable_columns().count(), 1);
        let validate = resource.validator_for("email").unwrap();
        assert_eq!(validate("x"), Ok("second".to_string()));
    }

    #[test]
    fn test_validate_submission_without_validator_is_identity() {
        let mut resource = user_resource();
        resource.add_editable_column("email", None);

        assert!(resource.is_editable("email"));
        assert!(resource.validator_for("email").is_none());
        assert_eq!(
            resource.validate_submission("email", "a@b.example"),
            Ok("a@b.example".to_string())
        );
    }

    #[test]
    fn test_validate_submission_runs_validator() {
        let mut resource = user_resource();
        resource.add_editable_column(
            "email",
            Some(validator(|raw| {
                if raw.contains('@') {
                    Ok(raw.to_ascii_lowercase())
                } else {
                    Err(ValidationFailure::new("Invalid email"))
                }
            })),
        );

        assert_eq!(
            resource.validate_submission("email", "A@B.example"),
            Ok("a@b.example".to_string())
        );
        assert_eq!(
            resource.validate_submission("email", "nope").unwrap_err().message,
            "Invalid email"
        );
    }

    #[test]
    fn test_add_index_column_gates_on_catalog() {
        let mut resource = user_resource();
        resource.add_index_column("id").unwrap();
        resource.add_index_column("email").unwrap();
        assert_eq!(resource.index_columns(), &["id", "email"]);

        assert!(resource.add_index_column("missing").is_err());
        assert_eq!(resource.index_columns().len(), 2);
    }
}
