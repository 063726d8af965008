//! Form document elements
//!
//! This module contains the section and field variants that make up a
//! resource's form document. The document itself is an ordered sequence of
//! `FormSection` values; rendering is left to an external collaborator that
//! matches exhaustively over the variants.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabula_core::ColumnType;

// ============================================================================
// SelectOption
// ============================================================================

/// One entry of a select field's option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Internal value submitted back to the server
    pub value: String,

    /// Human-friendly label shown to the user
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// OptionsProducer
// ============================================================================

/// Producer of a select field's option list
///
/// Invoked lazily, once per render request, and never memoized: each call
/// must return a freshly computed list. Render requests may run
/// concurrently after setup, so the producer must be safe to call
/// repeatedly from multiple threads.
pub type OptionsProducer = Arc<dyn Fn() -> Vec<SelectOption> + Send + Sync>;

// ============================================================================
// FieldElement
// ============================================================================

/// A single editable element within an input group
#[derive(Clone)]
pub enum FieldElement {
    /// Plain input bound to a column
    PlainInput {
        /// Name of the bound column
        column: String,
        /// Type of the bound column
        column_type: ColumnType,
    },

    /// Select input bound to a column, with lazily produced options
    SelectInput {
        /// Name of the bound column
        column: String,
        /// Type of the bound column
        column_type: ColumnType,
        /// Producer queried for the option list on each render
        options: OptionsProducer,
    },
}

impl FieldElement {
    /// Get the name of the column this field is bound to
    pub fn column(&self) -> &str {
        match self {
            FieldElement::PlainInput { column, .. } => column,
            FieldElement::SelectInput { column, .. } => column,
        }
    }

    /// Get the type of the column this field is bound to
    pub fn column_type(&self) -> ColumnType {
        match self {
            FieldElement::PlainInput { column_type, .. } => *column_type,
            FieldElement::SelectInput { column_type, .. } => *column_type,
        }
    }

    /// Check if this is a select field
    pub fn is_select(&self) -> bool {
        matches!(self, FieldElement::SelectInput { .. })
    }

    /// Invoke the options producer of a select field
    ///
    /// Returns `None` for plain inputs. Each call re-executes the producer;
    /// results are never cached.
    pub fn select_options(&self) -> Option<Vec<SelectOption>> {
        match self {
            FieldElement::PlainInput { .. } => None,
            FieldElement::SelectInput { options, .. } => Some(options()),
        }
    }
}

// Options producers are opaque closures, so Debug is written by hand.
impl std::fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldElement::PlainInput {
                column,
                column_type,
            } => f
                .debug_struct("PlainInput")
                .field("column", column)
                .field("column_type", column_type)
                .finish(),
            FieldElement::SelectInput {
                column,
                column_type,
                ..
            } => f
                .debug_struct("SelectInput")
                .field("column", column)
                .field("column_type", column_type)
                .finish_non_exhaustive(),
        }
    }
}

// ============================================================================
// InputGroup
// ============================================================================

/// A titled cluster of fields within the form document
#[derive(Debug, Clone, Default)]
pub struct InputGroup {
    /// Optional header rendered above the group
    pub header: Option<String>,

    /// Fields in declaration order
    pub fields: Vec<FieldElement>,
}

impl InputGroup {
    /// Create a new empty input group with the given header
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            fields: Vec::new(),
        }
    }

    /// Append a field to the group
    pub fn add_field(&mut self, field: FieldElement) {
        self.fields.push(field);
    }

    /// Get the number of fields in the group
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

// ============================================================================
// FormSection
// ============================================================================

/// One section of a resource's form document
///
/// Sections appear in the rendered form in exactly the order they were
/// appended during setup; the document carries no independent sort key.
#[derive(Debug, Clone)]
pub enum FormSection {
    /// A titled group of input fields
    InputGroup(InputGroup),

    /// A static text paragraph
    Paragraph(String),

    /// The submit/cancel action bar
    ActionBar,
}

impl FormSection {
    /// Get the contained input group, if this section is one
    pub fn as_input_group(&self) -> Option<&InputGroup> {
        match self {
            FormSection::InputGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Check if this section is an action bar
    pub fn is_action_bar(&self) -> bool {
        matches!(self, FormSection::ActionBar)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_select_option_new() {
        let option = SelectOption::new("1", "Yes");
        assert_eq!(option.value, "1");
        assert_eq!(option.label, "Yes");
    }

    #[test]
    fn test_field_element_accessors() {
        let plain = FieldElement::PlainInput {
            column: "email".to_string(),
            column_type: ColumnType::Varchar,
        };
        assert_eq!(plain.column(), "email");
        assert_eq!(plain.column_type(), ColumnType::Varchar);
        assert!(!plain.is_select());
        assert!(plain.select_options().is_none());
    }

    #[test]
    fn test_select_options_computed_fresh_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let field = FieldElement::SelectInput {
            column: "active".to_string(),
            column_type: ColumnType::Bool,
            options: Arc::new(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                vec![SelectOption::new(n.to_string(), format!("call {}", n))]
            }),
        };

        let first = field.select_options().unwrap();
        let second = field.select_options().unwrap();
        assert_eq!(first, vec![SelectOption::new("0", "call 0")]);
        assert_eq!(second, vec![SelectOption::new("1", "call 1")]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_input_group_new() {
        let mut group = InputGroup::new("Account");
        assert_eq!(group.header.as_deref(), Some("Account"));
        assert_eq!(group.field_count(), 0);

        group.add_field(FieldElement::PlainInput {
            column: "name".to_string(),
            column_type: ColumnType::Text,
        });
        assert_eq!(group.field_count(), 1);
    }

    #[test]
    fn test_form_section_helpers() {
        let section = FormSection::InputGroup(InputGroup::new("Account"));
        assert!(section.as_input_group().is_some());
        assert!(!section.is_action_bar());

        assert!(FormSection::ActionBar.is_action_bar());
        assert!(FormSection::Paragraph("hi".to_string()).as_input_group().is_none());
    }
}
