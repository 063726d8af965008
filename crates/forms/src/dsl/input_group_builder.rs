//! DSL builder for one input group

use crate::elements::{FieldElement, InputGroup, OptionsProducer, SelectOption};
use crate::resource::Resource;
use crate::validator::Validator;
use std::sync::Arc;
use tabula_core::PanelResult;

// ============================================================================
// InputGroupBuilder
// ============================================================================

/// Scoped builder for one input group of the form document
///
/// Created by [`FormBuilder::input_group`](crate::dsl::FormBuilder::input_group)
/// after the (still empty) group has been appended to the document. Each
/// field call resolves the column against the resource's catalog first and
/// fails without mutating anything when the column is unknown.
pub struct InputGroupBuilder<'a> {
    resource: &'a mut Resource,

    /// Document index of the group under construction
    group: usize,
}

impl<'a> InputGroupBuilder<'a> {
    pub(crate) fn new(resource: &'a mut Resource, group: usize) -> Self {
        Self { resource, group }
    }

    /// Add a plain input field for the given column
    ///
    /// Registers the column as editable with no validator, overwriting any
    /// validator a prior registration attached. Repeated calls for the same
    /// column append duplicate fields to the group; only the editable
    /// registration is deduplicated.
    pub fn input(&mut self, column: &str) -> PanelResult<&mut Self> {
        let column_type = self.resource.column_type(column)?;
        self.group_mut().add_field(FieldElement::PlainInput {
            column: column.to_string(),
            column_type,
        });
        self.resource.add_editable_column(column, None);
        Ok(self)
    }

    /// Add a plain input field for the given column, with a validator
    ///
    /// The validator runs when user input is submitted, and may transform
    /// (e.g. hash) the value before it is persisted. This is the sole
    /// mechanism for attaching server-side validation to a column.
    pub fn input_with(&mut self, column: &str, validator: Validator) -> PanelResult<&mut Self> {
        let column_type = self.resource.column_type(column)?;
        self.group_mut().add_field(FieldElement::PlainInput {
            column: column.to_string(),
            column_type,
        });
        self.resource.add_editable_column(column, Some(validator));
        Ok(self)
    }

    /// Add a select field for the given column
    ///
    /// The producer is stored un-invoked and queried for the option list on
    /// each render. A select call does not register the column as editable:
    /// declare editability separately via [`input`](Self::input) if
    /// submission handling is desired.
    pub fn select<F>(&mut self, column: &str, options: F) -> PanelResult<&mut Self>
    where
        F: Fn() -> Vec<SelectOption> + Send + Sync + 'static,
    {
        let column_type = self.resource.column_type(column)?;
        let options: OptionsProducer = Arc::new(options);
        self.group_mut().add_field(FieldElement::SelectInput {
            column: column.to_string(),
            column_type,
            options,
        });
        Ok(self)
    }

    fn group_mut(&mut self) -> &mut InputGroup {
        self.resource.input_group_mut(self.group)
    }
}

// ============================================================================
// Tests
// ============================================================================
