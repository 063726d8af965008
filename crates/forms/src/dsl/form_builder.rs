//! Top-level DSL builder for a resource's form document

use crate::dsl::InputGroupBuilder;
use crate::elements::{FormSection, InputGroup};
use crate::resource::Resource;
use tabula_core::PanelResult;

// ============================================================================
// FormBuilder
// ============================================================================

/// Top-level composition API for a resource's form document
///
/// Sections appear in the rendered form in exactly the order the builder
/// methods are called; the document carries no independent sort key. The
/// builder holds the only mutable borrow of the resource for the duration
/// of setup, so no form can be composed from two places at once.
pub struct FormBuilder<'a> {
    resource: &'a mut Resource,
}

impl<'a> FormBuilder<'a> {
    /// Create a form builder for the given resource
    pub fn new(resource: &'a mut Resource) -> Self {
        Self { resource }
    }

    /// Append an input group with the given header and populate it
    ///
    /// The empty group is appended to the document before `populate` runs,
    /// so when population fails partway the fields declared before the
    /// failure stay visible in the document. Failures from `populate`
    /// (typically an unknown column) propagate to the caller.
    pub fn input_group(
        &mut self,
        header: impl Into<String>,
        populate: impl FnOnce(&mut InputGroupBuilder<'_>) -> PanelResult<()>,
    ) -> PanelResult<&mut Self> {
        let index = self
            .resource
            .push_section(FormSection::InputGroup(InputGroup::new(header)));
        let mut builder = InputGroupBuilder::new(self.resource, index);
        populate(&mut builder)?;
        Ok(self)
    }

    /// Append a static text paragraph
    pub fn paragraph(&mut self, content: impl Into<String>) -> &mut Self {
        self.resource
            .push_section(FormSection::Paragraph(content.into()));
        self
    }

    /// Append a submit/cancel action bar
    ///
    /// May be called more than once; each call appends another action bar.
    pub fn actions(&mut self) -> &mut Self {
        self.resource.push_section(FormSection::ActionBar);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
