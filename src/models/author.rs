use crate::accessor::Accessor;
use crate::error::Result;
use crate::xml::AttributeMap;

use super::{AuthorSubject, CategoryRef, record};

/// An `AuthorData` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Author<'a> {
    data: Accessor<'a>,
}

record!(Author);

impl<'a> Author<'a> {
    /// The `person_id` attribute
    pub fn author_id(&self) -> Option<String> {
        self.data.attribute("person_id")
    }

    pub fn name(&self) -> Result<Option<String>> {
        self.data.single_child_text("Name")
    }

    pub fn details(&self) -> Result<Option<AttributeMap>> {
        self.data.child_attributes("Details")
    }

    pub fn categories(&self) -> Result<impl Iterator<Item = Result<CategoryRef>> + use<'a>> {
        Ok(self
            .data
            .child_group("Categories")?
            .map(CategoryRef::from_element))
    }

    pub fn subjects(&self) -> Result<impl Iterator<Item = Result<AuthorSubject>> + use<'a>> {
        Ok(self
            .data
            .child_group("Subjects")?
            .map(AuthorSubject::from_element))
    }
}
