use crate::accessor::Accessor;
use crate::error::Result;
use crate::xml::AttributeMap;

use super::{CategoryRef, record};

/// A `PublisherData` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Publisher<'a> {
    data: Accessor<'a>,
}

record!(Publisher);

impl<'a> Publisher<'a> {
    pub fn publisher_id(&self) -> Option<String> {
        self.data.attribute("publisher_id")
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
}
