use crate::accessor::Accessor;
use crate::error::Result;
use crate::xml::AttributeMap;

use super::record;

/// A `CategoryData` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category<'a> {
    data: Accessor<'a>,
}

record!(Category);

impl<'a> Category<'a> {
    pub fn category_id(&self) -> Option<String> {
        self.data.attribute("category_id")
    }

    /// Empty for top-level categories
    pub fn parent_id(&self) -> Option<String> {
        self.data.attribute("parent_id")
    }

    pub fn name(&self) -> Result<Option<String>> {
        self.data.single_child_text("Name")
    }

    /// `None` when the response carries no `Details` element
    pub fn details(&self) -> Result<Option<AttributeMap>> {
        self.data.child_attributes("Details")
    }

    pub fn subcategories(&self) -> Result<impl Iterator<Item = AttributeMap> + use<'a>> {
        Ok(self
            .data
            .child_group("SubCategories")?
            .map(|sub| sub.attribute_map()))
    }
}
