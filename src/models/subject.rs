use crate::accessor::Accessor;
use crate::error::Result;
use crate::xml::AttributeMap;

use super::{CategoryRef, record};

/// A `SubjectData` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subject<'a> {
    data: Accessor<'a>,
}

record!(Subject);

impl<'a> Subject<'a> {
    pub fn subject_id(&self) -> Option<String> {
        self.data.attribute("subject_id")
    }

    pub fn book_count(&self) -> Option<String> {
        self.data.attribute("book_count")
    }

    pub fn marc_field(&self) -> Option<String> {
        self.data.attribute("marc_field")
    }

    /// The two MARC indicators, in order
    pub fn marc_indicators(&self) -> (Option<String>, Option<String>) {
        (
            self.data.attribute("marc_indicator_1"),
            self.data.attribute("marc_indicator_2"),
        )
    }

    pub fn name(&self) -> Result<Option<String>> {
        self.data.single_child_text("Name")
    }

    pub fn categories(&self) -> Result<impl Iterator<Item = Result<CategoryRef>> + use<'a>> {
        Ok(self
            .data
            .child_group("Categories")?
            .map(CategoryRef::from_element))
    }

    /// Entries of `SubjectStructure`, requested with the `structure` result shape
    pub fn structure(&self) -> Result<impl Iterator<Item = AttributeMap> + use<'a>> {
        Ok(self
            .data
            .child_group("SubjectStructure")?
            .map(|entry| entry.attribute_map()))
    }
}
