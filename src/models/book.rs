use crate::accessor::Accessor;
use crate::error::Result;
use crate::xml::AttributeMap;

use super::{PersonRef, SubjectRef, record};

/// A `BookData` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Book<'a> {
    data: Accessor<'a>,
}

record!(Book);

impl<'a> Book<'a> {
    /// ISBNdb's own book identifier
    pub fn book_id(&self) -> Option<String> {
        self.data.attribute("book_id")
    }

    pub fn isbn(&self) -> Option<String> {
        self.data.attribute("isbn")
    }

    pub fn isbn13(&self) -> Option<String> {
        self.data.attribute("isbn13")
    }

    pub fn title(&self) -> Result<Option<String>> {
        self.data.single_child_text("Title")
    }

    pub fn title_long(&self) -> Result<Option<String>> {
        self.data.single_child_text("TitleLong")
    }

    pub fn authors_text(&self) -> Result<Option<String>> {
        self.data.single_child_text("AuthorsText")
    }

    /// Identifier carried as an attribute of `PublisherText`
    pub fn publisher_id(&self) -> Result<Option<String>> {
        self.data.child_attribute("PublisherText", "publisher_id")
    }

    pub fn publisher_text(&self) -> Result<Option<String>> {
        self.data.single_child_text("PublisherText")
    }

    /// All attributes of the `Details` element (dewey decimal, language, ...)
    pub fn details(&self) -> Result<Option<AttributeMap>> {
        self.data.child_attributes("Details")
    }

    pub fn summary(&self) -> Result<Option<String>> {
        self.data.single_child_text("Summary")
    }

    pub fn notes(&self) -> Result<Option<String>> {
        self.data.single_child_text("Notes")
    }

    pub fn urls_text(&self) -> Result<Option<String>> {
        self.data.single_child_text("UrlsText")
    }

    pub fn awards_text(&self) -> Result<Option<String>> {
        self.data.single_child_text("AwardsText")
    }

    /// People listed under `Authors`, requested with the `authors` result shape
    pub fn authors(&self) -> Result<impl Iterator<Item = Result<PersonRef>> + use<'a>> {
        Ok(self.data.child_group("Authors")?.map(PersonRef::from_element))
    }

    /// Store offers listed under `Prices`, one attribute map per store
    pub fn prices(&self) -> Result<impl Iterator<Item = AttributeMap> + use<'a>> {
        Ok(self
            .data
            .child_group("Prices")?
            .map(|price| price.attribute_map()))
    }

    pub fn subjects(&self) -> Result<impl Iterator<Item = Result<SubjectRef>> + use<'a>> {
        Ok(self
            .data
            .child_group("Subjects")?
            .map(SubjectRef::from_element))
    }

    /// Links to MARC records held by libraries
    pub fn marc_records(&self) -> Result<impl Iterator<Item = AttributeMap> + use<'a>> {
        Ok(self
            .data
            .child_group("MARCRecords")?
            .map(|marc| marc.attribute_map()))
    }
}
