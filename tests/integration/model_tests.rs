//! Field access on every record type, read from canned responses

mod common;

use isbndb_client::{
    AuthorSubject, Authors, Books, CategoryRef, ErrorKind, IsbnDbError, PersonRef, Publishers,
    Record, ResultSet, SubjectRef, Subjects,
};
use rstest::rstest;

use common::load_fixture;

#[test]
fn test_book_details_shape() {
    let results: ResultSet<Books> = ResultSet::new(load_fixture("books_details"), "BookList");
    let book = results.at(0).unwrap();

    assert_eq!(book.book_id().as_deref(), Some("paul_laurence_dunbar"));
    assert_eq!(book.isbn13().as_deref(), Some("9780061041327"));
    assert_eq!(
        book.title_long().unwrap().as_deref(),
        Some("Example: A Long Title")
    );
    assert_eq!(
        book.authors_text().unwrap().as_deref(),
        Some("Dunbar, Paul Laurence, 1872-1906")
    );
    assert_eq!(book.publisher_id().unwrap().as_deref(), Some("harpertorch"));
    assert_eq!(
        book.publisher_text().unwrap().as_deref(),
        Some("New York: HarperTorch, 2001")
    );

    let details = book.details().unwrap().unwrap();
    assert_eq!(details.get("dewey_decimal").map(String::as_str), Some("811.4"));
    assert_eq!(details.get("language").map(String::as_str), Some("eng"));

    // Fields outside the requested shape are simply absent.
    assert_eq!(book.summary().unwrap(), None);
    assert_eq!(book.awards_text().unwrap(), None);
    assert_eq!(book.authors().unwrap().count(), 0);
}

#[test]
fn test_book_authors_and_subjects() {
    let results: ResultSet<Books> = ResultSet::new(load_fixture("books_authors"), "BookList");

    let first = results.at(0).unwrap();
    let authors: Vec<PersonRef> = first.authors().unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(
        authors,
        vec![
            PersonRef {
                person_id: Some("smith_john".to_string()),
                person_text: "Smith, John".to_string(),
            },
            PersonRef {
                person_id: Some("doe_jane".to_string()),
                person_text: "Doe, Jane".to_string(),
            },
        ]
    );
    let subjects: Vec<SubjectRef> = first.subjects().unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(subjects[0].subject_id.as_deref(), Some("fiction"));

    let second = results.at(1).unwrap();
    let anonymous = second.authors().unwrap().next().unwrap().unwrap();
    assert_eq!(anonymous.person_id, None);
    assert_eq!(anonymous.person_text, "Anonymous");

    let prices: Vec<_> = second.prices().unwrap().collect();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].get("price").map(String::as_str), Some("4.48"));
}

#[test]
fn test_group_sequences_can_be_requested_again() {
    let results: ResultSet<Books> = ResultSet::new(load_fixture("books_authors"), "BookList");
    let book = results.at(0).unwrap();
    assert_eq!(book.authors().unwrap().count(), 2);
    assert_eq!(book.authors().unwrap().count(), 2);
}

#[test]
fn test_empty_group_yields_nothing() {
    let results: ResultSet<Books> = ResultSet::new(load_fixture("books_authors"), "BookList");
    let book = results.at(2).unwrap();
    assert_eq!(book.authors().unwrap().count(), 0);
    assert_eq!(book.marc_records().unwrap().count(), 0);
}

#[rstest]
#[case::duplicate_title("Title")]
#[case::empty_summary("Summary")]
#[case::mixed_notes("Notes")]
fn test_ambiguous_text_fields_fail(#[case] field: &str) {
    let results: ResultSet<Books> = ResultSet::new(load_fixture("books_authors"), "BookList");
    let book = results.at(2).unwrap();

    let err = match field {
        "Title" => book.title().unwrap_err(),
        "Summary" => book.summary().unwrap_err(),
        _ => book.notes().unwrap_err(),
    };
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    match field {
        "Title" => assert!(matches!(err, IsbnDbError::AmbiguousElement { found: 2, .. })),
        _ => assert!(matches!(err, IsbnDbError::TextCardinality { .. })),
    }
}

#[test]
fn test_subject_record() {
    let results: ResultSet<Subjects> = ResultSet::new(load_fixture("subjects"), "SubjectList");
    let subject = results.at(0).unwrap();

    assert_eq!(subject.subject_id().as_deref(), Some("science_fiction"));
    assert_eq!(subject.book_count().as_deref(), Some("1245"));
    assert_eq!(subject.marc_field().as_deref(), Some("650"));
    assert_eq!(subject.marc_indicators(), (None, Some("0".to_string())));
    assert_eq!(subject.name().unwrap().as_deref(), Some("Science fiction"));

    let categories: Vec<CategoryRef> = subject
        .categories()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].category_text, "Genres");

    let structure: Vec<_> = subject.structure().unwrap().collect();
    assert_eq!(structure[0].get("field").map(String::as_str), Some("a"));
}

#[test]
fn test_category_record() {
    let results = ResultSet::<isbndb_client::Categories>::new(
        load_fixture("categories"),
        "CategoryList",
    );
    let society = results.at(0).unwrap();

    assert_eq!(society.category_id().as_deref(), Some("society"));
    assert_eq!(society.parent_id(), None);
    assert_eq!(society.name().unwrap().as_deref(), Some("Society"));
    let details = society.details().unwrap().unwrap();
    assert_eq!(details.get("depth").map(String::as_str), Some("0"));

    let ids: Vec<_> = society
        .subcategories()
        .unwrap()
        .filter_map(|sub| sub.get("id").cloned())
        .collect();
    assert_eq!(ids, vec!["society.religion", "society.law"]);

    let religion = results.at(1).unwrap();
    assert_eq!(religion.details().unwrap(), None);
    assert_eq!(religion.subcategories().unwrap().count(), 0);
}

#[test]
fn test_author_record() {
    let results: ResultSet<Authors> = ResultSet::new(load_fixture("authors"), "AuthorList");
    let author = results.at(0).unwrap();

    assert_eq!(author.author_id().as_deref(), Some("dunbar_paul_laurence"));
    assert_eq!(
        author.name().unwrap().as_deref(),
        Some("Dunbar, Paul Laurence, 1872-1906")
    );
    let details = author.details().unwrap().unwrap();
    assert_eq!(details.get("last_name").map(String::as_str), Some("Dunbar"));

    let subjects: Vec<AuthorSubject> = author
        .subjects()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        subjects[0],
        AuthorSubject {
            subject_id: Some("american_poetry".to_string()),
            book_count: Some("15".to_string()),
            subject_text: "American poetry".to_string(),
        }
    );
    assert_eq!(author.categories().unwrap().count(), 1);
}

#[test]
fn test_publisher_record() {
    let results: ResultSet<Publishers> =
        ResultSet::new(load_fixture("publishers"), "PublisherList");
    let publisher = results.at(0).unwrap();

    assert_eq!(publisher.publisher_id().as_deref(), Some("harpertorch"));
    assert_eq!(publisher.name().unwrap().as_deref(), Some("HarperTorch"));
    let details = publisher.details().unwrap().unwrap();
    assert_eq!(details.get("location").map(String::as_str), Some("New York"));

    let category = publisher.categories().unwrap().next().unwrap().unwrap();
    assert_eq!(category.category_id.as_deref(), Some("imprints"));
}

#[test]
fn test_record_renders_as_xml() {
    let results: ResultSet<Publishers> =
        ResultSet::new(load_fixture("publishers"), "PublisherList");
    let publisher = results.at(0).unwrap();
    let rendered = publisher.to_string();

    assert!(rendered.starts_with("<PublisherData publisher_id=\"harpertorch\">"));
    assert!(rendered.contains("<Name>HarperTorch</Name>"));
    assert_eq!(publisher.element().name(), "PublisherData");
}
