//! Collection lookups against a recording transport

mod common;

use std::sync::Arc;

use isbndb_client::{
    AuthorCollection, BookCollection, Catalog, CategoryCollection, ErrorKind, IsbnDbError,
    KeyStatsCollection, LookupOptions, LookupQuery, Method, PublisherCollection,
    SubjectCollection, Transport,
};
use rstest::rstest;
use tracing_test::traced_test;

use common::MockTransport;

#[test]
fn test_collection_descriptors() {
    let books = BookCollection::new(None);
    assert_eq!(books.path(), "books.xml");
    assert_eq!(books.results(), "authors");
    assert_eq!(books.result_shapes().len(), 7);

    assert_eq!(SubjectCollection::new(None).results(), "categories");
    assert_eq!(CategoryCollection::new(None).path(), "categories.xml");
    assert_eq!(AuthorCollection::new(None).path(), "authors.xml");
    assert_eq!(PublisherCollection::new(None).path(), "publishers.xml");
    assert_eq!(KeyStatsCollection::new(None).path(), "books.xml");
}

#[rstest]
#[case("details")]
#[case("texts")]
#[case("prices")]
#[case("pricehistory")]
#[case("subjects")]
#[case("authors")]
#[case("marc")]
fn test_set_results_accepts_declared_shapes(#[case] shape: &str) {
    let mut books = BookCollection::new(None);
    books.set_results(shape).unwrap();
    assert_eq!(books.results(), shape);
}

#[rstest]
#[case("everything")]
#[case("")]
#[case("Details")]
fn test_set_results_rejects_unknown_shapes(#[case] shape: &str) {
    let mut subjects = SubjectCollection::new(None);
    let err = subjects.set_results(shape).unwrap_err();

    assert!(matches!(err, IsbnDbError::UnknownResultShape { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("subjects.xml"));
    assert_eq!(subjects.results(), "categories");
}

#[test]
fn test_with_results_validates_shape() {
    assert_eq!(
        AuthorCollection::with_results(None, "subjects")
            .unwrap()
            .results(),
        "subjects"
    );
    assert!(PublisherCollection::with_results(None, "subjects").is_err());
}

#[test]
fn test_lookup_without_transport_fails() {
    let books = BookCollection::new(None);
    let err = books
        .isbn("0061041321", LookupOptions::default())
        .unwrap_err();
    assert!(matches!(err, IsbnDbError::MissingTransport));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
#[traced_test]
fn test_isbn_lookup_encodes_request() {
    let transport = MockTransport::with_fixture("books_details");
    let mut books = BookCollection::bound(transport.clone());
    books.set_results("details").unwrap();

    let results = books
        .isbn("0061041321", LookupOptions::default())
        .unwrap();
    assert_eq!(results.len().unwrap(), 1);
    assert_eq!(
        results.at(0).unwrap().title().unwrap().as_deref(),
        Some("Example")
    );

    let request = transport.last_request();
    assert_eq!(request.path, "books.xml");
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.params.get("index1"), Some("isbn"));
    assert_eq!(request.params.get("value1"), Some("0061041321"));
    assert_eq!(request.params.get("results"), Some("details"));
    assert_eq!(request.params.len(), 3);
}

#[rstest]
#[case::title("title")]
#[case::combined("combined")]
#[case::full("full")]
#[case::book_id("book_id")]
#[case::person_id("person_id")]
#[case::subject_id("subject_id")]
#[case::dewey_decimal("dewey_decimal")]
#[case::llc_number("llc_number")]
fn test_book_shortcuts_use_their_index(#[case] index: &str) {
    let transport = MockTransport::with_fixture("books_authors");
    let books = BookCollection::bound(transport.clone());
    let options = LookupOptions::default;

    match index {
        "title" => books.title("term", options()),
        "combined" => books.combined("term", options()),
        "full" => books.full("term", options()),
        "book_id" => books.book_id("term", options()),
        "person_id" => books.person_id("term", options()),
        "subject_id" => books.subject_id("term", options()),
        "dewey_decimal" => books.dewey_decimal("term", options()),
        _ => books.llc_number("term", options()),
    }
    .unwrap();

    let request = transport.last_request();
    assert_eq!(request.params.get("index1"), Some(index));
    assert_eq!(request.params.get("value1"), Some("term"));
    assert_eq!(request.params.get("results"), Some("authors"));
}

#[test]
fn test_other_resource_shortcuts() {
    let subjects_transport = MockTransport::with_fixture("subjects");
    let subjects = SubjectCollection::bound(subjects_transport.clone());
    subjects.name("fiction", LookupOptions::default()).unwrap();
    subjects.category_id("genres", LookupOptions::default()).unwrap();
    let result = subjects
        .subject_id("science_fiction", LookupOptions::default())
        .unwrap();
    assert_eq!(
        result.at(0).unwrap().subject_id().as_deref(),
        Some("science_fiction")
    );
    let indexes: Vec<_> = subjects_transport
        .requests()
        .iter()
        .map(|r| r.params.get("index1").map(str::to_string))
        .collect();
    assert_eq!(
        indexes,
        vec![
            Some("name".to_string()),
            Some("category_id".to_string()),
            Some("subject_id".to_string())
        ]
    );

    let categories_transport = MockTransport::with_fixture("categories");
    let categories = CategoryCollection::bound(categories_transport.clone());
    categories.parent_id("", LookupOptions::default()).unwrap();
    let request = categories_transport.last_request();
    assert_eq!(request.path, "categories.xml");
    assert_eq!(request.params.get("index1"), Some("parent_id"));
    assert_eq!(request.params.get("value1"), Some(""));

    let authors_transport = MockTransport::with_fixture("authors");
    let authors = AuthorCollection::bound(authors_transport.clone());
    authors
        .person_id("dunbar_paul_laurence", LookupOptions::default())
        .unwrap();
    assert_eq!(authors_transport.last_request().path, "authors.xml");

    let publishers_transport = MockTransport::with_fixture("publishers");
    let publishers = PublisherCollection::bound(publishers_transport.clone());
    publishers
        .publisher_id("harpertorch", LookupOptions::default())
        .unwrap();
    let request = publishers_transport.last_request();
    assert_eq!(request.params.get("index1"), Some("publisher_id"));
    assert_eq!(request.params.get("results"), Some("details"));
}

#[test]
fn test_results_override_applies_to_one_call() {
    let transport = MockTransport::with_fixture("books_authors");
    let books = BookCollection::bound(transport.clone());

    books
        .title("dunbar", LookupOptions::new().with_results("prices"))
        .unwrap();
    assert_eq!(transport.last_request().params.get("results"), Some("prices"));

    books.title("dunbar", LookupOptions::default()).unwrap();
    assert_eq!(
        transport.last_request().params.get("results"),
        Some("authors")
    );
}

#[test]
fn test_method_override_applies_to_one_call() {
    let transport = MockTransport::with_fixture("authors");
    let authors = AuthorCollection::bound(transport.clone());

    authors
        .name("dunbar", LookupOptions::new().with_method(Method::Post))
        .unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.params.get("index1"), Some("name"));

    authors.name("dunbar", LookupOptions::default()).unwrap();
    assert_eq!(transport.last_request().method, Method::Get);
}

#[test]
fn test_invalid_results_override_sends_nothing() {
    let transport = MockTransport::with_fixture("books_authors");
    let books = BookCollection::bound(transport.clone());

    let err = books
        .title("dunbar", LookupOptions::new().with_results("keystats"))
        .unwrap_err();
    assert!(matches!(err, IsbnDbError::UnknownResultShape { .. }));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_client_override_takes_precedence() {
    let bound = MockTransport::with_fixture("books_authors");
    let per_call = MockTransport::with_fixture("books_details");
    let books = BookCollection::bound(bound.clone());

    let override_client: Arc<dyn Transport> = per_call.clone();
    let results = books
        .isbn(
            "0061041321",
            LookupOptions::new().with_client(override_client),
        )
        .unwrap();

    assert_eq!(results.len().unwrap(), 1);
    assert!(bound.requests().is_empty());
    assert_eq!(per_call.requests().len(), 1);
}

#[test]
fn test_unbound_collection_uses_per_call_client() {
    let transport = MockTransport::with_fixture("publishers");
    let publishers = PublisherCollection::new(None);
    let results = publishers
        .name("harper", LookupOptions::new().with_client(transport.clone()))
        .unwrap();
    assert_eq!(results.shown_results().unwrap(), 1);
    assert!(publishers.client().is_none());
}

#[test]
fn test_search_numbers_criteria_in_order() {
    let transport = MockTransport::with_fixture("books_authors");
    let books = BookCollection::bound(transport.clone());
    let query = LookupQuery::new()
        .criterion("title", "poems")
        .criterion("person_id", "dunbar_paul_laurence");

    books.search(&query, LookupOptions::default()).unwrap();

    let params = transport.last_request().params;
    assert_eq!(params.get("index1"), Some("title"));
    assert_eq!(params.get("value1"), Some("poems"));
    assert_eq!(params.get("index2"), Some("person_id"));
    assert_eq!(params.get("value2"), Some("dunbar_paul_laurence"));
    assert_eq!(params.len(), 5);
}

#[test]
fn test_keystats_returns_raw_document() {
    let transport = MockTransport::with_fixture("keystats");
    let catalog = Catalog::with_transport(transport.clone());

    let document = catalog.keystats().unwrap();
    let stats = document.elements_by_tag_name("KeyStats").next().unwrap();
    assert_eq!(stats.attribute("granted"), Some("53"));

    let request = transport.last_request();
    assert_eq!(request.path, "books.xml");
    assert_eq!(request.params.get("results"), Some("keystats"));
    assert_eq!(request.params.get("index1"), None);
}

#[test]
fn test_catalog_shares_one_transport() {
    let transport = MockTransport::with_fixture("books_details");
    let catalog = Catalog::with_transport(transport.clone());

    catalog
        .books
        .isbn("0061041321", LookupOptions::default())
        .unwrap();
    catalog
        .authors
        .name("dunbar", LookupOptions::default())
        .unwrap();

    let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["books.xml", "authors.xml"]);
}

#[test]
fn test_transport_errors_pass_through() {
    let transport = Arc::new(MockTransport::new("<ISBNdb><BookList>"));
    let books = BookCollection::bound(transport);
    let err = books.isbn("0061041321", LookupOptions::default()).unwrap_err();
    assert!(matches!(err, IsbnDbError::XmlError(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}
