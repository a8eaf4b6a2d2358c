//! End-to-end dispatch scenarios against a small cattle registry.

use restive::{
    Capability, DispatchResult, Dispatcher, FieldDoc, Finder, IndexDoc, Indexer, Params,
    Resource, StructuredError, error, json_result,
};
use rstest::{fixture, rstest};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Ox {
    id: i32,
    is_large: bool,
}

struct OxFinder;

impl Finder for OxFinder {
    fn find(&self, id: i32, _headers: &Params, _query: &Params) -> DispatchResult {
        match id {
            0 => json_result(&Ox { id: 0, is_large: true }, false),
            _ => error::not_found(),
        }
    }

    fn find_doc(&self) -> String {
        "A single ox.".to_owned()
    }

    fn find_fields(&self) -> std::collections::BTreeMap<String, FieldDoc> {
        std::collections::BTreeMap::from([
            ("Id".to_owned(), FieldDoc::required("identifier")),
            ("IsLarge".to_owned(), FieldDoc::optional("whether the ox is large")),
        ])
    }
}

#[derive(Serialize)]
struct Empty {}

struct OxenIndexer;

impl Indexer for OxenIndexer {
    fn index(&self, _headers: &Params, _query: &Params) -> DispatchResult {
        json_result(&Empty {}, false)
    }

    fn index_doc(&self) -> IndexDoc {
        IndexDoc {
            result: "every ox in the herd".to_owned(),
            ..IndexDoc::default()
        }
    }
}

#[fixture]
fn dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    assert!(dispatcher.register("ox", Resource::finder(OxFinder)).is_reachable());
    assert!(dispatcher.register("oxen", Resource::indexer(OxenIndexer)).is_reachable());
    dispatcher
}

#[fixture]
fn empty() -> Params {
    Params::new()
}

fn status(result: DispatchResult) -> u16 {
    match result {
        Ok(_) => 200,
        Err(error) => error.status_code(),
    }
}

#[rstest]
fn found_ox_is_compact_json(dispatcher: Dispatcher, empty: Params) {
    assert_eq!(
        dispatcher.dispatch("GET", "/ox/0", &empty, &empty),
        Ok(r#"{"Id":0,"IsLarge":true}"#.to_owned())
    );
}

#[rstest]
fn missing_ox_is_not_found(dispatcher: Dispatcher, empty: Params) {
    assert_eq!(
        dispatcher.dispatch("GET", "/ox/123", &empty, &empty),
        Err(StructuredError::not_found())
    );
}

#[rstest]
fn empty_index_is_exactly_braces(dispatcher: Dispatcher, empty: Params) {
    assert_eq!(
        dispatcher.dispatch("GET", "/oxen/", &empty, &empty),
        Ok("{}".to_owned())
    );
}

#[rstest]
#[case::unregistered("/people/", 404)]
#[case::unregistered_item("/people/1", 404)]
#[case::finder_without_indexer("/ox/", 501)]
#[case::indexer_without_finder("/oxen/123", 501)]
#[case::malformed_id("/ox/abc", 400)]
#[case::missing_slash("/oxen", 404)]
#[case::bare_name("oxen", 404)]
fn request_outcomes(
    dispatcher: Dispatcher,
    empty: Params,
    #[case] path: &str,
    #[case] expected: u16,
) {
    assert_eq!(status(dispatcher.dispatch("GET", path, &empty, &empty)), expected);
}

#[rstest]
fn writes_are_not_implemented(dispatcher: Dispatcher, empty: Params) {
    for method in ["POST", "PUT", "DELETE"] {
        assert_eq!(
            status(dispatcher.dispatch(method, "/ox/0", &empty, &empty)),
            501,
            "{method} should not be routed"
        );
    }
}

#[rstest]
fn repeated_dispatch_is_identical(dispatcher: Dispatcher, empty: Params) {
    for path in ["/ox/0", "/ox/123", "/oxen/", "/ox/abc", "/nowhere/"] {
        let first = dispatcher.dispatch("GET", path, &empty, &empty);
        let second = dispatcher.dispatch("GET", path, &empty, &empty);
        assert_eq!(first, second, "dispatch of {path} changed between calls");
    }
}

#[rstest]
fn reset_unbinds_everything(mut dispatcher: Dispatcher, empty: Params) {
    dispatcher.reset_all();
    for path in ["/ox/0", "/oxen/"] {
        assert_eq!(status(dispatcher.dispatch("GET", path, &empty, &empty)), 404);
    }
}

#[rstest]
fn describe_publishes_documentation(dispatcher: Dispatcher) {
    let descriptions = dispatcher.describe();
    let prefixes: Vec<&str> = descriptions.iter().map(|d| d.prefix.as_str()).collect();
    assert_eq!(prefixes, ["/ox/", "/oxen/"]);

    let ox = descriptions.first().expect("ox description");
    assert_eq!(ox.capabilities, [Capability::Finder]);
    let find = ox.find.as_ref().expect("finder docs");
    assert_eq!(find.doc, "A single ox.");
    assert_eq!(find.fields.get("Id"), Some(&FieldDoc::required("identifier")));

    let oxen = descriptions.get(1).expect("oxen description");
    let index = oxen.index.as_ref().expect("indexer docs");
    assert_eq!(index.result, "every ox in the herd");
}
