//! Unit tests for the resource registry.

use rstest::{fixture, rstest};

use super::*;
use crate::capability::{Capability, FieldDoc, Params};
use crate::error::DispatchResult;

struct Herd;

impl Indexer for Herd {
    fn index(&self, _headers: &Params, _query: &Params) -> DispatchResult {
        Ok("[]".to_owned())
    }
}

struct Stall;

impl Finder for Stall {
    fn find(&self, id: i32, _headers: &Params, _query: &Params) -> DispatchResult {
        Ok(id.to_string())
    }

    fn find_doc(&self) -> String {
        "How can you lose an ox?".to_owned()
    }

    fn find_fields(&self) -> std::collections::BTreeMap<String, FieldDoc> {
        std::collections::BTreeMap::from([(
            "IsLarge".to_owned(),
            FieldDoc::optional("big ox"),
        )])
    }
}

#[fixture]
fn populated_registry() -> Registry {
    let mut registry = Registry::new();
    assert!(registry.register("oxen", Resource::indexer(Herd)).is_reachable());
    assert!(registry.register("ox", Resource::finder(Stall)).is_reachable());
    registry
}

// ---------------------------------------------------------------------------
// Canonical prefixes
// ---------------------------------------------------------------------------

#[rstest]
#[case::lower("oxen", "/oxen/")]
#[case::upper("OXEN", "/oxen/")]
#[case::mixed("ItalianCities", "/italiancities/")]
#[case::singular("ox", "/ox/")]
fn canonical_prefix_lowercases_and_wraps(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(canonical_prefix(name), expected);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[test]
fn new_registry_is_empty() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.prefixes().is_empty());
}

#[test]
fn register_binds_canonical_prefix() {
    let mut registry = Registry::new();
    let registration = registry.register("People", Resource::indexer(Herd));
    assert_eq!(registration.prefix(), "/people/");
    assert!(registration.is_reachable());
    assert!(!registration.replaced_existing());
    assert!(registry.get("/people/").is_some());
    assert!(registry.get("/People/").is_none());
    assert!(registry.get("people").is_none());
}

#[test]
fn register_overwrites_existing_binding() {
    let mut registry = Registry::new();
    assert!(registry.register("ox", Resource::indexer(Herd)).is_reachable());
    let registration = registry.register("Ox", Resource::finder(Stall));

    assert!(registration.replaced_existing());
    assert_eq!(registry.len(), 1);
    let resource = registry.get("/ox/").expect("bound resource");
    assert_eq!(resource.capabilities(), vec![Capability::Finder]);
}

#[test]
fn unreachable_resource_is_reported_but_still_bound() {
    let mut registry = Registry::new();
    let registration = registry.register("ghost", Resource::new());
    assert!(!registration.is_reachable());
    assert!(registry.get("/ghost/").is_some());
}

#[test]
fn unreachable_warning_is_logged_once_per_registry() {
    let mut registry = Registry::new();
    assert!(!registry.unreachable_reported);

    let first = registry.register("ghost", Resource::new());
    assert!(registry.unreachable_reported);
    let second = registry.register("phantom", Resource::new());

    assert!(!first.is_reachable());
    assert!(!second.is_reachable());
    assert!(registry.unreachable_reported);
}

#[test]
fn reachable_registration_does_not_trip_warning() {
    let mut registry = Registry::new();
    assert!(registry.register("oxen", Resource::indexer(Herd)).is_reachable());
    assert!(!registry.unreachable_reported);
}

#[test]
fn register_find_and_index_binds_both_names() {
    let mut registry = Registry::new();
    let (found, indexed) = registry.register_find_and_index("ox", Stall, "oxen", Herd);

    assert_eq!(found.prefix(), "/ox/");
    assert_eq!(indexed.prefix(), "/oxen/");
    let finder = registry.get("/ox/").expect("finder bound");
    let indexer = registry.get("/oxen/").expect("indexer bound");
    assert_eq!(finder.capabilities(), vec![Capability::Finder]);
    assert_eq!(indexer.capabilities(), vec![Capability::Indexer]);
}

// ---------------------------------------------------------------------------
// Reset and lookup
// ---------------------------------------------------------------------------

#[rstest]
fn reset_all_removes_every_binding(mut populated_registry: Registry) {
    assert_eq!(populated_registry.len(), 2);
    populated_registry.reset_all();
    assert!(populated_registry.is_empty());
    assert!(populated_registry.get("/oxen/").is_none());
    assert!(populated_registry.get("/ox/").is_none());
}

#[rstest]
fn prefixes_are_sorted(populated_registry: Registry) {
    assert_eq!(populated_registry.prefixes(), vec!["/ox/", "/oxen/"]);
}

#[rstest]
fn describe_reports_documentation(populated_registry: Registry) {
    let descriptions = populated_registry.describe();
    assert_eq!(descriptions.len(), 2);

    let ox = descriptions.first().expect("ox description");
    assert_eq!(ox.prefix, "/ox/");
    assert_eq!(ox.capabilities, vec![Capability::Finder]);
    assert!(ox.index.is_none());
    let find = ox.find.as_ref().expect("finder documentation");
    assert_eq!(find.doc, "How can you lose an ox?");
    assert!(find.fields.contains_key("IsLarge"));

    let oxen = descriptions.get(1).expect("oxen description");
    assert_eq!(oxen.prefix, "/oxen/");
    assert!(oxen.index.is_some());
    assert!(oxen.find.is_none());
}

#[rstest]
fn description_serializes_without_absent_sections(populated_registry: Registry) {
    let descriptions = populated_registry.describe();
    let oxen = descriptions.get(1).expect("oxen description");
    let json = serde_json::to_string(oxen).expect("serialize description");
    assert!(json.contains(r#""prefix":"/oxen/""#), "unexpected json: {json}");
    assert!(json.contains(r#""capabilities":["indexer"]"#), "unexpected json: {json}");
    assert!(!json.contains(r#""find""#), "unexpected json: {json}");
}
