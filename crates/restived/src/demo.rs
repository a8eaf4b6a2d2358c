//! Demonstration resources served by the daemon.
//!
//! Two small collections: a herd of oxen and a handful of Italian cities.
//! The oxen are registered as separate finder and indexer resources, the
//! cities through [`Dispatcher::register_find_and_index`].

use std::collections::BTreeMap;

use serde::Serialize;

use restive::{
    DispatchResult, Dispatcher, FieldDoc, Finder, IndexDoc, Indexer, Params, Resource, error,
    json_result,
};

/// One ox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ox {
    /// Identifier.
    pub id: i32,
    /// Whether this is a really big ox.
    pub is_large: bool,
}

const HERD: [Ox; 2] = [
    Ox {
        id: 0,
        is_large: true,
    },
    Ox {
        id: 1,
        is_large: false,
    },
];

/// Finds a single [`Ox`] by id.
#[derive(Debug, Clone, Copy)]
pub struct OxFinder {
    pretty: bool,
}

impl OxFinder {
    /// Creates the finder; `pretty` selects indented JSON.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Finder for OxFinder {
    fn find(&self, id: i32, _headers: &Params, _query: &Params) -> DispatchResult {
        match HERD.iter().find(|ox| ox.id == id) {
            Some(ox) => json_result(ox, self.pretty),
            None => error::not_found(),
        }
    }

    fn find_doc(&self) -> String {
        "A single ox from the herd.".to_owned()
    }

    fn find_fields(&self) -> BTreeMap<String, FieldDoc> {
        BTreeMap::from([
            ("Id".to_owned(), FieldDoc::required("Identifier of the ox.")),
            (
                "IsLarge".to_owned(),
                FieldDoc::optional("Set to `true` if this is a really big ox."),
            ),
        ])
    }
}

/// Lists the whole herd.
#[derive(Debug, Clone, Copy)]
pub struct OxenIndexer {
    pretty: bool,
}

impl OxenIndexer {
    /// Creates the indexer; `pretty` selects indented JSON.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Indexer for OxenIndexer {
    fn index(&self, _headers: &Params, _query: &Params) -> DispatchResult {
        json_result(&HERD, self.pretty)
    }

    fn index_doc(&self) -> IndexDoc {
        IndexDoc {
            result: "Every ox in the herd, ordered by id.".to_owned(),
            ..IndexDoc::default()
        }
    }
}

/// One Italian city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItalianCity {
    /// Identifier.
    pub id: i32,
    /// City name.
    pub name: &'static str,
    /// Region the city belongs to.
    pub region: &'static str,
    /// Population in thousands, rounded.
    pub population_thousands: u32,
}

const CITIES: [ItalianCity; 5] = [
    ItalianCity {
        id: 0,
        name: "Roma",
        region: "Lazio",
        population_thousands: 2750,
    },
    ItalianCity {
        id: 1,
        name: "Milano",
        region: "Lombardia",
        population_thousands: 1370,
    },
    ItalianCity {
        id: 2,
        name: "Napoli",
        region: "Campania",
        population_thousands: 910,
    },
    ItalianCity {
        id: 3,
        name: "Torino",
        region: "Piemonte",
        population_thousands: 850,
    },
    ItalianCity {
        id: 4,
        name: "Bergamo",
        region: "Lombardia",
        population_thousands: 120,
    },
];

/// Finds a single [`ItalianCity`] by id.
#[derive(Debug, Clone, Copy)]
pub struct ItalianCityFinder {
    pretty: bool,
}

impl ItalianCityFinder {
    /// Creates the finder; `pretty` selects indented JSON.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Finder for ItalianCityFinder {
    fn find(&self, id: i32, _headers: &Params, _query: &Params) -> DispatchResult {
        match CITIES.iter().find(|city| city.id == id) {
            Some(city) => json_result(city, self.pretty),
            None => error::not_found(),
        }
    }

    fn find_doc(&self) -> String {
        "A single Italian city.".to_owned()
    }

    fn find_fields(&self) -> BTreeMap<String, FieldDoc> {
        BTreeMap::from([
            ("Id".to_owned(), FieldDoc::required("Identifier of the city.")),
            ("Name".to_owned(), FieldDoc::required("Italian name of the city.")),
            ("Region".to_owned(), FieldDoc::required("Administrative region.")),
            (
                "PopulationThousands".to_owned(),
                FieldDoc::required("Population in thousands, rounded."),
            ),
        ])
    }
}

/// Lists cities, optionally restricted to one region.
///
/// `?region=<name>` keeps only cities in that region (case-insensitive). A
/// region with no cities is `204 No Content`.
#[derive(Debug, Clone, Copy)]
pub struct ItalianCitiesIndexer {
    pretty: bool,
}

impl ItalianCitiesIndexer {
    /// Creates the indexer; `pretty` selects indented JSON.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Indexer for ItalianCitiesIndexer {
    fn index(&self, _headers: &Params, query: &Params) -> DispatchResult {
        let Some(region) = query.get("region") else {
            return json_result(&CITIES, self.pretty);
        };
        let cities: Vec<&ItalianCity> = CITIES
            .iter()
            .filter(|city| city.region.eq_ignore_ascii_case(region))
            .collect();
        if cities.is_empty() {
            return error::no_content();
        }
        json_result(&cities, self.pretty)
    }

    fn index_doc(&self) -> IndexDoc {
        IndexDoc {
            headers: String::new(),
            query_parameters: "region: only list cities in this region".to_owned(),
            result: "Italian cities, ordered by id.".to_owned(),
        }
    }
}

/// Builds a dispatcher with every demonstration resource registered.
#[must_use]
pub fn demo_dispatcher(pretty: bool) -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    let registrations = [
        dispatcher.register("ox", Resource::finder(OxFinder::new(pretty))),
        dispatcher.register("oxen", Resource::indexer(OxenIndexer::new(pretty))),
    ];
    let (city, cities) = dispatcher.register_find_and_index(
        "italiancity",
        ItalianCityFinder::new(pretty),
        "italiancities",
        ItalianCitiesIndexer::new(pretty),
    );
    debug_assert!(
        registrations
            .iter()
            .chain([&city, &cities])
            .all(restive::Registration::is_reachable),
        "demonstration resources must be reachable"
    );
    dispatcher
}
