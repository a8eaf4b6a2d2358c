//! Resource-oriented request dispatch.
//!
//! `restive` maps URL path prefixes to resources and answers read requests
//! against them. A resource declares, when it is composed, which of the two
//! read capabilities it offers:
//!
//! - [`Indexer`] renders the whole collection for `GET /<name>/`.
//! - [`Finder`] renders one item for `GET /<name>/<id>`, where `<id>` must parse
//!   as a base-10 integer.
//!
//! The [`Dispatcher`] owns a [`Registry`] of those bindings. Every call returns
//! a [`DispatchResult`]: either the serialized body or a [`StructuredError`]
//! carrying an HTTP status, an optional redirect location and a plain-text
//! message. Failures are always returned as data; nothing in the dispatch path
//! panics or performs I/O.
//!
//! The [`boundary`] module binds the dispatcher to [`http`] request and
//! response types so a transport only has to move bytes.
//!
//! # Example
//!
//! ```
//! use restive::{Dispatcher, Finder, Params, Resource, DispatchResult, error, json_result};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Ox {
//!     id: i32,
//!     is_large: bool,
//! }
//!
//! struct OxFinder;
//!
//! impl Finder for OxFinder {
//!     fn find(&self, id: i32, _headers: &Params, _query: &Params) -> DispatchResult {
//!         match id {
//!             0 => json_result(&Ox { id, is_large: true }, false),
//!             _ => error::not_found(),
//!         }
//!     }
//! }
//!
//! let mut dispatcher = Dispatcher::new();
//! let registration = dispatcher.register("ox", Resource::finder(OxFinder));
//! assert!(registration.is_reachable());
//!
//! let empty = Params::new();
//! let body = dispatcher.dispatch("GET", "/ox/0", &empty, &empty);
//! assert_eq!(body.as_deref(), Ok(r#"{"Id":0,"IsLarge":true}"#));
//!
//! let missing = dispatcher.dispatch("GET", "/ox/7", &empty, &empty);
//! assert_eq!(missing.map_err(|e| e.status_code()), Err(404));
//! ```

pub mod boundary;
pub mod capability;
pub mod describe;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod serializer;

pub use self::capability::{Capability, FieldDoc, Finder, IndexDoc, Indexer, Params, Resource};
pub use self::describe::{FindDescription, ResourceDescription};
pub use self::dispatch::{Dispatcher, Method};
pub use self::error::{DispatchResult, StructuredError};
pub use self::registry::{Registration, Registry, canonical_prefix};
pub use self::serializer::json_result;
