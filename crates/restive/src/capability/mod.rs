//! Capability contracts a resource may satisfy.
//!
//! The dispatcher never looks inside a resource. It only asks whether the
//! resource can index a collection ([`Indexer`]) or find a single item by
//! identifier ([`Finder`]). Both contracts are independent: a resource may
//! satisfy neither, either, or both, and declares which when it is wrapped in a
//! [`Resource`].
//!
//! Each contract also carries advisory documentation hooks with empty
//! defaults. They are not needed for dispatch and exist so transports can
//! publish a self-description of the registered resources.

mod resource;


use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::error::DispatchResult;

pub use self::resource::Resource;

/// Single-valued string map used for request headers and query parameters.
///
/// When the transport carries several values for one key only the first is
/// kept.
pub type Params = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Identifies one of the read capabilities a resource can offer.
///
/// # Example
///
/// ```
/// use restive::Capability;
///
/// assert_eq!(Capability::Finder.as_str(), "finder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Produces a serialized collection.
    Indexer,
    /// Produces a serialized item given an integer identifier.
    Finder,
}

impl Capability {
    /// Returns the canonical lower-case name of the capability.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indexer => "indexer",
            Self::Finder => "finder",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

/// Renders a whole collection, answering `GET /<name>/`.
///
/// Implementations normally finish with [`crate::json_result`] so encoding
/// failures surface as internal errors instead of hand-assembled text.
pub trait Indexer: Send + Sync {
    /// Produces the serialized collection.
    fn index(&self, headers: &Params, query: &Params) -> DispatchResult;

    /// Describes the headers, query parameters and result of [`Indexer::index`].
    fn index_doc(&self) -> IndexDoc {
        IndexDoc::default()
    }
}

/// Renders one item, answering `GET /<name>/<id>`.
///
/// The identifier has already been parsed as a base-10 integer. Negative
/// values reach the implementation unchanged; rejecting them, or answering
/// [`crate::error::not_found`] for identifiers out of range, is the
/// implementation's decision.
pub trait Finder: Send + Sync {
    /// Produces the serialized item identified by `id`.
    fn find(&self, id: i32, headers: &Params, query: &Params) -> DispatchResult;

    /// Free-form description of what [`Finder::find`] returns.
    fn find_doc(&self) -> String {
        String::new()
    }

    /// Per-field documentation for the item type, keyed by field name.
    fn find_fields(&self) -> BTreeMap<String, FieldDoc> {
        BTreeMap::new()
    }
}

// ---------------------------------------------------------------------------
// Documentation hooks
// ---------------------------------------------------------------------------

/// Advisory description of an [`Indexer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexDoc {
    /// Headers the indexer reads.
    pub headers: String,
    /// Query parameters the indexer understands.
    pub query_parameters: String,
    /// Shape of the returned collection.
    pub result: String,
}

/// Advisory documentation for a single field of a found item.
///
/// # Example
///
/// ```
/// use restive::FieldDoc;
///
/// let doc = FieldDoc::optional("Set to `true` if this is a really big ox");
/// assert!(!doc.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    /// Whether the field is always present.
    pub required: bool,
    /// Human-readable meaning of the field.
    pub description: String,
}

impl FieldDoc {
    /// Creates field documentation.
    #[must_use]
    pub fn new(required: bool, description: impl Into<String>) -> Self {
        Self {
            required,
            description: description.into(),
        }
    }

    /// Documentation for a field that is always present.
    #[must_use]
    pub fn required(description: impl Into<String>) -> Self {
        Self::new(true, description)
    }

    /// Documentation for a field that may be absent.
    #[must_use]
    pub fn optional(description: impl Into<String>) -> Self {
        Self::new(false, description)
    }
}
