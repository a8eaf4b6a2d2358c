//! Self-description of registered resources.
//!
//! Built from the advisory documentation hooks on [`Indexer`](crate::Indexer)
//! and [`Finder`](crate::Finder). Nothing here affects dispatch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::capability::{Capability, FieldDoc, IndexDoc, Resource};

/// Serializable summary of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescription {
    /// Canonical path prefix, e.g. `/oxen/`.
    pub prefix: String,
    /// Capabilities the resource offers.
    pub capabilities: Vec<Capability>,
    /// Indexer documentation, present when the resource indexes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexDoc>,
    /// Finder documentation, present when the resource finds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find: Option<FindDescription>,
}

/// Finder documentation gathered from [`Finder::find_doc`](crate::Finder::find_doc)
/// and [`Finder::find_fields`](crate::Finder::find_fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindDescription {
    /// Free-form description of the found item.
    pub doc: String,
    /// Per-field documentation.
    pub fields: BTreeMap<String, FieldDoc>,
}

impl ResourceDescription {
    /// Describes `resource` as bound at `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, resource: &Resource) -> Self {
        Self {
            prefix: prefix.into(),
            capabilities: resource.capabilities(),
            index: resource.as_indexer().map(|indexer| indexer.index_doc()),
            find: resource.as_finder().map(|finder| FindDescription {
                doc: finder.find_doc(),
                fields: finder.find_fields(),
            }),
        }
    }
}
