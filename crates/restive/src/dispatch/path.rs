//! Path resolution against the registry.
//!
//! A path either names a registered prefix exactly (a collection request) or
//! splits at its last slash into a registered prefix and a trailing
//! identifier segment (an item request). Nothing else resolves.

use crate::capability::Resource;
use crate::error::StructuredError;
use crate::registry::Registry;

/// Message returned when the identifier segment is not an integer.
pub(crate) const IDENTIFIER_MESSAGE: &str = "resource ids must be non-negative integers";

/// A path matched to a registry entry.
#[derive(Debug)]
pub(crate) struct Resolution<'r, 'p> {
    pub(crate) resource: &'r Resource,
    pub(crate) prefix: &'p str,
    pub(crate) id: Option<&'p str>,
}

/// Resolves `path` against `registry`.
///
/// 1. An exact match is a collection request with no identifier.
/// 2. Otherwise the path is split after its last `/`; the head must be a
///    registered prefix and the tail becomes the identifier.
pub(crate) fn resolve<'r, 'p>(
    registry: &'r Registry,
    path: &'p str,
) -> Result<Resolution<'r, 'p>, StructuredError> {
    if let Some(resource) = registry.get(path) {
        return Ok(Resolution {
            resource,
            prefix: path,
            id: None,
        });
    }

    let Some(slash) = path.rfind('/') else {
        return Err(StructuredError::not_found());
    };
    let (prefix, id) = path.split_at(slash + 1);
    let resource = registry
        .get(prefix)
        .ok_or_else(StructuredError::not_found)?;

    Ok(Resolution {
        resource,
        prefix,
        id: Some(id),
    })
}

/// Parses an identifier segment as a base-10 `i32`.
///
/// A leading sign is accepted, so negative identifiers reach the finder.
/// Anything that fails to parse, including values outside the `i32` range, is
/// a bad request.
pub(crate) fn parse_identifier(id: &str) -> Result<i32, StructuredError> {
    id.parse::<i32>()
        .map_err(|_| StructuredError::bad_request(IDENTIFIER_MESSAGE))
}
