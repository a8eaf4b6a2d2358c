//! Routing of requests to resource capabilities.
//!
//! [`Dispatcher::dispatch`] resolves the request path against the registry,
//! then decides which capability answers it:
//!
//! | Path form        | Method | Capability | Missing capability |
//! |------------------|--------|------------|--------------------|
//! | `/<name>/`       | `GET`  | indexer    | 501                |
//! | `/<name>/<id>`   | `GET`  | finder     | 501                |
//! | either           | other  | none       | 501                |
//!
//! Unknown paths are 404 regardless of method, and an identifier that is not a
//! base-10 integer is 400 before the finder is consulted. Whatever the
//! capability returns is passed through untouched.

mod method;
mod path;


use tracing::debug;

use crate::capability::{Finder, Indexer, Params, Resource};
use crate::describe::ResourceDescription;
use crate::error::{DispatchResult, StructuredError};
use crate::registry::{Registration, Registry};

pub use self::method::Method;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Routes requests to the resources bound in its [`Registry`].
///
/// Registration needs `&mut self`; dispatch only `&self`. Build the dispatcher
/// up front, then share it (for example behind an `Arc`) between request
/// handlers.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher over an existing registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// Read access to the bindings.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Binds `resource` under the canonical prefix for `name`.
    ///
    /// See [`Registry::register`].
    pub fn register(&mut self, name: &str, resource: Resource) -> Registration {
        self.registry.register(name, resource)
    }

    /// Binds a finder under `singular` and an indexer under `plural`.
    ///
    /// See [`Registry::register_find_and_index`].
    pub fn register_find_and_index<F, I>(
        &mut self,
        singular: &str,
        finder: F,
        plural: &str,
        indexer: I,
    ) -> (Registration, Registration)
    where
        F: Finder + 'static,
        I: Indexer + 'static,
    {
        self.registry
            .register_find_and_index(singular, finder, plural, indexer)
    }

    /// Removes every binding; afterwards every path is 404.
    pub fn reset_all(&mut self) {
        self.registry.reset_all();
    }

    /// Describes every binding, ordered by prefix.
    #[must_use]
    pub fn describe(&self) -> Vec<ResourceDescription> {
        self.registry.describe()
    }

    /// Answers one request.
    ///
    /// `headers` and `query` are the collapsed single-value views of the
    /// request and are handed to the capability unchanged. The dispatcher
    /// holds no per-request state, so repeated calls with the same inputs
    /// observe the same registry and produce the same routing decision.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuredError`] when the path is unknown (404), the
    /// identifier is malformed (400), the resource lacks the needed capability
    /// or the method is not `GET` (501), or the capability itself fails.
    pub fn dispatch(
        &self,
        method: &str,
        path: &str,
        headers: &Params,
        query: &Params,
    ) -> DispatchResult {
        let resolution = path::resolve(&self.registry, path).inspect_err(|_| {
            debug!(
                target: DISPATCH_TARGET,
                method,
                path,
                "no resource bound at path"
            );
        })?;

        match (Method::parse(method), resolution.id) {
            (Method::Read, None) => {
                let Some(indexer) = resolution.resource.as_indexer() else {
                    debug!(
                        target: DISPATCH_TARGET,
                        prefix = resolution.prefix,
                        "resource does not index"
                    );
                    return Err(StructuredError::not_implemented());
                };
                debug!(
                    target: DISPATCH_TARGET,
                    prefix = resolution.prefix,
                    "indexing collection"
                );
                indexer.index(headers, query)
            }
            (Method::Read, Some(raw_id)) => {
                let id = path::parse_identifier(raw_id).inspect_err(|_| {
                    debug!(
                        target: DISPATCH_TARGET,
                        prefix = resolution.prefix,
                        id = raw_id,
                        "malformed identifier"
                    );
                })?;
                let Some(finder) = resolution.resource.as_finder() else {
                    debug!(
                        target: DISPATCH_TARGET,
                        prefix = resolution.prefix,
                        "resource does not find"
                    );
                    return Err(StructuredError::not_implemented());
                };
                debug!(
                    target: DISPATCH_TARGET,
                    prefix = resolution.prefix,
                    id,
                    "finding item"
                );
                finder.find(id, headers, query)
            }
            (Method::Other(token), _) => {
                debug!(
                    target: DISPATCH_TARGET,
                    method = %token,
                    prefix = resolution.prefix,
                    "unsupported method"
                );
                Err(StructuredError::not_implemented())
            }
        }
    }
}
