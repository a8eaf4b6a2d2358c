//! Registry of path-prefix to resource bindings.
//!
//! The [`Registry`] stores resources keyed by their canonical path prefix: the
//! resource name lower-cased and wrapped in slashes, so `Oxen` binds `/oxen/`.
//! Lookup is an exact key match; there is no pattern language. Registering a
//! second resource under the same prefix replaces the first.
//!
//! Registration is a setup-phase operation. The registry is owned by a
//! [`crate::Dispatcher`] and mutated only through `&mut` access, so once a
//! dispatcher is shared between threads its bindings are read-only.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::capability::{Finder, Indexer, Resource};
use crate::describe::ResourceDescription;

#[cfg(test)]
mod tests;

/// Tracing target for registry operations.
pub(crate) const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// Derives the canonical path prefix for a resource name.
///
/// Plural names (`oxen`) conventionally carry indexers and singular names
/// (`ox`) finders. The name must not contain slashes or whitespace; that is a
/// caller precondition, checked only in debug builds.
///
/// # Example
///
/// ```
/// assert_eq!(restive::canonical_prefix("Oxen"), "/oxen/");
/// ```
#[must_use]
pub fn canonical_prefix(name: &str) -> String {
    debug_assert!(
        !name.contains('/') && !name.chars().any(char::is_whitespace),
        "resource name '{name}' must not contain slashes or whitespace"
    );
    format!("/{}/", name.to_lowercase())
}

/// Outcome of a single registration.
///
/// A resource with no capabilities can never answer a request. That is not an
/// error, but the caller is told through [`Registration::is_reachable`] so it
/// can decide how loudly to complain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a registration reports whether the resource can ever be reached"]
pub struct Registration {
    prefix: String,
    reachable: bool,
    replaced: bool,
}

impl Registration {
    /// Canonical prefix the resource was bound to.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` when the resource offers at least one capability.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    /// Returns `true` when an earlier binding at the same prefix was replaced.
    #[must_use]
    pub fn replaced_existing(&self) -> bool {
        self.replaced
    }
}

/// Mapping from canonical path prefix to resource.
#[derive(Debug, Default)]
pub struct Registry {
    bindings: HashMap<String, Resource>,
    unreachable_reported: bool,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `resource` under the canonical prefix derived from `name`.
    ///
    /// The first unreachable resource registered with this registry is logged
    /// at `warn`; later ones are only reported through the returned
    /// [`Registration`].
    pub fn register(&mut self, name: &str, resource: Resource) -> Registration {
        let prefix = canonical_prefix(name);
        let reachable = resource.is_reachable();

        if !reachable && !self.unreachable_reported {
            warn!(
                target: REGISTRY_TARGET,
                prefix = %prefix,
                resource = resource.type_name(),
                "resource offers neither indexing nor finding and can never be reached"
            );
            self.unreachable_reported = true;
        }

        debug!(
            target: REGISTRY_TARGET,
            prefix = %prefix,
            capabilities = ?resource.capabilities(),
            "registering resource"
        );

        let replaced = self.bindings.insert(prefix.clone(), resource).is_some();
        Registration {
            prefix,
            reachable,
            replaced,
        }
    }

    /// Binds a finder under `singular` and an indexer under `plural`.
    ///
    /// This is the usual pairing for a collection: `GET /oxen/` lists the herd
    /// and `GET /ox/<id>` fetches one animal.
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
        let found = self.register(singular, Resource::finder(finder));
        let indexed = self.register(plural, Resource::indexer(indexer));
        (found, indexed)
    }

    /// Removes every binding.
    ///
    /// Intended for test fixtures that reuse a registry between cases.
    pub fn reset_all(&mut self) {
        debug!(
            target: REGISTRY_TARGET,
            removed = self.bindings.len(),
            "resetting registry"
        );
        self.bindings.clear();
    }

    /// Looks up the resource bound at an exact canonical prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&Resource> {
        self.bindings.get(prefix)
    }

    /// Returns the bound prefixes in lexical order.
    #[must_use]
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    /// Describes every binding, ordered by prefix.
    #[must_use]
    pub fn describe(&self) -> Vec<ResourceDescription> {
        self.prefixes()
            .into_iter()
            .filter_map(|prefix| {
                self.get(prefix)
                    .map(|resource| ResourceDescription::new(prefix, resource))
            })
            .collect()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
