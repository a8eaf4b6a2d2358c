//! Registered resource values and their declared capabilities.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::{Capability, Finder, Indexer};

/// A value bound to a path prefix, tagged with the capabilities it offers.
///
/// Capabilities are fixed when the resource is composed, so dispatch only has
/// to check which handler slots are filled. Cloning is cheap: handlers are
/// shared behind [`Arc`].
///
/// # Example
///
/// ```
/// use restive::{Capability, DispatchResult, Indexer, Params, Resource};
///
/// struct People;
///
/// impl Indexer for People {
///     fn index(&self, _headers: &Params, _query: &Params) -> DispatchResult {
///         Ok("[]".to_owned())
///     }
/// }
///
/// let resource = Resource::indexer(People);
/// assert_eq!(resource.capabilities(), vec![Capability::Indexer]);
/// assert!(resource.as_finder().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Resource {
    indexer: Option<Arc<dyn Indexer>>,
    finder: Option<Arc<dyn Finder>>,
    type_name: &'static str,
}

impl Resource {
    /// Creates a resource with no capabilities.
    ///
    /// Such a resource can be registered but every request reaching it answers
    /// `501 Not Implemented`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resource that only indexes.
    #[must_use]
    pub fn indexer<I>(indexer: I) -> Self
    where
        I: Indexer + 'static,
    {
        Self::new().with_indexer(indexer)
    }

    /// Creates a resource that only finds.
    #[must_use]
    pub fn finder<F>(finder: F) -> Self
    where
        F: Finder + 'static,
    {
        Self::new().with_finder(finder)
    }

    /// Creates a resource whose single value both indexes and finds.
    #[must_use]
    pub fn indexer_and_finder<R>(resource: R) -> Self
    where
        R: Indexer + Finder + 'static,
    {
        let shared = Arc::new(resource);
        let indexer: Arc<dyn Indexer> = Arc::clone(&shared) as Arc<dyn Indexer>;
        let finder: Arc<dyn Finder> = shared;
        Self {
            indexer: Some(indexer),
            finder: Some(finder),
            type_name: type_name::<R>(),
        }
    }

    /// Adds or replaces the indexing handler.
    #[must_use]
    pub fn with_indexer<I>(mut self, indexer: I) -> Self
    where
        I: Indexer + 'static,
    {
        self.indexer = Some(Arc::new(indexer));
        if self.type_name.is_empty() {
            self.type_name = type_name::<I>();
        }
        self
    }

    /// Adds or replaces the finding handler.
    #[must_use]
    pub fn with_finder<F>(mut self, finder: F) -> Self
    where
        F: Finder + 'static,
    {
        self.finder = Some(Arc::new(finder));
        if self.type_name.is_empty() {
            self.type_name = type_name::<F>();
        }
        self
    }

    /// Returns the indexing handler when the resource has one.
    #[must_use]
    pub fn as_indexer(&self) -> Option<&dyn Indexer> {
        self.indexer.as_deref()
    }

    /// Returns the finding handler when the resource has one.
    #[must_use]
    pub fn as_finder(&self) -> Option<&dyn Finder> {
        self.finder.as_deref()
    }

    /// Lists the capabilities in a stable order.
    #[must_use]
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut capabilities = Vec::with_capacity(2);
        if self.indexer.is_some() {
            capabilities.push(Capability::Indexer);
        }
        if self.finder.is_some() {
            capabilities.push(Capability::Finder);
        }
        capabilities
    }

    /// Returns `true` when at least one capability is present.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.indexer.is_some() || self.finder.is_some()
    }

    /// Type name of the first handler supplied, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("type_name", &self.type_name)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
