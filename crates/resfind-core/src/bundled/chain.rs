//! Prioritized composition of bundled providers.

use std::fmt;
use std::sync::Arc;

use crate::ports::{BundledResourceProvider, ResourceStream};

/// Ordered list of providers; the first one that has a name wins.
#[derive(Clone, Default)]
pub struct BundleChain {
    providers: Vec<Arc<dyn BundledResourceProvider>>,
}

impl BundleChain {
    /// An empty chain that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider with lower priority than every existing one.
    pub fn push(&mut self, provider: Arc<dyn BundledResourceProvider>) {
        self.providers.push(provider);
    }

    /// Builder form of `push`.
    #[must_use]
    pub fn with(mut self, provider: Arc<dyn BundledResourceProvider>) -> Self {
        self.push(provider);
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for BundleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundleChain")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl BundledResourceProvider for BundleChain {
    fn load_bundled(&self, name: &str) -> Option<ResourceStream> {
        self.providers
            .iter()
            .find_map(|provider| provider.load_bundled(name))
    }
}
