//! Bundled resource provider port.
//!
//! A bundled provider is the last-resort tier of resolution: resources shipped
//! with the application, or found under directories registered as extra
//! lookup roots. The resolver treats every provider as opaque and read-only.

use std::io::Read;

/// An open, forward-only byte source handed out by a provider.
pub type ResourceStream = Box<dyn Read + Send>;

/// Port for loading bundled resources by logical name.
pub trait BundledResourceProvider: Send + Sync {
    /// Open `name`, or return `None` when this provider does not have it.
    fn load_bundled(&self, name: &str) -> Option<ResourceStream>;
}
