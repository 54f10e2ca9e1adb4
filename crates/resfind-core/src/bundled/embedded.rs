//! In-memory bundled provider for resources packaged with the application.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Cursor;

use crate::ports::{BundledResourceProvider, ResourceStream};

/// Resources compiled into (or loaded by) the application itself.
///
/// Typically filled with `include_bytes!` at startup:
///
/// ```ignore
/// let defaults = EmbeddedBundle::new()
///     .with_resource("config.json", include_bytes!("../defaults/config.json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBundle {
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any earlier one with the same name.
    #[must_use]
    pub fn with_resource(mut self, name: &str, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(name, bytes);
        self
    }

    pub fn insert(&mut self, name: &str, bytes: impl Into<Cow<'static, [u8]>>) {
        self.resources.insert(normalize(name).to_string(), bytes.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(normalize(name))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

// Resource names are rooted; "/config.json" and "config.json" are the same entry.
fn normalize(name: &str) -> &str {
    name.trim_start_matches('/')
}

impl BundledResourceProvider for EmbeddedBundle {
    fn load_bundled(&self, name: &str) -> Option<ResourceStream> {
        let bytes = self.resources.get(normalize(name))?.clone();
        Some(Box::new(Cursor::new(bytes)))
    }
}
