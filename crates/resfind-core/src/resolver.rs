//! Ordered resource resolution.
//!
//! Resolution order:
//! 1. The working directory
//! 2. Each user search directory, in configured order
//! 3. Bundled providers (embedded resources first, then registered roots)
//!
//! The first hit wins; there is no "best match".

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::bundled::{BundleChain, EmbeddedBundle};
use crate::error::ResolveError;
use crate::paths::SearchPathRegistry;
use crate::paths::probe::{join_logical, open_readable};
use crate::ports::{BundledResourceProvider, DiagnosticSink};
use crate::resource::{ResolvedResource, ResourceSource};

/// Turns logical names into open resource handles.
#[derive(Clone)]
pub struct ResourceResolver {
    registry: Arc<SearchPathRegistry>,
    bundled: BundleChain,
    working_dir: Option<PathBuf>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ResourceResolver {
    /// Resolver over `registry`, reporting through the registry's sink.
    pub fn new(registry: Arc<SearchPathRegistry>) -> Self {
        let sink = registry.sink();
        Self {
            registry,
            bundled: BundleChain::new(),
            working_dir: None,
            sink,
        }
    }

    /// Add resources packaged with the application.
    #[must_use]
    pub fn with_embedded(self, bundle: EmbeddedBundle) -> Self {
        self.with_bundled(Arc::new(bundle))
    }

    /// Add a bundled provider. Providers added earlier take priority; the
    /// registry's directory roots are always consulted last.
    #[must_use]
    pub fn with_bundled(mut self, provider: Arc<dyn BundledResourceProvider>) -> Self {
        self.bundled.push(provider);
        self
    }

    /// Probe the first tier against `dir` instead of the process working
    /// directory. The resolved location is still the logical name.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Send diagnostics of resolved handles to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The registry supplying search directories.
    pub const fn registry(&self) -> &Arc<SearchPathRegistry> {
        &self.registry
    }

    /// Resolve `logical_name` to an open handle.
    ///
    /// On success the stream is unread and positioned at the start. Fails
    /// with `ResolveError::NotFound` only when every tier misses.
    pub fn resolve(&self, logical_name: &str) -> Result<ResolvedResource, ResolveError> {
        if logical_name.is_empty() {
            return Err(ResolveError::NotFound {
                name: String::new(),
            });
        }

        // 1. Working directory
        let local = self
            .working_dir
            .as_ref()
            .map_or_else(|| PathBuf::from(logical_name), |dir| dir.join(logical_name));
        match open_readable(&local) {
            Ok(file) => {
                tracing::debug!(name = logical_name, "resolved in working directory");
                return Ok(self.handle(
                    logical_name,
                    logical_name.to_string(),
                    ResourceSource::WorkingDirectory,
                    Some(local),
                    Box::new(file),
                ));
            }
            Err(e) => tracing::trace!(path = %local.display(), error = %e, "working directory miss"),
        }

        // 2. User search paths
        for (index, dir) in self.registry.search_paths().iter().enumerate() {
            let candidate = join_logical(dir, logical_name);
            match open_readable(&candidate) {
                Ok(file) => {
                    let location = candidate.to_string_lossy().into_owned();
                    tracing::debug!(name = logical_name, %location, "resolved in search path");
                    return Ok(self.handle(
                        logical_name,
                        location,
                        ResourceSource::SearchPath { index },
                        Some(candidate),
                        Box::new(file),
                    ));
                }
                Err(e) => {
                    tracing::trace!(path = %candidate.display(), error = %e, "search path miss");
                }
            }
        }

        // 3. Bundled resources
        let stream = self
            .bundled
            .load_bundled(logical_name)
            .or_else(|| self.registry.bundle().load_bundled(logical_name));
        if let Some(stream) = stream {
            tracing::debug!(name = logical_name, "resolved from bundled resources");
            return Ok(self.handle(
                logical_name,
                logical_name.to_string(),
                ResourceSource::Bundled,
                None,
                stream,
            ));
        }

        tracing::debug!(name = logical_name, "resource not found");
        Err(ResolveError::NotFound {
            name: logical_name.to_string(),
        })
    }

    fn handle(
        &self,
        logical_name: &str,
        location: String,
        source: ResourceSource,
        path: Option<PathBuf>,
        stream: crate::ports::ResourceStream,
    ) -> ResolvedResource {
        ResolvedResource::new(
            logical_name,
            location,
            source,
            path,
            stream,
            Arc::clone(&self.sink),
        )
    }
}

impl fmt::Debug for ResourceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceResolver")
            .field("registry", &self.registry)
            .field("bundled", &self.bundled)
            .field("working_dir", &self.working_dir)
            .finish_non_exhaustive()
    }
}
