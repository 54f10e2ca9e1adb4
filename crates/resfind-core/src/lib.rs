//! Layered resource lookup for desktop-style applications.
//!
//! Applications ship default resources and let users override them by
//! dropping files into a per-user directory. A logical name such as
//! `config.json` is resolved against, in order:
//!
//! 1. the working directory,
//! 2. each user search-path directory (default `<Documents>/resfind`),
//! 3. bundled resources (embedded defaults, then registered search roots).
//!
//! ```ignore
//! let registry = Arc::new(SearchPathRegistry::with_platform_defaults(&ResolverConfig::from_env()));
//! let resolver = ResourceResolver::new(registry)
//!     .with_embedded(EmbeddedBundle::new().with_resource("config.json", DEFAULT_CONFIG));
//!
//! let mut config = resolver.resolve("config.json")?;
//! let view = config.structured_view();
//! ```
#![deny(unused_crate_dependencies)]

pub mod bundled;
pub mod config;
pub mod error;
pub mod paths;
pub mod ports;
pub mod resolver;
pub mod resource;

pub use bundled::{BundleChain, DirectoryBundle, EmbeddedBundle};
pub use config::{
    APP_DIR_ENV, DEFAULT_APP_DIR_NAME, ResolverConfig, SEARCH_PATH_DELIMITER, SEARCH_PATH_ENV,
};
pub use error::{ResolveError, ResourceError};
pub use paths::{
    DOCUMENTS_DIR_ENV, PathError, PlatformUserDirectory, SearchPathRegistry, ensure_directory,
    join_logical,
};
pub use ports::{
    BundledResourceProvider, DiagnosticRecord, DiagnosticSink, FixedUserDirectory, RecordingSink,
    ResourceStream, Severity, TracingSink, UserDirectoryPort,
};
pub use resolver::ResourceResolver;
pub use resource::{ResolvedResource, ResourceSource, StructuredView};
