//! Bundled resource providers: the last tier of resolution.
//!
//! - `EmbeddedBundle`: resources packaged with the application
//! - `DirectoryBundle`: directories registered by the search-path registry
//! - `BundleChain`: prioritized composition of the above

mod chain;
mod directory;
mod embedded;

pub use chain::BundleChain;
pub use directory::DirectoryBundle;
pub use embedded::EmbeddedBundle;
