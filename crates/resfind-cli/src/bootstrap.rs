//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the registry and resolver are wired
//! together for the CLI adapter. Command handlers receive the composed
//! `CliContext`.

use std::sync::Arc;

use resfind_core::{ResolverConfig, ResourceResolver, SearchPathRegistry};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Core resolver configuration.
    pub resolver: ResolverConfig,
}

impl CliConfig {
    /// Start from the environment, then apply command-line overrides.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut resolver = ResolverConfig::from_env();
        if let Some(raw) = &cli.search_path {
            resolver = resolver.with_search_path(raw.clone());
        }
        if let Some(name) = &cli.app_dir {
            resolver = resolver.with_app_dir_name(name.trim());
        }
        Self { resolver }
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    pub registry: Arc<SearchPathRegistry>,
    pub resolver: ResourceResolver,
}

/// Build the registry and resolver from `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let app_dir = config.resolver.app_dir_name.as_str();
    if app_dir.is_empty() || app_dir.contains(['/', '\\']) {
        return Err(CliError::Config(format!(
            "application directory must be a single directory name, got {app_dir:?}"
        )));
    }

    let registry = Arc::new(SearchPathRegistry::with_platform_defaults(&config.resolver));
    let resolver = ResourceResolver::new(Arc::clone(&registry));

    Ok(CliContext { registry, resolver })
}
