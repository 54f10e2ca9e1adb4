//! Paths command handler.
//!
//! Displays the effective search paths for diagnostics and debugging.

use std::io::{self, Write};

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints each search directory in priority order, then every directory
/// registered as a bundled root, in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    write_paths(ctx, &mut io::stdout().lock())
}

fn write_paths(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    let search_paths = ctx.registry.search_paths();
    if search_paths.is_empty() {
        writeln!(out, "search_path = (none)")?;
    }
    for (index, dir) in search_paths.iter().enumerate() {
        writeln!(out, "search_path[{index}] = {}", dir.display())?;
    }
    for root in ctx.registry.bundled_roots() {
        writeln!(out, "bundled_root = {}", root.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resfind_core::{
        FixedUserDirectory, RecordingSink, ResolverConfig, ResourceResolver, SearchPathRegistry,
    };
    use std::sync::Arc;

    fn context(config: &ResolverConfig) -> CliContext {
        let registry = Arc::new(SearchPathRegistry::new(
            config,
            Arc::new(FixedUserDirectory::unavailable()),
            Arc::new(RecordingSink::new()),
        ));
        registry.configure_from(config);
        let resolver = ResourceResolver::new(Arc::clone(&registry));
        CliContext { registry, resolver }
    }

    #[test]
    fn no_documents_directory_prints_none() {
        let ctx = context(&ResolverConfig::default());

        let mut out = Vec::new();
        write_paths(&ctx, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "search_path = (none)\n");
    }

    #[test]
    fn lists_search_paths_then_bundled_roots() {
        let temp = tempfile::tempdir().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        let raw = format!("{};{}", first.display(), second.display());
        let ctx = context(&ResolverConfig::default().with_search_path(raw));

        let mut out = Vec::new();
        write_paths(&ctx, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("search_path[0] = {}", first.display()));
        assert_eq!(lines[1], format!("search_path[1] = {}", second.display()));
        assert!(lines[2..].iter().all(|line| line.starts_with("bundled_root = ")));
        assert_eq!(lines.len(), 4);
    }
}
