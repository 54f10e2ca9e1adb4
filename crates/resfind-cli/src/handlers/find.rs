//! Find command handler.

use std::io::{self, Write};

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Resolve `name` and print its location and tier.
pub fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    write_location(ctx, name, &mut io::stdout().lock())
}

fn write_location(ctx: &CliContext, name: &str, out: &mut impl Write) -> Result<()> {
    let mut resource = ctx.resolver.resolve(name).map_err(CliError::from)?;
    writeln!(out, "location = {}", resource.location())?;
    writeln!(out, "source = {}", resource.source())?;
    resource.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use resfind_core::ResolverConfig;
    use std::fs;

    fn context(search: &std::path::Path) -> CliContext {
        bootstrap(&CliConfig {
            resolver: ResolverConfig::default().with_search_path(search.display().to_string()),
        })
        .unwrap()
    }

    #[test]
    fn prints_location_and_source() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("cli-find-test.json"), b"{}").unwrap();
        let ctx = context(temp.path());

        let mut out = Vec::new();
        write_location(&ctx, "cli-find-test.json", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let expected = temp.path().join("cli-find-test.json");
        assert!(out.contains(&format!("location = {}", expected.display())));
        assert!(out.contains("source = "));
    }

    #[test]
    fn missing_resource_exits_with_noinput() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context(temp.path());

        let mut out = Vec::new();
        let err = write_location(&ctx, "definitely-missing-find.json", &mut out).unwrap_err();

        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 66);
        assert!(out.is_empty());
    }
}
