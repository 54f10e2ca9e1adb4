//! Copy command handler.
//!
//! Saves a copy of the resolved resource, typically into a search directory
//! so the user can customize it.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, name: &str, dest: &Path) -> Result<()> {
    let mut resource = ctx.resolver.resolve(name).map_err(CliError::from)?;

    let copied = resource.copy_to(dest);
    resource.close();

    if !copied {
        let reason = resource
            .last_error()
            .map_or_else(|| "copy failed".to_string(), ToString::to_string);
        return Err(CliError::Io(reason).into());
    }

    println!("{} -> {}", resource.location(), dest.display());
    Ok(())
}
