//! Show command handler.
//!
//! Prints the JSON view of a resource. Malformed content still prints an
//! empty object; the masked error goes to stderr so scripts can tell the
//! difference.

use std::io::{self, Write};

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    write_view(ctx, name, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn write_view(
    ctx: &CliContext,
    name: &str,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> Result<()> {
    let mut resource = ctx.resolver.resolve(name).map_err(CliError::from)?;
    let location = resource.location().to_string();

    let Some(view) = resource.structured_view() else {
        return Err(CliError::Io(format!("{location} is closed")).into());
    };
    let rendered = serde_json::to_string_pretty(view)?;
    writeln!(out, "{rendered}")?;

    if let Some(err) = resource.last_error() {
        writeln!(err_out, "warning: {err}")?;
    }
    Ok(())
}
