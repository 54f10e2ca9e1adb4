//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that resolve through the context and format output
//!
//! Handlers should NOT contain resolution logic of their own.

pub mod copy;
pub mod find;
pub mod paths;
pub mod show;
