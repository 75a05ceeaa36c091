use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;
use crate::process::Attach;
use tracing::debug;

/// Clears the terminal via the platform's clear program. Failures are ignored.
#[derive(Debug, Clone)]
pub struct ClearCommand;

impl Default for ClearCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let spec = ctx.platform().clear_program();
        let cwd = ctx.env.current_dir().ok();
        if let Err(e) = ctx
            .launcher()
            .run_attached(spec, Attach::STDOUT_ONLY, cwd.as_deref())
        {
            debug!(error = %e, "clear failed");
        }
        Ok(Flow::Continue)
    }
}
