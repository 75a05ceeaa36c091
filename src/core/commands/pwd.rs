use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;

#[derive(Debug, Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let dir = ctx.env.current_dir()?;
        writeln!(ctx.stdout, "{}", dir.display())?;
        Ok(Flow::Continue)
    }
}
