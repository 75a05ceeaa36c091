use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let target = args.first().ok_or_else(|| {
            CommandError::MissingArgument("Please specify a directory".to_string())
        })?;

        let dir = if target.as_os_str() == "~" {
            // No home directory: nothing to do.
            match ctx.env.var(ctx.platform().home_var()) {
                Some(home) => PathBuf::from(home),
                None => return Ok(Flow::Continue),
            }
        } else {
            PathBuf::from(target)
        };

        ctx.env
            .set_current_dir(&dir)
            .map_err(|_| CommandError::NoSuchDirectory(dir.display().to_string()))?;
        Ok(Flow::Continue)
    }
}
