use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;
use crate::core::platform::ProgramSpec;
use crate::process::Attach;

/// Bare directory listing through the platform's listing program.
#[derive(Debug, Clone)]
pub struct DirCommand {
    listing: ProgramSpec,
}

impl DirCommand {
    pub fn new(listing: ProgramSpec) -> Self {
        Self { listing }
    }
}

impl Command for DirCommand {
    fn execute(&self, _args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let cwd = ctx.env.current_dir().ok();
        let status = ctx
            .launcher()
            .run_attached(self.listing, Attach::OUTPUT, cwd.as_deref())
            .map_err(|e| CommandError::ListingFailed(e.to_string()))?;

        if !status.success() {
            return Err(CommandError::ListingFailed(
                crate::process::ProcessError::Status(status.code()).to_string(),
            ));
        }
        Ok(Flow::Continue)
    }
}
