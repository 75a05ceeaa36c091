use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;

#[derive(Debug, Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }

    /// 0 without an argument, 1 when the argument is not an integer.
    pub fn exit_code(args: &[OsString]) -> i32 {
        match args.first() {
            None => 0,
            Some(arg) => arg.to_str().and_then(|a| a.parse().ok()).unwrap_or(1),
        }
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Exit(Self::exit_code(args)))
    }
}
