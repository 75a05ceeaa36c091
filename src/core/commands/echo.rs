use super::{Command, CommandError, Context, Flow};
use crate::shell::os_bytes;
use std::ffi::OsString;

#[derive(Debug, Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        // Written as bytes so non-UTF-8 arguments come out unchanged.
        let mut line = Vec::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            line.extend_from_slice(&os_bytes(arg));
        }
        line.push(b'\n');
        ctx.stdout.write_all(&line)?;
        Ok(Flow::Continue)
    }
}
