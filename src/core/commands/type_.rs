use super::{Command, CommandError, Context, Flow};
use std::ffi::OsString;
use crate::path::ExecutableResolver;
use crate::shell::os_bytes;

/// Tells whether a name is a builtin or where it lives on the search path.
#[derive(Debug, Clone)]
pub struct TypeCommand {
    resolver: ExecutableResolver,
}

impl Default for TypeCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCommand {
    pub fn new() -> Self {
        Self {
            resolver: ExecutableResolver::new(),
        }
    }
}

impl Command for TypeCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let name = args.first().ok_or_else(|| {
            CommandError::MissingArgument("type: no argument provided".to_string())
        })?;

        ctx.stdout.write_all(&os_bytes(name))?;
        if name.to_str().is_some_and(|n| ctx.executor.is_builtin(n)) {
            ctx.stdout.write_all(b" is a shell builtin\n")?;
        } else {
            match self.resolver.resolve(name, &*ctx.env) {
                Some(path) => {
                    ctx.stdout.write_all(b" is ")?;
                    ctx.stdout.write_all(&os_bytes(path.as_os_str()))?;
                    ctx.stdout.write_all(b"\n")?;
                }
                None => ctx.stdout.write_all(b": not found\n")?,
            }
        }
        Ok(Flow::Continue)
    }
}
