use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::core::platform::ProgramSpec;
use tracing::{debug, warn};

/// Which of the shell's output streams a child is connected to.
/// Unconnected streams go to the null device; stdin never reaches a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attach {
    pub stdout: bool,
    pub stderr: bool,
}

impl Attach {
    pub const OUTPUT: Attach = Attach {
        stdout: true,
        stderr: true,
    };
    pub const STDOUT_ONLY: Attach = Attach {
        stdout: true,
        stderr: false,
    };
}

fn stdio(attached: bool) -> Stdio {
    if attached {
        Stdio::inherit()
    } else {
        Stdio::null()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Runs `name` with `args` to completion. The child's exit status is
    /// deliberately ignored; only a failure to start it is an error.
    pub fn launch(
        &self,
        name: &OsStr,
        args: &[OsString],
        cwd: Option<&Path>,
    ) -> Result<(), ProcessError> {
        let mut command = Command::new(name);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let shown = name.to_string_lossy();
        let mut child = command.spawn().map_err(|e| {
            debug!(command = %shown, error = %e, "spawn failed");
            ProcessError::CommandNotFound(shown.to_string())
        })?;
        debug!(command = %shown, pid = child.id(), "spawned");

        match child.wait() {
            Ok(status) => {
                debug!(command = %shown, %status, "child exited");
                Ok(())
            }
            Err(e) => {
                warn!(command = %shown, error = %e, "wait failed");
                Err(ProcessError::CommandNotFound(shown.to_string()))
            }
        }
    }

    /// Runs a fixed platform program with the given streams attached and
    /// hands back its exit status.
    pub fn run_attached(
        &self,
        spec: ProgramSpec,
        attach: Attach,
        cwd: Option<&Path>,
    ) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(spec.program);
        command
            .args(spec.args)
            .stdin(Stdio::null())
            .stdout(stdio(attach.stdout))
            .stderr(stdio(attach.stderr));
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let mut child = command
            .spawn()
            .map_err(|_| ProcessError::CommandNotFound(spec.program.to_string()))?;
        let status = child.wait().map_err(ProcessError::Wait)?;
        debug!(program = spec.program, %status, "platform program exited");
        Ok(status)
    }
}
