use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::Write;

mod cd;
mod clear;
mod dir;
mod echo;
mod exit;
mod pwd;
mod type_;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use dir::DirCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_::TypeCommand;

use crate::core::env::ShellEnv;
use crate::core::platform::Platform;
use crate::process::{ProcessError, ProcessLauncher};
use tracing::debug;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(String),
    NoSuchDirectory(String),
    NotFound(String),
    ListingFailed(String),
    IoError(std::io::Error),
}

impl CommandError {
    /// Whether the diagnostic belongs on stderr rather than stdout.
    pub fn is_stderr(&self) -> bool {
        matches!(
            self,
            CommandError::NoSuchDirectory(_) | CommandError::IoError(_)
        )
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(msg) => write!(f, "{}", msg),
            CommandError::NoSuchDirectory(dir) => {
                write!(f, "cd: {}: No such file or directory", dir)
            }
            CommandError::NotFound(cmd) => write!(f, "{}: command not found", cmd),
            CommandError::ListingFailed(reason) => write!(f, "Error running dir: {}", reason),
            CommandError::IoError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::NotFound(cmd),
            other => CommandError::IoError(std::io::Error::other(other.to_string())),
        }
    }
}

/// What the shell does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Everything a builtin may touch while it runs.
pub struct Context<'a> {
    pub env: &'a mut dyn ShellEnv,
    pub stdout: &'a mut dyn Write,
    pub executor: &'a CommandExecutor,
}

impl Context<'_> {
    pub fn platform(&self) -> Platform {
        self.executor.platform
    }

    pub fn launcher(&self) -> &ProcessLauncher {
        &self.executor.launcher
    }
}

pub trait Command {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

#[derive(Debug, Clone)]
enum CommandType {
    Exit(ExitCommand),
    Echo(EchoCommand),
    Type(TypeCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Clear(ClearCommand),
    Dir(DirCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Type(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Clear(cmd) => cmd.execute(args, ctx),
            CommandType::Dir(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Routes a command name to a builtin, or to an external process.
///
/// The registry is the only place that decides what counts as a builtin;
/// `type` asks it through [`CommandExecutor::is_builtin`].
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    launcher: ProcessLauncher,
    platform: Platform,
}

impl CommandExecutor {
    pub fn new(platform: Platform) -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
            launcher: ProcessLauncher::new(),
            platform,
        };

        executor
            .commands
            .insert("exit", CommandType::Exit(ExitCommand::new()));
        executor
            .commands
            .insert("echo", CommandType::Echo(EchoCommand::new()));
        executor
            .commands
            .insert("type", CommandType::Type(TypeCommand::new()));
        executor
            .commands
            .insert("pwd", CommandType::Pwd(PwdCommand::new()));
        executor
            .commands
            .insert("cd", CommandType::Cd(CdCommand::new()));
        executor
            .commands
            .insert("clear", CommandType::Clear(ClearCommand::new()));
        if let Some(listing) = platform.listing_program() {
            executor
                .commands
                .insert("dir", CommandType::Dir(DirCommand::new(listing)));
        }

        executor
    }

    pub fn execute(
        &self,
        command: &OsStr,
        args: &[OsString],
        env: &mut dyn ShellEnv,
        stdout: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        // Children write straight to the inherited descriptors.
        stdout.flush()?;

        let builtin = command.to_str().and_then(|name| self.commands.get(name));
        if let Some(cmd) = builtin {
            debug!(command = %command.to_string_lossy(), args = args.len(), "builtin");
            let mut ctx = Context {
                env,
                stdout,
                executor: self,
            };
            let flow = cmd.execute(args, &mut ctx)?;
            ctx.stdout.flush()?;
            Ok(flow)
        } else {
            debug!(command = %command.to_string_lossy(), args = args.len(), "external");
            let cwd = env.current_dir().ok();
            self.launcher.launch(command, args, cwd.as_deref())?;
            Ok(Flow::Continue)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::env::MemoryEnv;

    pub(crate) struct Harness {
        pub executor: CommandExecutor,
        pub env: MemoryEnv,
        pub stdout: Vec<u8>,
    }

    impl Harness {
        pub fn new(env: MemoryEnv) -> Self {
            Self {
                executor: CommandExecutor::new(Platform::Unix),
                env,
                stdout: Vec::new(),
            }
        }

        pub fn run(&mut self, command: &str, args: &[&str]) -> Result<Flow, CommandError> {
            let args: Vec<OsString> = args.iter().map(OsString::from).collect();
            self.executor
                .execute(OsStr::new(command), &args, &mut self.env, &mut self.stdout)
        }

        pub fn take_stdout(&mut self) -> String {
            String::from_utf8(std::mem::take(&mut self.stdout)).expect("utf-8 output")
        }
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new(Platform::Unix);

        for name in ["exit", "echo", "type", "pwd", "cd", "clear"] {
            assert!(executor.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!executor.is_builtin("dir"));
        assert!(!executor.is_builtin("unknown"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_dir_registered_only_with_listing() {
        let executor = CommandExecutor::new(Platform::Windows);
        for name in ["exit", "echo", "type", "pwd", "cd", "clear", "dir"] {
            assert!(executor.is_builtin(name), "{} should be a builtin", name);
        }
    }

    #[test]
    fn test_dir_without_listing_is_looked_up_on_path() -> Result<(), Box<dyn std::error::Error>> {
        let bin = tempfile::tempdir()?;
        std::fs::write(bin.path().join("dir"), "")?;

        let mut harness = Harness::new(MemoryEnv::new("/").with_var("PATH", bin.path()));
        harness.run("type", &["dir"])?;
        assert_eq!(
            harness.take_stdout(),
            format!("dir is {}\n", bin.path().join("dir").display())
        );
        Ok(())
    }

    #[test]
    fn test_execute_unknown_command() {
        let mut harness = Harness::new(MemoryEnv::new("/"));
        let result = harness.run("frobnicate123", &[]);
        assert!(matches!(result, Err(CommandError::NotFound(ref name)) if name == "frobnicate123"));
        assert_eq!(
            result.expect_err("not found").to_string(),
            "frobnicate123: command not found"
        );
    }

    #[test]
    fn test_command_error_streams() {
        assert!(CommandError::NoSuchDirectory("x".into()).is_stderr());
        assert!(CommandError::IoError(std::io::Error::other("x")).is_stderr());
        assert!(!CommandError::NotFound("x".into()).is_stderr());
        assert!(!CommandError::MissingArgument("x".into()).is_stderr());
        assert!(!CommandError::ListingFailed("x".into()).is_stderr());
    }

    #[test]
    fn test_process_error_conversion() {
        let err: CommandError = ProcessError::CommandNotFound("ls".into()).into();
        assert!(matches!(err, CommandError::NotFound(ref n) if n == "ls"));

        let err: CommandError = ProcessError::Status(Some(1)).into();
        assert!(matches!(err, CommandError::IoError(_)));
    }
}
