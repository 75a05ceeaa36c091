use std::io::{self, IsTerminal, Write};

mod reader;
mod tokenizer;

pub use reader::{EditorReader, LineReader, PlainReader};
pub use tokenizer::{os_bytes, split_command, tokenize};

use crate::core::commands::{CommandExecutor, Flow};
use crate::core::env::{ShellEnv, SystemEnv};
use crate::core::platform::Platform;
use crate::error::ShellError;
use tracing::debug;

pub const PROMPT: &str = "$ ";

pub struct Shell {
    reader: Box<dyn LineReader>,
    env: Box<dyn ShellEnv>,
    executor: CommandExecutor,
}

impl Shell {
    /// A shell on the real process: terminal editing when stdin is a tty,
    /// a plain line reader otherwise.
    pub fn new() -> Result<Self, ShellError> {
        let reader: Box<dyn LineReader> = if io::stdin().is_terminal() {
            Box::new(EditorReader::new()?)
        } else {
            Box::new(PlainReader::stdin())
        };

        Ok(Self::with_parts(
            reader,
            Box::new(SystemEnv::new()),
            CommandExecutor::new(Platform::detect()),
        ))
    }

    pub fn with_parts(
        reader: Box<dyn LineReader>,
        env: Box<dyn ShellEnv>,
        executor: CommandExecutor,
    ) -> Self {
        Self {
            reader,
            env,
            executor,
        }
    }

    /// Runs until `exit` and returns the requested exit code.
    pub fn run(&mut self) -> i32 {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    pub fn run_with(&mut self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32 {
        loop {
            let line = match self.reader.read_line(PROMPT, stdout) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "read failed");
                    report(stdout, &e);
                    continue;
                }
            };

            if let Some(code) = self.execute_line(&line, stdout, stderr) {
                return code;
            }
        }
    }

    /// Runs one line. `Some(code)` means the shell should exit.
    pub fn execute_line(
        &mut self,
        line: &[u8],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Option<i32> {
        let tokens = tokenize(line);
        let (command, args) = split_command(&tokens);

        match self
            .executor
            .execute(command, args, self.env.as_mut(), stdout)
        {
            Ok(Flow::Exit(code)) => Some(code),
            Ok(Flow::Continue) => None,
            Err(e) if e.is_stderr() => {
                report(stderr, &e);
                None
            }
            Err(e) => {
                report(stdout, &e);
                None
            }
        }
    }
}

fn report(stream: &mut dyn Write, err: &dyn std::fmt::Display) {
    // Nowhere left to report a failing stream to.
    let _ = writeln!(stream, "{}", err).and_then(|()| stream.flush());
}
