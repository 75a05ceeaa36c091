use std::fmt;

mod launcher;

pub use launcher::{Attach, ProcessLauncher};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Wait(std::io::Error),
    Status(Option<i32>),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
            ProcessError::Status(Some(code)) => write!(f, "exit status {}", code),
            ProcessError::Status(None) => write!(f, "terminated by signal"),
        }
    }
}

impl std::error::Error for ProcessError {}
