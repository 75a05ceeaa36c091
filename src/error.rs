#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    EndOfInput,
    Interrupted,
    FlagError(String),
    Logging(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        match err {
            rustyline::error::ReadlineError::Eof => ShellError::EndOfInput,
            rustyline::error::ReadlineError::Interrupted => ShellError::Interrupted,
            other => ShellError::Readline(other),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::EndOfInput => write!(f, "EOF"),
            ShellError::Interrupted => write!(f, "Interrupted"),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
