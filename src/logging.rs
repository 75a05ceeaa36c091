use crate::error::ShellError;
use tracing::Level;

/// Installs the global subscriber. Log lines always go to stderr so that
/// command output on stdout is never interleaved with diagnostics.
pub fn init(debug: bool) -> Result<(), ShellError> {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
