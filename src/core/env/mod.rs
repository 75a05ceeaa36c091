mod memory;
mod system;

pub use memory::MemoryEnv;
pub use system::SystemEnv;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Process state the builtins and the resolver are allowed to touch.
///
/// Everything that would otherwise be read from globals (environment
/// variables, the working directory) goes through this trait, so the
/// dispatcher can run against [`MemoryEnv`] without mutating the real process.
pub trait ShellEnv {
    /// Value of `name`. Unset and empty variables both yield `None`.
    fn var(&self, name: &str) -> Option<OsString>;

    fn current_dir(&self) -> io::Result<PathBuf>;

    fn set_current_dir(&mut self, dir: &Path) -> io::Result<()>;
}
