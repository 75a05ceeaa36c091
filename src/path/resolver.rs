use crate::core::env::ShellEnv;
use std::env;
use std::ffi::OsStr;
use std::path::{self, PathBuf};
use tracing::trace;

/// Suffixes tried for every search-path entry, in order.
pub const EXECUTABLE_SUFFIXES: [&str; 4] = ["", ".exe", ".bat", ".cmd"];

const SEARCH_PATH_VAR: &str = "PATH";

/// Looks a bare command name up on the search path.
///
/// Nothing is cached: each call re-reads `PATH` from the context and
/// re-checks the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableResolver;

impl ExecutableResolver {
    pub fn new() -> Self {
        Self
    }

    /// First existing `dir/name+suffix`, directories outermost.
    ///
    /// Only bare names are looked up: an empty name or one containing a path
    /// separator never resolves. An unset `PATH` behaves like a single empty
    /// entry, so the name is looked up relative to the context's working
    /// directory.
    pub fn resolve(&self, name: &OsStr, env: &dyn ShellEnv) -> Option<PathBuf> {
        if !is_bare_name(name) {
            trace!(name = %name.to_string_lossy(), "not a bare name");
            return None;
        }

        let search_path = env.var(SEARCH_PATH_VAR).unwrap_or_default();
        let cwd = env.current_dir().ok();

        for dir in env::split_paths(&search_path) {
            for suffix in EXECUTABLE_SUFFIXES {
                let mut file = name.to_os_string();
                file.push(suffix);
                let candidate = dir.join(file);
                let on_disk = match &cwd {
                    Some(cwd) if candidate.is_relative() => cwd.join(&candidate),
                    _ => candidate.clone(),
                };
                trace!(candidate = %on_disk.display(), "checking");
                if on_disk.exists() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

fn is_bare_name(name: &OsStr) -> bool {
    !name.is_empty() && !name.to_string_lossy().chars().any(path::is_separator)
}
