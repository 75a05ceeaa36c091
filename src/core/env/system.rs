use super::ShellEnv;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl ShellEnv for SystemEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        env::var_os(name).filter(|value| !value.is_empty())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn set_current_dir(&mut self, dir: &Path) -> io::Result<()> {
        env::set_current_dir(dir)
    }
}
