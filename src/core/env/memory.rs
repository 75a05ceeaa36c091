use super::ShellEnv;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment held entirely in memory. Directory changes are still checked
/// against the real filesystem, but never touch the process working directory.
#[derive(Debug, Clone)]
pub struct MemoryEnv {
    vars: HashMap<String, OsString>,
    cwd: PathBuf,
}

impl MemoryEnv {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            cwd: cwd.into(),
        }
    }

    pub fn with_var(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.set_var(name, value);
        self
    }

    pub fn set_var(&mut self, name: &str, value: impl Into<OsString>) {
        self.vars.insert(name.to_string(), value.into());
    }
}

impl ShellEnv for MemoryEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn set_current_dir(&mut self, dir: &Path) -> io::Result<()> {
        // chdir("") is ENOENT, while joining "" onto the cwd would succeed.
        if dir.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "empty path"));
        }

        let target = fs::canonicalize(self.cwd.join(dir))?;
        if !target.is_dir() {
            return Err(io::Error::other(format!(
                "{}: not a directory",
                target.display()
            )));
        }

        self.cwd = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars_and_empty_values() {
        let mut env = MemoryEnv::new("/").with_var("HOME", "/home/test");
        env.set_var("EMPTY", "");
        assert_eq!(env.var("HOME"), Some(OsString::from("/home/test")));
        assert!(env.var("EMPTY").is_none());
        assert!(env.var("UNSET").is_none());
    }

    #[test]
    fn test_relative_chdir() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        fs::create_dir(root.path().join("nested"))?;

        let mut env = MemoryEnv::new(root.path());
        env.set_current_dir(Path::new("nested"))?;
        assert_eq!(
            env.current_dir()?,
            fs::canonicalize(root.path().join("nested"))?
        );

        env.set_current_dir(Path::new(".."))?;
        assert_eq!(env.current_dir()?, fs::canonicalize(root.path())?);
        Ok(())
    }

    #[test]
    fn test_chdir_rejects_files_and_missing_paths() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        fs::write(root.path().join("plain"), "x")?;

        let mut env = MemoryEnv::new(root.path());
        assert!(env.set_current_dir(Path::new("plain")).is_err());
        assert!(env.set_current_dir(Path::new("missing")).is_err());
        assert!(env.set_current_dir(Path::new("")).is_err());
        assert_eq!(env.current_dir()?, root.path());
        Ok(())
    }
}
