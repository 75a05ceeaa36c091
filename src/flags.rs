use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Write debug logging to stderr".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    /// Marks every recognised switch as set. Anything else is ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.value = Some("true".to_string());
                }
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("Usage: venule [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            text.push_str(&format!(
                "  {}, {:<15} {}\n",
                flag.short, flag.long, flag.description
            ));
        }
        text
    }

    pub fn print_help(&self) {
        print!("{}", self.help_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_and_long_forms() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-d", "--version"]))?;
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("version"));
        assert!(!flags.is_set("help"));
        Ok(())
    }

    #[test]
    fn test_unknown_arguments_are_ignored() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--frobnicate", "x"]))?;
        assert!(!flags.is_set("debug"));
        assert!(!flags.is_set("frobnicate"));
        Ok(())
    }

    #[test]
    fn test_empty_argument_is_ignored() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["", "-d"]))?;
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
        Ok(())
    }

    #[test]
    fn test_help_lists_every_flag() {
        let help = Flags::new().help_text();
        assert!(help.starts_with("Usage: venule"));
        for long in ["--help", "--version", "--debug"] {
            assert!(help.contains(long));
        }
    }
}
