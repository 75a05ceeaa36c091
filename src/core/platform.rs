/// A program plus the fixed arguments it is started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSpec {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Host-specific behaviour, picked once when the shell starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn clear_program(&self) -> ProgramSpec {
        match self {
            Platform::Windows => ProgramSpec {
                program: "cmd",
                args: &["/c", "cls"],
            },
            Platform::Unix => ProgramSpec {
                program: "clear",
                args: &[],
            },
        }
    }

    /// Bare directory listing. Only Windows has one.
    pub fn listing_program(&self) -> Option<ProgramSpec> {
        match self {
            Platform::Windows => Some(ProgramSpec {
                program: "cmd",
                args: &["/c", "dir /b"],
            }),
            Platform::Unix => None,
        }
    }

    pub fn home_var(&self) -> &'static str {
        match self {
            Platform::Windows => "USERPROFILE",
            Platform::Unix => "HOME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_target() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        };
        assert_eq!(Platform::detect(), expected);
    }

    #[test]
    fn test_windows_capabilities() {
        let platform = Platform::Windows;
        assert_eq!(platform.clear_program().program, "cmd");
        assert_eq!(platform.clear_program().args, &["/c", "cls"]);
        let listing = platform.listing_program().expect("windows lists directories");
        assert_eq!(listing.args, &["/c", "dir /b"]);
        assert_eq!(platform.home_var(), "USERPROFILE");
    }

    #[test]
    fn test_unix_capabilities() {
        let platform = Platform::Unix;
        assert_eq!(platform.clear_program().program, "clear");
        assert!(platform.clear_program().args.is_empty());
        assert!(platform.listing_program().is_none());
        assert_eq!(platform.home_var(), "HOME");
    }
}
