use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Splits a raw command line on single spaces after trimming the ends.
///
/// Runs of spaces yield empty tokens, and an empty line yields one empty
/// token, so there is always a command name. Bytes are kept as they came in;
/// nothing has to be valid UTF-8.
pub fn tokenize(line: &[u8]) -> Vec<OsString> {
    trim_ascii(line)
        .split(|&b| b == b' ')
        .map(|token| bytes_to_os_string(token.to_vec()))
        .collect()
}

/// Command name and argument list.
pub fn split_command(tokens: &[OsString]) -> (&OsStr, &[OsString]) {
    match tokens.split_first() {
        Some((name, args)) => (name.as_os_str(), args),
        None => (OsStr::new(""), &[]),
    }
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Raw bytes of `s` for writing to an output stream.
#[cfg(unix)]
pub fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
pub fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}
