use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Source of command lines. Implementations show `prompt` before reading.
///
/// Lines come back as raw bytes, trailing newline included when present.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str, stdout: &mut dyn Write)
        -> Result<Vec<u8>, ShellError>;
}

/// Terminal input through rustyline. History is never recorded.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let config = rustyline::Config::builder()
            .auto_add_history(false)
            .build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(
        &mut self,
        prompt: &str,
        stdout: &mut dyn Write,
    ) -> Result<Vec<u8>, ShellError> {
        stdout.flush()?;
        Ok(self.editor.readline(prompt)?.into_bytes())
    }
}

/// Plain buffered reader for pipes, files and tests.
pub struct PlainReader<R> {
    input: R,
}

impl<R: BufRead> PlainReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl PlainReader<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineReader for PlainReader<R> {
    fn read_line(
        &mut self,
        prompt: &str,
        stdout: &mut dyn Write,
    ) -> Result<Vec<u8>, ShellError> {
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_then_line() -> Result<(), ShellError> {
        let mut reader = PlainReader::new(&b"echo hi\npwd\n"[..]);
        let mut out = Vec::new();

        assert_eq!(reader.read_line("$ ", &mut out)?, b"echo hi\n");
        assert_eq!(reader.read_line("$ ", &mut out)?, b"pwd\n");
        assert_eq!(out, b"$ $ ");
        Ok(())
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = PlainReader::new(&b""[..]);
        let mut out = Vec::new();
        let err = reader.read_line("$ ", &mut out).expect_err("eof");
        assert!(matches!(err, ShellError::EndOfInput));
    }

    #[test]
    fn test_last_line_without_newline() -> Result<(), ShellError> {
        let mut reader = PlainReader::new(&b"exit 3"[..]);
        let mut out = Vec::new();
        assert_eq!(reader.read_line("$ ", &mut out)?, b"exit 3");
        Ok(())
    }

    #[test]
    fn test_non_utf8_line_is_returned() -> Result<(), ShellError> {
        let mut reader = PlainReader::new(&b"echo caf\xe9\nexit\n"[..]);
        let mut out = Vec::new();
        assert_eq!(reader.read_line("$ ", &mut out)?, b"echo caf\xe9\n");
        assert_eq!(reader.read_line("$ ", &mut out)?, b"exit\n");
        Ok(())
    }
}
