//! # Console I/O Boundary
//!
//! The only code in the workspace that reads or writes the terminal.
//!
//! ## Prompt Loop Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Prompt, One Parser                              │
//! │                                                                         │
//! │  prompt_phone("Enter phone number: ")                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌── loop ─────────────────────────────────────────────┐               │
//! │  │  write prompt                                        │               │
//! │  │  read one line   ── EOF? ──► io::Error, session ends │               │
//! │  │  validation::parse_phone(line)                       │               │
//! │  │       ├── Ok(v)  ──► return v                        │               │
//! │  │       └── Err(e) ──► write e, loop again             │               │
//! │  └──────────────────────────────────────────────────────┘               │
//! │                                                                         │
//! │  All parsing lives in slice-core::validation; the loop here is a       │
//! │  thin caller. Malformed input never escapes the prompt.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The struct is generic over reader and writer so tests can drive whole
//! sessions from a `Cursor` and capture the output in a `Vec<u8>`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use slice_core::validation;
use slice_core::{Money, Role};

/// The console boundary: prompts, validated reads, formatted writes.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over any buffered reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Consumes the console and returns the writer (tests inspect the
    /// captured output this way).
    pub fn into_writer(self) -> W {
        self.writer
    }

    // =========================================================================
    // Writing
    // =========================================================================

    /// Writes text without a trailing newline (used for prompts).
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// Writes one line.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Reads one raw line, without the trailing newline.
    ///
    /// EOF is an error: an exhausted input stream must end the session
    /// instead of spinning a re-prompt loop forever.
    fn read_raw_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prompts once and returns the raw line; may be empty.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        self.write(prompt)?;
        self.read_raw_line()
    }

    /// Prompts until a non-empty value is entered. Returns it trimmed.
    pub fn prompt_nonempty(&mut self, prompt: &str, field: &'static str) -> io::Result<String> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_nonempty(&line, field) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a valid ten-digit phone number is entered.
    pub fn prompt_phone(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_phone(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a whole number is entered.
    pub fn prompt_integer(&mut self, prompt: &str, field: &'static str) -> io::Result<i64> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_integer(&line, field) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a whole number within `min..=max` is entered.
    pub fn prompt_choice_within(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_integer_within(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a positive whole-number quantity is entered.
    pub fn prompt_quantity(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_quantity(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a non-negative decimal price is entered.
    pub fn prompt_price(&mut self, prompt: &str) -> io::Result<Money> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match validation::parse_price(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }

    /// Prompts until a recognized role name is entered.
    pub fn prompt_role(&mut self, prompt: &str) -> io::Result<Role> {
        loop {
            self.write(prompt)?;
            let line = self.read_raw_line()?;
            match Role::from_str(&line) {
                Ok(role) => return Ok(role),
                Err(err) => self.write_line(&err.to_string())?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.writer.clone()).unwrap()
    }

    #[test]
    fn test_nonempty_reprompts_until_valid() {
        let mut c = console("\n   \nalice\n");
        let value = c.prompt_nonempty("Login: ", "Login").unwrap();
        assert_eq!(value, "alice");
        // Two invalid attempts produced two messages.
        assert_eq!(output(&c).matches("Login cannot be empty").count(), 2);
    }

    #[test]
    fn test_phone_reprompts_on_bad_format() {
        let mut c = console("123\n123-456-7890\n1234567890\n");
        let value = c.prompt_phone("Phone: ").unwrap();
        assert_eq!(value, "1234567890");
    }

    #[test]
    fn test_choice_within_rejects_out_of_range() {
        let mut c = console("0\n5\n2\n");
        let value = c.prompt_choice_within("Choice: ", 1, 2).unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn test_price_rejects_negative_then_accepts() {
        let mut c = console("-1.50\n9.99\n");
        let value = c.prompt_price("Price: ").unwrap();
        assert_eq!(value.cents(), 999);
    }

    #[test]
    fn test_eof_is_an_error_not_a_spin() {
        let mut c = console("");
        let err = c.prompt_nonempty("Login: ", "Login").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_line_allows_empty() {
        let mut c = console("\n");
        assert_eq!(c.prompt_line("Description: ").unwrap(), "");
    }
}
