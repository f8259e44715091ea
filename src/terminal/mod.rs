//! Captured program output
//!
//! [`MockTerminal`] records everything `printf` writes, as raw bytes, so the
//! demo can be asserted on byte for byte and then rendered to a real sink.
//! Styling is applied only at render time and only to section headers.

pub mod theme;

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetForegroundColor};

use theme::DEFAULT_THEME;

const HEADER_PREFIX: &[u8] = b"----------------";

/// Mock terminal for capturing printf output
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    buffer: Vec<u8>,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print without newline
    pub fn print(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Output split on newlines; a trailing newline does not produce an empty line
    pub fn lines(&self) -> Vec<&[u8]> {
        let mut lines: Vec<&[u8]> = self.buffer.split(|b| *b == b'\n').collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Get all lines as strings (lossy, for diagnostics)
    pub fn get_output(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    /// Write the captured output to `out`
    ///
    /// Unstyled output is the capture verbatim. Styled output wraps each
    /// section header in colour and bold; other bytes are unchanged.
    pub fn render<W: Write>(&self, out: &mut W, styled: bool) -> io::Result<()> {
        if !styled {
            return out.write_all(&self.buffer);
        }

        for line in self.buffer.split_inclusive(|b| *b == b'\n') {
            let (body, newline) = match line.strip_suffix(b"\n") {
                Some(body) => (body, true),
                None => (line, false),
            };

            if is_header(body) {
                queue!(
                    out,
                    SetForegroundColor(DEFAULT_THEME.header),
                    SetAttribute(Attribute::Bold)
                )?;
                out.write_all(body)?;
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            } else {
                out.write_all(body)?;
            }

            if newline {
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

fn is_header(line: &[u8]) -> bool {
    line.starts_with(HEADER_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MockTerminal {
        let mut terminal = MockTerminal::new();
        terminal.print(b"---------------- BINARY INT-INT OPERATIONS ----------------\n");
        terminal.print(b"TIMES = 6\n");
        terminal.print(b"PLUS = \xd0\n");
        terminal
    }

    #[test]
    fn test_lines_keep_raw_bytes() {
        let terminal = sample();
        let lines = terminal.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], b"PLUS = \xd0");
        assert_eq!(terminal.get_output()[1], "TIMES = 6");
    }

    #[test]
    fn test_plain_render_is_verbatim() {
        let terminal = sample();
        let mut out = Vec::new();
        terminal.render(&mut out, false).unwrap();
        assert_eq!(out, terminal.as_bytes());
    }

    #[test]
    fn test_styled_render_wraps_headers_only() {
        let terminal = sample();
        let mut out = Vec::new();
        terminal.render(&mut out, true).unwrap();

        assert_ne!(out, terminal.as_bytes());
        assert!(out.starts_with(b"\x1b["));
        assert!(out.ends_with(b"TIMES = 6\nPLUS = \xd0\n"));
        let header = b"---------------- BINARY INT-INT OPERATIONS ----------------";
        assert!(out.windows(header.len()).any(|w| w == header));
    }

    #[test]
    fn test_render_without_trailing_newline() {
        let mut terminal = MockTerminal::new();
        terminal.print(b"EQ = 0");
        let mut out = Vec::new();
        terminal.render(&mut out, true).unwrap();
        assert_eq!(out, b"EQ = 0".to_vec());
    }
}
