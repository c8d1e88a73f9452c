use std::io::{BufRead, Write};

use crate::errors::AppError;

/// Line-oriented terminal seam used by the menu and the command handlers.
pub trait Console {
    /// Shows `prompt` (no newline) and returns the next input line, trimmed.
    ///
    /// Fails with [`AppError::EndOfInput`] once the input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<String, AppError>;

    fn print_line(&mut self, line: &str) -> Result<(), AppError>;
}

/// [`Console`] over any reader/writer pair: stdin/stdout in the binary,
/// in-memory buffers in tests.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(AppError::EndOfInput);
        }
        Ok(input.trim().to_string())
    }

    fn print_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn prompt_trims_and_echoes_prompt() -> Result<(), AppError> {
        let mut console = Terminal::new(Cursor::new("  Alice \r\n"), Vec::new());

        let line = console.prompt("Name: ")?;
        console.print_line("done")?;

        assert_eq!(line, "Alice");
        let written = console.into_writer();
        assert_eq!(String::from_utf8_lossy(&written), "Name: done\n");
        Ok(())
    }

    #[test]
    fn exhausted_input_is_end_of_input() -> Result<(), AppError> {
        let mut console = Terminal::new(Cursor::new("only\n"), Vec::new());

        assert_eq!(console.prompt("> ")?, "only");
        assert!(matches!(console.prompt("> "), Err(AppError::EndOfInput)));
        Ok(())
    }

    #[test]
    fn blank_line_is_not_end_of_input() -> Result<(), AppError> {
        let mut console = Terminal::new(Cursor::new("\n"), Vec::new());

        assert_eq!(console.prompt("> ")?, "");
        Ok(())
    }
}
