//! Terminal prompter over any buffered reader and writer.

use guess_core::{Error, Prompter, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads answers line by line and writes prompts without a trailing newline.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD, so the line fails token
        // parsing and is asked again instead of ending the game.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
