use colored::Colorize;
use custdesk::error::{CrmError, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Stdin};

const INVALID_INPUT: &str = "Invalid input, please try again.";

/// Line-oriented terminal session: prompts go to `output`, answers come from `input`.
///
/// Reads are the session's suspension points. Nothing else runs while a
/// prompt is waiting.
pub struct Terminal<R, W> {
    input: BufReader<R>,
    output: W,
    screen: Option<console::Term>,
}

impl Terminal<Stdin, std::io::Stdout> {
    pub fn stdio() -> Self {
        let mut terminal = Terminal::new(tokio::io::stdin(), std::io::stdout());
        let term = console::Term::stdout();
        terminal.screen = term.is_term().then_some(term);
        terminal
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: BufReader::new(input),
            output,
            screen: None,
        }
    }

    /// Print `prompt` and wait for one line, returned without its line terminator.
    ///
    /// Fails with [`CrmError::InputClosed`] once input is exhausted.
    pub async fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            writeln!(self.output)?;
            return Err(CrmError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer.
    pub async fn prompt_until<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let line = self.read_line(prompt).await?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            writeln!(self.output, "{}", INVALID_INPUT.yellow())?;
        }
    }

    /// No-op unless attached to a real terminal.
    pub fn clear_screen(&mut self) -> Result<()> {
        if let Some(term) = &self.screen {
            term.clear_screen()?;
        }
        Ok(())
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
