//! Operator prompts
//!
//! All interaction goes through [`Console`], which owns the input source and
//! output sink so a run can be driven by canned input.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use colored::Colorize;

use crate::error::{Error, Result};
use crate::models::Organization;

/// Rejected organization choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotANumber,
    OutOfRange,
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input runs out mid-prompt
            writeln!(self.writer)?;
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", message.as_ref())?;
        Ok(())
    }

    pub fn warn(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.say(format!("{} {}", "warning:".yellow().bold(), message.as_ref()))
    }

    pub fn fail(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.say(format!("{} {}", "error:".red().bold(), message.as_ref()))
    }

    pub fn success(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.say(message.as_ref().green().to_string())
    }

    /// Read a 1-based choice in `1..=count`, re-prompting until one is given.
    /// Returns the zero-based index.
    pub fn read_validated_choice(&mut self, prompt: &str, count: usize) -> Result<usize> {
        loop {
            let line = self.ask(prompt)?;
            match parse_choice(&line, count) {
                Ok(index) => return Ok(index),
                Err(InputError::NotANumber) => self.fail("Please enter a valid number.")?,
                Err(InputError::OutOfRange) => self.fail("Invalid number, try again.")?,
            }
        }
    }

    /// Show `organizations` as a numbered list and let the operator pick one.
    pub fn select_organization<'a>(
        &mut self,
        organizations: &'a [Organization],
    ) -> Result<&'a Organization> {
        self.say("\nAvailable organizations:")?;
        for (i, org) in organizations.iter().enumerate() {
            self.say(format!("{}. {} (ID: {})", i + 1, org.name, org.id))?;
        }
        let index = self.read_validated_choice(
            "\nSelect the number of the target organization: ",
            organizations.len(),
        )?;
        Ok(&organizations[index])
    }

    /// Yes/no question; only "y" (any case) counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

pub fn parse_choice(input: &str, count: usize) -> std::result::Result<usize, InputError> {
    let choice: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if choice >= 1 && (choice as u64) <= count as u64 {
        Ok(choice as usize - 1)
    } else {
        Err(InputError::OutOfRange)
    }
}
