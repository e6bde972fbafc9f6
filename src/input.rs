//! Console input: line readers, converters and the retry loop
//!
//! Reading is behind the [`LineReader`] trait so the prompts can be driven by
//! stdin in the binary and by a [`ScriptedReader`] in tests.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::io::{self, BufRead, Stdout, Write};

use log::{debug, warn};

use crate::error::{ConsoleError, ValidationError};

/// Source of console input lines
pub trait LineReader {
    /// Read one line, or `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from the process's standard input
#[derive(Debug, Default)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Replays a fixed sequence of lines
#[derive(Debug, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// A line reader paired with the writer prompts and diagnostics go to
pub struct Console<R, W> {
    reader: R,
    out: W,
}

impl Console<StdinReader, Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(StdinReader, io::stdout())
    }
}

impl<R: LineReader, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }

    /// Show `text` without a newline and read the reply
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.reader.read_line()
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }
}

/// What [`ask_with_retries`] returns when no attempt succeeds
#[derive(Debug, Clone)]
pub enum Fallback<'a, T> {
    /// Return this value as is
    Value(T),
    /// Run this text through the converter and return the result
    Convert(&'a str),
}

impl<T: Debug> Fallback<'_, T> {
    /// Default as shown in diagnostics; whole numbers keep their `.0`
    fn label(&self) -> String {
        match self {
            Fallback::Value(value) => format!("{value:?}"),
            Fallback::Convert(text) => text.to_string(),
        }
    }
}

/// Prompt until `converter` accepts a line, at most `limit` times
///
/// Each rejected line prints `Invalid input...`. When the attempts run out,
/// or the reader has no more lines, a diagnostic naming the default is
/// printed and the fallback is returned.
pub fn ask_with_retries<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    converter: F,
    limit: u32,
    fallback: Fallback<'_, T>,
) -> Result<T, ConsoleError>
where
    R: LineReader,
    W: Write,
    T: Debug,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    let mut end_of_input = false;

    for attempt in 1..=limit {
        let Some(line) = console.prompt(prompt)? else {
            end_of_input = true;
            break;
        };
        match converter(line.trim()) {
            Ok(value) => {
                debug!("{prompt:?} answered with {value:?} on attempt {attempt}");
                return Ok(value);
            }
            Err(e) => {
                debug!("{prompt:?} rejected attempt {attempt}: {e}");
                console.say("Invalid input...")?;
            }
        }
    }

    let label = fallback.label();
    if end_of_input {
        console.say("")?;
        console.say(&format!("No more input: using {label}."))?;
    } else {
        console.say(&format!("Invalid input limit reached: using {label}."))?;
    }
    warn!("{prompt:?} fell back to default {label}");

    match fallback {
        Fallback::Value(value) => Ok(value),
        Fallback::Convert(text) => converter(text).map_err(|source| ConsoleError::InvalidDefault {
            default: text.to_string(),
            source,
        }),
    }
}

/// Parse a finite real number
pub fn parse_number(text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber(text.to_string()))
}

/// Map `yes`/`y` to true and `no`/`n` to false, ignoring case
pub fn parse_yes_no(text: &str) -> Result<bool, ValidationError> {
    match text.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(ValidationError::UnrecognizedAnswer(text.to_string())),
    }
}
