//! Collection of the run parameters from an interactive session.
//!
//! Validation is kept separate from prompting: [`parse_sequence_length`]
//! returns a [`LengthError`] for bad input, and [`Prompter::prompt_length`]
//! re-prompts on that error a bounded number of times.

use crate::data::err::{EXIT_USAGE, GetCode};
use std::{
    io::{BufRead, Write},
    num::NonZeroUsize,
};
use thiserror::Error;

/// How many times the length prompt is shown before giving up.
pub const MAX_LENGTH_ATTEMPTS: usize = 10;

pub const PROMPT_LENGTH: &str = "Enter the sequence length: ";
pub const PROMPT_ID: &str = "Enter the sequence ID: ";
pub const PROMPT_DESCRIPTION: &str = "Provide a description of the sequence: ";
pub const PROMPT_NAME: &str = "Enter your name: ";

/// Reasons a sequence length was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("the length must be positive, got {0}")]
    NotPositive(i128),
    #[error("'{0}' is too large for a sequence length")]
    TooLarge(String),
}

impl GetCode for LengthError {
    fn get_code(&self) -> i32 {
        EXIT_USAGE
    }
}

/// Failures while collecting input interactively.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input ended before a value was given for: {0}")]
    UnexpectedEof(String),
    #[error("no valid sequence length after {0} attempts")]
    TooManyAttempts(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GetCode for InputError {
    fn get_code(&self) -> i32 {
        match self {
            InputError::Io(e) => e.get_code(),
            InputError::UnexpectedEof(_) | InputError::TooManyAttempts(_) => EXIT_USAGE,
        }
    }
}

/// Parses a positive sequence length, ignoring surrounding whitespace.
///
/// ## Errors
///
/// Non-integer text gives [`LengthError::NotAnInteger`], zero or negative
/// values give [`LengthError::NotPositive`], and values that do not fit in a
/// `usize` give [`LengthError::TooLarge`].
pub fn parse_sequence_length(text: &str) -> Result<NonZeroUsize, LengthError> {
    let text = text.trim();
    let value: i128 = text.parse().map_err(|_| LengthError::NotAnInteger(text.to_string()))?;

    if value <= 0 {
        return Err(LengthError::NotPositive(value));
    }

    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| LengthError::TooLarge(text.to_string()))
}

/// Asks questions on `output` and reads the answers from `input`.
pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Shows `message` and returns the next line without its line break.
    ///
    /// ## Errors
    ///
    /// Returns [`InputError::UnexpectedEof`] if the input is exhausted, or
    /// [`InputError::Io`] if reading or writing fails.
    pub fn prompt_line(&mut self, message: &str) -> Result<String, InputError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof(message.trim_end_matches([' ', ':']).to_string()));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompts for a sequence length until a positive integer is entered.
    ///
    /// ## Errors
    ///
    /// Returns [`InputError::TooManyAttempts`] after [`MAX_LENGTH_ATTEMPTS`]
    /// rejected entries, or any error from [`prompt_line`].
    ///
    /// [`prompt_line`]: Prompter::prompt_line
    pub fn prompt_length(&mut self) -> Result<NonZeroUsize, InputError> {
        for attempt in 1..=MAX_LENGTH_ATTEMPTS {
            let line = self.prompt_line(PROMPT_LENGTH)?;
            match parse_sequence_length(&line) {
                Ok(length) => return Ok(length),
                Err(e) => {
                    log::debug!("Rejected length on attempt {attempt}: {e}");
                    let hint = match e {
                        LengthError::NotPositive(_) => "Please enter a positive integer.",
                        LengthError::NotAnInteger(_) | LengthError::TooLarge(_) => {
                            "Invalid input. Please enter an integer."
                        }
                    };
                    writeln!(self.output, "{hint}")?;
                }
            }
        }

        Err(InputError::TooManyAttempts(MAX_LENGTH_ATTEMPTS))
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
