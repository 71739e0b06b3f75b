use rustyline::error::ReadlineError;
use std::io;
use symbolik_parser::Error as ParseError;

/// Utility enum to package errors that can occur while reading and processing a line.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Parse(ParseError),

    /// The line editor failed to read a line.
    Readline(ReadlineError),

    /// Reading from stdin failed.
    Io(io::Error),
}

impl Error {
    /// Returns true if this error should end the session instead of being reported.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Parse(_))
    }

    /// Report this error to stderr.
    ///
    /// Parse errors are rendered as reports highlighting the offending input; other errors are
    /// printed as plain messages.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{}", io_err);
                }
            },
            Self::Readline(ReadlineError::Eof | ReadlineError::Interrupted) => (),
            Self::Readline(err) => eprintln!("{}", err),
            Self::Io(err) => eprintln!("{}", err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
