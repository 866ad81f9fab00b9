use clap::error::{ContextKind, ErrorKind};
use std::io;
use thiserror::Error;

/// Every way an invocation can fail. The variant decides the exit status.
#[derive(Debug, Error)]
pub enum ArcError {
    #[error("Not enough arguments")]
    MissingArguments,
    #[error("Cannot read \"{value}\" as {expected}")]
    NumericParse { expected: &'static str, value: String },
    #[error("Cannot determine arc direction from \"{0}\"")]
    InvalidDirection(String),
    #[error("{0}")]
    Unexpected(String),
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl ArcError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ArcError::MissingArguments | ArcError::NumericParse { .. } => 1,
            ArcError::InvalidDirection(_) | ArcError::Unexpected(_) | ArcError::Io(_) => 2,
        }
    }

    // our value parsers come back wrapped as ValueValidation, dig them out again
    pub fn from_clap(err: clap::Error) -> ArcError {
        match err.kind() {
            ErrorKind::MissingRequiredArgument => ArcError::MissingArguments,
            ErrorKind::ValueValidation => {
                match std::error::Error::source(&err).and_then(|s| s.downcast_ref::<ArcError>()) {
                    Some(ArcError::NumericParse { expected, value }) => ArcError::NumericParse {
                        expected: *expected,
                        value: value.clone(),
                    },
                    Some(ArcError::InvalidDirection(token)) => ArcError::InvalidDirection(token.clone()),
                    _ => ArcError::Unexpected(describe(&err)),
                }
            }
            _ => ArcError::Unexpected(describe(&err)),
        }
    }
}

fn describe(err: &clap::Error) -> String {
    let what = err.kind().as_str().unwrap_or("Invalid arguments");
    match err.get(ContextKind::InvalidArg) {
        Some(arg) => format!("{what}: {arg}"),
        None => what.to_string(),
    }
}
