use std::{error::Error, fmt, num::ParseFloatError};

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    MalformedOperand {
        term: String,
        reason: ParseFloatError,
    },
    StackUnderflow,
    InvalidResult,
    Internal(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOperand { term, reason } => {
                write!(f, "malformed operand `{term}`: {reason}")
            }
            Self::StackUnderflow => f.write_str("invalid eval stack"),
            Self::InvalidResult => f.write_str("invalid result stack"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for ErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedOperand { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
