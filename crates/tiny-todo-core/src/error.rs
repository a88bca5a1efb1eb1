use std::fmt;
use std::io;
use std::path::PathBuf;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidArgument,
    IdsExhausted,
    StoreParseFailed,
    StoreIoFailed,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidArgument => "E1001",
            Self::IdsExhausted => "E2001",
            Self::StoreParseFailed => "E3001",
            Self::StoreIoFailed => "E5001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid argument",
            Self::IdsExhausted => "No todo ids left",
            Self::StoreParseFailed => "Todo file parse error",
            Self::StoreIoFailed => "Todo file I/O failed",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument => Some("Todo text must contain non-whitespace characters."),
            Self::IdsExhausted => Some("Start a new todo file; this one has used every id."),
            Self::StoreParseFailed => {
                Some("Fix the JSON in the todo file or move it aside to start fresh.")
            }
            Self::StoreIoFailed => Some("Check the path, disk space, and write permissions."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by [`crate::store::TodoStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// Caller supplied a value the store refuses, e.g. blank todo text.
    #[error("{}: {reason}", ErrorCode::InvalidArgument.code())]
    InvalidArgument { reason: &'static str },

    /// The id counter cannot advance past its current value.
    #[error("{}: id space exhausted at {next_id}", ErrorCode::IdsExhausted.code())]
    IdsExhausted { next_id: u64 },

    /// Reading or writing the todo file failed.
    #[error("{}: {} ({source})", ErrorCode::StoreIoFailed.code(), .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The todo file exists but does not hold a valid document.
    #[error("{}: failed to parse {}: {reason}", ErrorCode::StoreParseFailed.code(), .path.display())]
    Parse { path: PathBuf, reason: String },
}

impl TodoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::IdsExhausted { .. } => ErrorCode::IdsExhausted,
            Self::Io { .. } => ErrorCode::StoreIoFailed,
            Self::Parse { .. } => ErrorCode::StoreParseFailed,
        }
    }

    /// Optional remediation hint for operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}
