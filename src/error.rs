use std::{error, fmt};

/// What went wrong, in a shape callers can match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed range syntax or a bound matching no precision pattern.
    Grammar { source: String, offset: usize },
    /// Both bounds are concrete and the lower one is after the upper one.
    Ordering { lower: String, upper: String },
    /// Binary input starts with a tag byte outside the six known layouts.
    UnknownTag(u8),
    /// Binary input ends before the layout announced by its tag is complete.
    Truncated { expected: usize, actual: usize },
    InvalidArgument,
    Other,
}

pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(message: &str) -> Self {
        Self {
            kind: ErrorKind::Other,
            message: message.into(),
            source: None,
        }
    }

    pub fn grammar(source: &str, offset: usize, message: &str) -> Self {
        Self {
            kind: ErrorKind::Grammar {
                source: source.to_owned(),
                offset,
            },
            message: format!(
                "cannot parse date range '{}' at offset {}: {}",
                source, offset, message
            ),
            source: None,
        }
    }

    pub fn ordering(lower: String, upper: String) -> Self {
        let message = format!(
            "lower bound of a date range must not be after its upper bound, got [{} TO {}]",
            lower, upper
        );
        Self {
            kind: ErrorKind::Ordering { lower, upper },
            message,
            source: None,
        }
    }

    pub fn unknown_tag(tag: u8) -> Self {
        Self {
            kind: ErrorKind::UnknownTag(tag),
            message: format!("unknown date range type tag {}", tag),
            source: None,
        }
    }

    pub fn truncated(expected: usize, actual: usize) -> Self {
        Self {
            kind: ErrorKind::Truncated { expected, actual },
            message: format!(
                "date range encoding too short: expected {} bytes, got {}",
                expected, actual
            ),
            source: None,
        }
    }

    pub fn invalid_argument(message: String) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message,
            source: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Character offset into the parsed text, for grammar errors only.
    pub fn offset(&self) -> Option<usize> {
        match self.kind {
            ErrorKind::Grammar { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}. Source error: {}", self.message, err),
            None => write!(f, "{}", self.message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self {
            kind: ErrorKind::Other,
            message,
            source: None,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl<E: error::Error + Send + Sync + 'static> From<(&str, E)> for Error {
    fn from((message, err): (&str, E)) -> Self {
        Self {
            kind: ErrorKind::Other,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
