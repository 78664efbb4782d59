use super::Error;

/// Error when schema source text is not syntactically valid.
///
/// Only raised when the whole input cannot be parsed. Declarations that parse
/// but do not describe a table are skipped without an error.
#[derive(Debug)]
pub(super) struct ParseFailure {
    message: Box<str>,
}

impl std::error::Error for ParseFailure {}

impl core::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "parse failure: {}", self.message)
    }
}

impl Error {
    /// Creates a parse failure carrying the parser's message.
    pub fn parse_failure(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ParseFailure(ParseFailure {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a parse failure.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ParseFailure(_))
    }
}
