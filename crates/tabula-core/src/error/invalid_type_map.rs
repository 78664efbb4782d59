use super::Error;

/// Error when a type-mapping table fails validation.
///
/// A row must cover every shared type, may not contain blank base types, and
/// may only list dialect-specific types that belong to its own dialect.
#[derive(Debug)]
pub(super) struct InvalidTypeMap {
    message: Box<str>,
}

impl std::error::Error for InvalidTypeMap {}

impl core::fmt::Display for InvalidTypeMap {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid type map: {}", self.message)
    }
}

impl Error {
    pub fn invalid_type_map(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTypeMap(InvalidTypeMap {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_type_map(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTypeMap(_))
    }
}
