use super::Error;
use crate::Dialect;

/// Error when a `BIT` column wider than one bit targets a dialect that only
/// has a boolean-like single bit type.
#[derive(Debug)]
pub(super) struct UnsupportedMultiBitField {
    dialect: Dialect,
    length: u32,
}

impl std::error::Error for UnsupportedMultiBitField {}

impl core::fmt::Display for UnsupportedMultiBitField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "multi-bit fields not supported for {} (requested BIT({}))",
            self.dialect, self.length
        )
    }
}

impl Error {
    pub fn unsupported_multi_bit_field(dialect: Dialect, length: u32) -> Error {
        Error::from(super::ErrorKind::UnsupportedMultiBitField(
            UnsupportedMultiBitField { dialect, length },
        ))
    }

    pub fn is_unsupported_multi_bit_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedMultiBitField(_))
    }
}
