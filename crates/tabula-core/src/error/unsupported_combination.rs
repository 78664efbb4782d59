use super::Error;
use crate::{ColumnType, Dialect};

/// Error when a dialect's mapping table has no entry for a column type.
#[derive(Debug)]
pub(super) struct UnsupportedCombination {
    dialect: Dialect,
    ty: ColumnType,
}

impl std::error::Error for UnsupportedCombination {}

impl core::fmt::Display for UnsupportedCombination {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported combination: {} has no mapping for {}",
            self.dialect, self.ty
        )
    }
}

impl Error {
    /// Creates an unsupported combination error.
    ///
    /// Returned by type resolution when the requested dialect does not map
    /// the column's abstract type, typically a type owned by another dialect.
    pub fn unsupported_combination(dialect: Dialect, ty: ColumnType) -> Error {
        Error::from(super::ErrorKind::UnsupportedCombination(
            UnsupportedCombination { dialect, ty },
        ))
    }

    /// Returns `true` if this error is an unsupported combination error.
    pub fn is_unsupported_combination(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedCombination(_))
    }
}
