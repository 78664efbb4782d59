use super::DefaultValue;
use crate::ColumnType;

/// A single column declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name as it appears in SQL. Unique within its entity.
    pub name: String,

    /// Abstract type used for cross-dialect mapping.
    pub ty: ColumnType,

    /// Raw SQL type that replaces the mapped type in every dialect.
    pub explicit_type: Option<String>,

    /// Default value. `None` means no default was declared, which is distinct
    /// from a declared zero value.
    pub default: Option<DefaultValue>,

    /// Only ever set on numeric columns.
    pub auto_increment: bool,

    /// Length for character, binary and bit types. `Some(0)` behaves like
    /// `None` during resolution.
    pub length: Option<u32>,

    /// `(precision, scale)` for decimal and currency types.
    pub precision: Option<(u32, u32)>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<ColumnType>) -> Column {
        Column {
            name: name.into(),
            ty: ty.into(),
            explicit_type: None,
            default: None,
            auto_increment: false,
            length: None,
            precision: None,
        }
    }
}
