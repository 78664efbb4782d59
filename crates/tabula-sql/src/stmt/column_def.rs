use tabula_core::Column;

/// A column definition. The SQL type is resolved when the statement is
/// serialized, since it depends on the dialect.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub column: Column,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            column: column.clone(),
        }
    }
}
