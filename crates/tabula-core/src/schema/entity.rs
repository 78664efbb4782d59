use super::{Column, Diagnostic};

/// A table described in a schema file.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Declared item name with its `Schema`/`Definition`/`Table` suffix
    /// removed. Used to name generated code.
    pub name: String,

    pub table_name: String,

    /// Columns in declaration order.
    pub columns: Vec<Column>,

    /// Problems found while extracting this entity.
    pub diagnostics: Vec<Diagnostic>,
}

impl Entity {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Entity {
        Entity {
            name: name.into(),
            table_name: table_name.into(),
            columns: vec![],
            diagnostics: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
