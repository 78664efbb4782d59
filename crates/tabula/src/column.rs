use tabula_core::{schema, ColumnType, DefaultValue};

/// A column of a generated entity.
///
/// Generated code builds these as constants, so every field is plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Name of the table the column belongs to.
    pub table: &'static str,

    pub name: &'static str,

    pub ty: ColumnType,

    /// Explicit SQL type that overrides the mapped one.
    pub sql_type: Option<&'static str>,

    pub default: Option<Literal>,

    pub auto_increment: bool,

    pub length: Option<u32>,

    /// `(precision, scale)`
    pub precision: Option<(u32, u32)>,
}

/// A default value literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(&'static str),
    Char(char),
    Bool(bool),
}

impl Column {
    /// `table.column`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// The column name qualified by a table alias: `alias.column`.
    pub fn with_alias(&self, alias: &str) -> String {
        format!("{}.{}", alias, self.name)
    }

    /// Converts the descriptor back into the schema model.
    pub fn to_schema(&self) -> schema::Column {
        schema::Column {
            name: self.name.to_string(),
            ty: self.ty,
            explicit_type: self.sql_type.map(str::to_string),
            default: self.default.map(DefaultValue::from),
            auto_increment: self.auto_increment,
            length: self.length,
            precision: self.precision,
        }
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

impl From<Literal> for DefaultValue {
    fn from(value: Literal) -> Self {
        match value {
            Literal::Int(value) => DefaultValue::Int(value),
            Literal::Float(value) => DefaultValue::Float(value),
            Literal::Str(value) => DefaultValue::Str(value.to_string()),
            Literal::Char(value) => DefaultValue::Char(value),
            Literal::Bool(value) => DefaultValue::Bool(value),
        }
    }
}
