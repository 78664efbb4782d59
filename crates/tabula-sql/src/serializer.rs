#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod create_table;
mod statement;
mod value;

use crate::stmt::Statement;

use tabula_core::{Dialect, Result, TypeMap};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Mapping used to resolve column types
    type_map: &'a TypeMap,

    /// Target dialect. Drives identifier quoting, type resolution and
    /// dialect-specific clauses.
    dialect: Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: Dialect, type_map: &'a TypeMap) -> Serializer<'a> {
        Serializer { type_map, dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt)?;

        ret.push(';');
        Ok(ret)
    }
}

impl Formatter<'_> {
    fn dialect(&self) -> Dialect {
        self.serializer.dialect
    }
}
