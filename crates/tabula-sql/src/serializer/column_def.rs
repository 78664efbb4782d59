use super::{Formatter, Ident, ToSql};

use crate::stmt;
use tabula_core::{err, Dialect, Error, Result};

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let column = &self.column;
        let name = Ident(&column.name);
        let ty = f
            .serializer
            .type_map
            .resolve(f.dialect(), column)
            .map_err(|err| err.context(err!("failed to resolve column `{}`", column.name)))?;

        fmt!(f, name " " ty.as_str());

        if let Some(default) = &column.default {
            fmt!(f, " DEFAULT " default);
        }

        if column.auto_increment {
            let clause = auto_increment(f.dialect())?;
            fmt!(f, " " clause);
        }

        Ok(())
    }
}

fn auto_increment(dialect: Dialect) -> Result<&'static str> {
    match dialect {
        Dialect::Mysql => Ok("AUTO_INCREMENT"),
        Dialect::Postgresql | Dialect::Oracle => Ok("GENERATED BY DEFAULT AS IDENTITY"),
        Dialect::Sqlite => Ok("PRIMARY KEY AUTOINCREMENT"),
        Dialect::SqlServer => Ok("IDENTITY(1,1)"),
        _ => Err(Error::unsupported_feature(format!(
            "auto-increment columns are not supported by {dialect}"
        ))),
    }
}
