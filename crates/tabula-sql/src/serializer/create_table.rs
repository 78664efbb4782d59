use super::{Delimited, Formatter, Ident, ToSql};

use crate::stmt;
use tabula_core::{Error, Result};

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::unsupported_feature(format!(
                "table `{}` has no columns",
                self.name
            )));
        }

        let name = Ident(&self.name);
        let columns = Delimited(&self.columns, ",\n    ");

        fmt!(f, "CREATE TABLE " name " (\n    " columns "\n)");
        Ok(())
    }
}
