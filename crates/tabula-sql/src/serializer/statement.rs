use super::{Formatter, ToSql};

use crate::stmt::Statement;
use tabula_core::Result;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}
