use super::{Formatter, ToSql};

use tabula_core::{DefaultValue, Dialect, Error, Result};

impl ToSql for &DefaultValue {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            DefaultValue::Int(value) => f.dst.push_str(&value.to_string()),
            DefaultValue::Float(value) if !value.is_finite() => {
                return Err(Error::unsupported_feature(format!(
                    "non-finite default value `{value}`"
                )));
            }
            DefaultValue::Float(value) => f.dst.push_str(&value.to_string()),
            DefaultValue::Str(value) => string(f, value),
            DefaultValue::Char(value) => string(f, value.encode_utf8(&mut [0; 4])),
            DefaultValue::Bool(value) => {
                let numeric = matches!(
                    f.dialect(),
                    Dialect::SqlServer | Dialect::Oracle | Dialect::Sqlite
                );

                f.dst.push_str(match (numeric, value) {
                    (true, true) => "1",
                    (true, false) => "0",
                    (false, true) => "TRUE",
                    (false, false) => "FALSE",
                });
            }
        }

        Ok(())
    }
}

fn string(f: &mut Formatter<'_>, value: &str) {
    f.dst.push('\'');
    f.dst.push_str(&value.replace('\'', "''"));
    f.dst.push('\'');
}
