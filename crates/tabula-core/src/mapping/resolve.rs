use super::TypeMap;
use crate::ty::{Category, DecimalKind, LengthKind};
use crate::{Column, Dialect, Error, Result};

impl TypeMap {
    /// Computes the final SQL type string for `column` in `dialect`.
    ///
    /// An explicit type override wins over everything else and is returned
    /// verbatim. Otherwise the base type is looked up and the column's length
    /// or precision is appended according to the type's category. Parameters
    /// are not checked for plausibility; a scale larger than the precision is
    /// passed through.
    pub fn resolve(&self, dialect: Dialect, column: &Column) -> Result<String> {
        if let Some(explicit) = column.explicit_type.as_deref().filter(|s| !s.is_empty()) {
            return Ok(explicit.to_string());
        }

        let Some(base) = self.base_type(dialect, column.ty) else {
            return Err(Error::unsupported_combination(dialect, column.ty));
        };

        match column.ty.category() {
            Category::Length(kind) => sized(dialect, kind, base, column.length),
            Category::Decimal(kind) => Ok(decimal(kind, base, column.precision)),
            Category::Identifier | Category::Plain => Ok(base.to_string()),
        }
    }
}

fn sized(dialect: Dialect, kind: LengthKind, base: &str, length: Option<u32>) -> Result<String> {
    let length = match length {
        Some(0) | None => kind.default_length(),
        Some(length) => length,
    };

    let takes_length = match kind {
        LengthKind::Bit => return bit(dialect, base, length),
        LengthKind::Varchar | LengthKind::Char => matches!(
            dialect,
            Dialect::Mysql
                | Dialect::Postgresql
                | Dialect::SqlServer
                | Dialect::Oracle
                | Dialect::Presto
                | Dialect::Informix
        ),
        LengthKind::Binary | LengthKind::Varbinary => {
            // Other dialects map these to unsized types (BYTEA, VARBINARY, BYTE)
            matches!(dialect, Dialect::Mysql | Dialect::SqlServer | Dialect::Oracle)
        }
    };

    if takes_length {
        Ok(format!("{base}({length})"))
    } else {
        Ok(base.to_string())
    }
}

fn bit(dialect: Dialect, base: &str, length: u32) -> Result<String> {
    match dialect {
        Dialect::Mysql | Dialect::Postgresql => Ok(format!("{base}({length})")),
        Dialect::Presto => Ok(format!("VARBIT({length})")),
        _ if length == 1 => Ok(base.to_string()),
        _ => Err(Error::unsupported_multi_bit_field(dialect, length)),
    }
}

fn decimal(kind: DecimalKind, base: &str, precision: Option<(u32, u32)>) -> String {
    // Currency types carry a fixed precision
    if base.to_ascii_uppercase().contains("MONEY") {
        return base.to_string();
    }

    let (precision, scale) = precision.unwrap_or_else(|| kind.default_precision());
    format!("{base}({precision},{scale})")
}
