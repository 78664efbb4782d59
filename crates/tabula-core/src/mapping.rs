//! Per-dialect lookup from abstract column types to base SQL types.
//!
//! A [`TypeMap`] holds one row per dialect. Rows are validated once, when the
//! map is built, and the map is immutable afterwards. Parameters such as a
//! length or a precision are not part of the table; they are appended by
//! [`TypeMap::resolve`].

mod builtin;
mod resolve;

use crate::{ColumnType, Dialect, Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct TypeMap {
    rows: IndexMap<Dialect, IndexMap<ColumnType, String>>,
}

/// Collects mapping rows and validates them into a [`TypeMap`].
#[derive(Debug, Default)]
pub struct Builder {
    rows: IndexMap<Dialect, IndexMap<ColumnType, String>>,
}

impl TypeMap {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The mapping shipped with tabula, covering every dialect.
    pub fn builtin() -> Result<TypeMap> {
        let mut builder = TypeMap::builder();

        for &dialect in Dialect::ALL {
            builder = builder.dialect(dialect, builtin::row(dialect));
        }

        builder.build()
    }

    /// Base SQL type for `ty`, without parameters.
    ///
    /// Returns `None` when the dialect has no row in this map or the row has
    /// no entry for the type.
    pub fn base_type(&self, dialect: Dialect, ty: ColumnType) -> Option<&str> {
        self.rows
            .get(&dialect)
            .and_then(|row| row.get(&ty))
            .map(String::as_str)
    }

    /// Dialects that have a row, in insertion order.
    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        self.rows.keys().copied()
    }
}

impl Builder {
    /// Adds entries to the row for `dialect`. Repeated calls for the same
    /// dialect extend the row; later entries replace earlier ones.
    pub fn dialect<I, S>(mut self, dialect: Dialect, entries: I) -> Builder
    where
        I: IntoIterator<Item = (ColumnType, S)>,
        S: Into<String>,
    {
        let row = self.rows.entry(dialect).or_default();

        for (ty, base) in entries {
            row.insert(ty, base.into());
        }

        self
    }

    pub fn build(self) -> Result<TypeMap> {
        for (dialect, row) in &self.rows {
            verify_row(*dialect, row)?;
        }

        Ok(TypeMap { rows: self.rows })
    }
}

fn verify_row(dialect: Dialect, row: &IndexMap<ColumnType, String>) -> Result<()> {
    for (ty, base) in row {
        if base.trim().is_empty() {
            return Err(Error::invalid_type_map(format!(
                "{dialect} maps {ty} to a blank type"
            )));
        }

        if let Some(owner) = ty.owner() {
            if owner != dialect {
                return Err(Error::invalid_type_map(format!(
                    "{dialect} row lists {}::{}, which belongs to {owner}",
                    ty.band_ident(),
                    ty.ident()
                )));
            }
        }
    }

    if let Some(missing) = ColumnType::shared().find(|ty| !row.contains_key(ty)) {
        return Err(Error::invalid_type_map(format!(
            "{dialect} is missing {missing}"
        )));
    }

    Ok(())
}
