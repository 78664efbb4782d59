mod error;
pub use error::Error;

pub mod dialect;
pub use dialect::{Dialect, Quote};

pub mod mapping;
pub use mapping::TypeMap;

pub mod schema;
pub use schema::{Column, DefaultValue, Diagnostic, Entity};

pub mod ty;
pub use ty::{
    ClickHouseType, ColumnType, CqlType, InformixType, MysqlType, OracleType, PostgresqlType,
    PrestoType, SharedType, SqlServerType,
};

/// A Result type alias that uses tabula's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
