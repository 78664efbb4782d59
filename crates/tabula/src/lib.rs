//! Runtime support for code generated by `tabula generate`.
//!
//! Generated modules describe each column with a [`Column`] constant and
//! implement [`Entity`] for the model struct. The core types are re-exported
//! so generated code only needs this crate.

mod column;
pub use column::{Column, Literal};

mod entity;
pub use entity::Entity;

pub use tabula_core::{
    ClickHouseType, ColumnType, CqlType, Dialect, Error, InformixType, MysqlType, OracleType,
    PostgresqlType, PrestoType, Result, SharedType, SqlServerType, TypeMap,
};

/// The canonical schema model, for handing generated entities to the type
/// mapper or a DDL serializer.
pub mod schema {
    pub use tabula_core::schema::*;
}
