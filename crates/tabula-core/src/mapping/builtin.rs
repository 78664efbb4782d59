use crate::ty::*;
use crate::Dialect;

use SharedType::*;

/// Builtin row for a dialect: the shared types plus every type the dialect
/// owns, the latter mapped to its own display name.
pub(super) fn row(dialect: Dialect) -> Vec<(ColumnType, &'static str)> {
    let shared = shared(dialect)
        .iter()
        .map(|&(ty, base)| (ColumnType::Shared(ty), base));

    let own: Vec<ColumnType> = match dialect {
        Dialect::Mysql => MysqlType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Postgresql => PostgresqlType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::SqlServer => SqlServerType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Cql => CqlType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::ClickHouse => ClickHouseType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Presto => PrestoType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Oracle => OracleType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Informix => InformixType::ALL.iter().map(|&ty| ty.into()).collect(),
        Dialect::Sqlite => vec![],
    };

    shared
        .chain(own.into_iter().map(|ty| (ty, ty.name())))
        .collect()
}

fn shared(dialect: Dialect) -> &'static [(SharedType, &'static str)] {
    match dialect {
        Dialect::Mysql => MYSQL,
        Dialect::Postgresql => POSTGRESQL,
        Dialect::Sqlite => SQLITE,
        Dialect::SqlServer => SQL_SERVER,
        Dialect::Cql => CQL,
        Dialect::ClickHouse => CLICKHOUSE,
        Dialect::Presto => PRESTO,
        Dialect::Oracle => ORACLE,
        Dialect::Informix => INFORMIX,
    }
}

const MYSQL: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR"),
    (Char, "CHAR"),
    (Text, "TEXT"),
    (TinyInt, "TINYINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INT"),
    (BigInt, "BIGINT"),
    (Boolean, "BOOLEAN"),
    (Real, "FLOAT"),
    (Double, "DOUBLE"),
    (Decimal, "DECIMAL"),
    (Date, "DATE"),
    (Time, "TIME"),
    (DateTime, "DATETIME"),
    (Timestamp, "TIMESTAMP"),
    (Blob, "BLOB"),
    (Json, "JSON"),
    (Uuid, "CHAR(36)"),
    (Bit, "BIT"),
    (Binary, "BINARY"),
    (Varbinary, "VARBINARY"),
    (Money, "DECIMAL"),
    (Xml, "TEXT"),
];

const POSTGRESQL: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR"),
    (Char, "CHAR"),
    (Text, "TEXT"),
    // No single byte integer
    (TinyInt, "SMALLINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INTEGER"),
    (BigInt, "BIGINT"),
    (Boolean, "BOOLEAN"),
    (Real, "REAL"),
    (Double, "DOUBLE PRECISION"),
    (Decimal, "NUMERIC"),
    (Date, "DATE"),
    (Time, "TIME"),
    (DateTime, "TIMESTAMP"),
    (Timestamp, "TIMESTAMP"),
    (Blob, "BYTEA"),
    (Json, "JSON"),
    (Uuid, "UUID"),
    (Bit, "BIT"),
    (Binary, "BYTEA"),
    (Varbinary, "BYTEA"),
    (Money, "MONEY"),
    (Xml, "XML"),
];

// SQLite only has storage classes; lengths are never emitted.
const SQLITE: &[(SharedType, &str)] = &[
    (Varchar, "TEXT"),
    (Char, "TEXT"),
    (Text, "TEXT"),
    (TinyInt, "INTEGER"),
    (SmallInt, "INTEGER"),
    (Int, "INTEGER"),
    (BigInt, "INTEGER"),
    (Boolean, "INTEGER"),
    (Real, "REAL"),
    (Double, "REAL"),
    (Decimal, "NUMERIC"),
    (Date, "TEXT"),
    (Time, "TEXT"),
    (DateTime, "TEXT"),
    (Timestamp, "TEXT"),
    (Blob, "BLOB"),
    (Json, "TEXT"),
    (Uuid, "TEXT"),
    (Bit, "INTEGER"),
    (Binary, "BLOB"),
    (Varbinary, "BLOB"),
    (Money, "NUMERIC"),
    (Xml, "TEXT"),
];

const SQL_SERVER: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR"),
    (Char, "CHAR"),
    (Text, "NVARCHAR(MAX)"),
    (TinyInt, "TINYINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INT"),
    (BigInt, "BIGINT"),
    (Boolean, "BIT"),
    (Real, "REAL"),
    (Double, "FLOAT"),
    (Decimal, "DECIMAL"),
    (Date, "DATE"),
    (Time, "TIME"),
    (DateTime, "DATETIME2"),
    (Timestamp, "DATETIME2"),
    (Blob, "VARBINARY(MAX)"),
    (Json, "NVARCHAR(MAX)"),
    (Uuid, "UNIQUEIDENTIFIER"),
    (Bit, "BIT"),
    (Binary, "BINARY"),
    (Varbinary, "VARBINARY"),
    (Money, "MONEY"),
    (Xml, "XML"),
];

const CQL: &[(SharedType, &str)] = &[
    (Varchar, "TEXT"),
    (Char, "TEXT"),
    (Text, "TEXT"),
    (TinyInt, "TINYINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INT"),
    (BigInt, "BIGINT"),
    (Boolean, "BOOLEAN"),
    (Real, "FLOAT"),
    (Double, "DOUBLE"),
    (Decimal, "DECIMAL"),
    (Date, "DATE"),
    (Time, "TIME"),
    (DateTime, "TIMESTAMP"),
    (Timestamp, "TIMESTAMP"),
    (Blob, "BLOB"),
    (Json, "TEXT"),
    (Uuid, "UUID"),
    (Bit, "BOOLEAN"),
    (Binary, "BLOB"),
    (Varbinary, "BLOB"),
    (Money, "DECIMAL"),
    (Xml, "TEXT"),
];

const CLICKHOUSE: &[(SharedType, &str)] = &[
    (Varchar, "String"),
    (Char, "String"),
    (Text, "String"),
    (TinyInt, "Int8"),
    (SmallInt, "Int16"),
    (Int, "Int32"),
    (BigInt, "Int64"),
    (Boolean, "Bool"),
    (Real, "Float32"),
    (Double, "Float64"),
    (Decimal, "Decimal"),
    (Date, "Date"),
    (Time, "String"),
    (DateTime, "DateTime"),
    (Timestamp, "DateTime"),
    (Blob, "String"),
    (Json, "String"),
    (Uuid, "UUID"),
    (Bit, "UInt8"),
    (Binary, "String"),
    (Varbinary, "String"),
    (Money, "Decimal"),
    (Xml, "String"),
];

const PRESTO: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR"),
    (Char, "CHAR"),
    (Text, "VARCHAR"),
    (TinyInt, "TINYINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INTEGER"),
    (BigInt, "BIGINT"),
    (Boolean, "BOOLEAN"),
    (Real, "REAL"),
    (Double, "DOUBLE"),
    (Decimal, "DECIMAL"),
    (Date, "DATE"),
    (Time, "TIME"),
    (DateTime, "TIMESTAMP"),
    (Timestamp, "TIMESTAMP"),
    (Blob, "VARBINARY"),
    (Json, "JSON"),
    (Uuid, "UUID"),
    (Bit, "VARBIT"),
    (Binary, "VARBINARY"),
    (Varbinary, "VARBINARY"),
    (Money, "DECIMAL"),
    (Xml, "VARCHAR"),
];

const ORACLE: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR2"),
    (Char, "CHAR"),
    (Text, "CLOB"),
    (TinyInt, "NUMBER(3)"),
    (SmallInt, "NUMBER(5)"),
    (Int, "NUMBER(10)"),
    (BigInt, "NUMBER(19)"),
    (Boolean, "NUMBER(1)"),
    (Real, "BINARY_FLOAT"),
    (Double, "BINARY_DOUBLE"),
    (Decimal, "NUMBER"),
    (Date, "DATE"),
    (Time, "TIMESTAMP"),
    (DateTime, "TIMESTAMP"),
    (Timestamp, "TIMESTAMP"),
    (Blob, "BLOB"),
    (Json, "CLOB"),
    (Uuid, "RAW(16)"),
    (Bit, "NUMBER(1)"),
    (Binary, "RAW"),
    (Varbinary, "RAW"),
    (Money, "NUMBER"),
    (Xml, "XMLTYPE"),
];

const INFORMIX: &[(SharedType, &str)] = &[
    (Varchar, "VARCHAR"),
    (Char, "CHAR"),
    (Text, "TEXT"),
    (TinyInt, "SMALLINT"),
    (SmallInt, "SMALLINT"),
    (Int, "INTEGER"),
    (BigInt, "BIGINT"),
    (Boolean, "BOOLEAN"),
    (Real, "SMALLFLOAT"),
    (Double, "FLOAT"),
    (Decimal, "DECIMAL"),
    (Date, "DATE"),
    (Time, "DATETIME HOUR TO SECOND"),
    (DateTime, "DATETIME YEAR TO SECOND"),
    (Timestamp, "DATETIME YEAR TO FRACTION"),
    (Blob, "BYTE"),
    (Json, "JSON"),
    (Uuid, "CHAR(36)"),
    (Bit, "BOOLEAN"),
    (Binary, "BYTE"),
    (Varbinary, "BYTE"),
    (Money, "MONEY"),
    (Xml, "LVARCHAR"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_rows_list_every_type_once_in_order() {
        for &dialect in Dialect::ALL {
            let tys: Vec<SharedType> = shared(dialect).iter().map(|(ty, _)| *ty).collect();
            assert_eq!(tys, SharedType::ALL, "{dialect}");
        }
    }

    #[test]
    fn dialect_rows_include_owned_types() {
        let row = row(Dialect::Postgresql);
        assert!(row.contains(&(ColumnType::Postgresql(PostgresqlType::Jsonb), "JSONB")));
        assert!(row.iter().all(|(ty, _)| ty.owner().is_none()
            || ty.owner() == Some(Dialect::Postgresql)));
    }
}
