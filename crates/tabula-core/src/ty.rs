//! The abstract column type registry.
//!
//! A [`ColumnType`] is either one of the [`SharedType`]s every dialect knows
//! how to store, or an extension that only makes sense for a single dialect.
//! Every value carries a stable display name (embedded as a literal in
//! generated code) and a stable numeric code. Codes are grouped in bands, one
//! band per dialect; new variants are appended to the end of their band so
//! existing codes never move.

use crate::Dialect;

macro_rules! column_types {
    (
        $(#[$meta:meta])*
        pub enum $name:ident [$band:literal] {
            $( $variant:ident => $display:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            /// All variants, in declaration (and code) order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// First numeric code of the band.
            pub const BAND: u32 = $band;

            /// Canonical display name.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $display, )*
                }
            }

            /// The Rust variant name, as written in schema files.
            pub fn ident(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )*
                }
            }

            pub fn code(self) -> u32 {
                Self::BAND + self as u32
            }

            fn from_offset(offset: u32) -> Option<Self> {
                Self::ALL.get(offset as usize).copied()
            }

            pub fn from_ident(ident: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|ty| ty.ident() == ident)
            }
        }
    };
}

column_types! {
    /// Types every dialect provides a mapping for.
    pub enum SharedType [0] {
        Varchar => "VARCHAR",
        Char => "CHAR",
        Text => "TEXT",
        TinyInt => "TINYINT",
        SmallInt => "SMALLINT",
        Int => "INT",
        BigInt => "BIGINT",
        Boolean => "BOOLEAN",
        Real => "REAL",
        Double => "DOUBLE",
        Decimal => "DECIMAL",
        Date => "DATE",
        Time => "TIME",
        DateTime => "DATETIME",
        Timestamp => "TIMESTAMP",
        Blob => "BLOB",
        Json => "JSON",
        Uuid => "UUID",
        Bit => "BIT",
        Binary => "BINARY",
        Varbinary => "VARBINARY",
        Money => "MONEY",
        Xml => "XML",
    }
}

column_types! {
    pub enum PostgresqlType [1000] {
        Jsonb => "JSONB",
        Hstore => "HSTORE",
        TsVector => "TSVECTOR",
        Money => "MONEY",
        Interval => "INTERVAL",
        Inet => "INET",
        Macaddr => "MACADDR",
        Macaddr8 => "MACADDR8",
        Bit => "BIT",
        Varbit => "VARBIT",
        Box => "BOX",
        Circle => "CIRCLE",
        Line => "LINE",
        Lseg => "LSEG",
        Path => "PATH",
        Polygon => "POLYGON",
        TsQuery => "TSQUERY",
        JsonPath => "JSONPATH",
        Xml => "XML",
        Array => "ARRAY",
        Range => "RANGE",
        Multirange => "MULTIRANGE",
        PgLsn => "PG_LSN",
        PgSnapshot => "PG_SNAPSHOT",
    }
}

column_types! {
    pub enum MysqlType [2000] {
        Set => "SET",
        Enum => "ENUM",
        Point => "POINT",
        TinyText => "TINYTEXT",
        MediumText => "MEDIUMTEXT",
        LongText => "LONGTEXT",
        TinyBlob => "TINYBLOB",
        MediumBlob => "MEDIUMBLOB",
        LongBlob => "LONGBLOB",
        Year => "YEAR",
        Geometry => "GEOMETRY",
        LineString => "LINESTRING",
        Polygon => "POLYGON",
        MultiPoint => "MULTIPOINT",
        MultiLineString => "MULTILINESTRING",
        MultiPolygon => "MULTIPOLYGON",
        GeometryCollection => "GEOMETRYCOLLECTION",
    }
}

column_types! {
    pub enum SqlServerType [3000] {
        Xml => "XML",
        Geography => "GEOGRAPHY",
        Geometry => "GEOMETRY",
        HierarchyId => "HIERARCHYID",
        UniqueIdentifier => "UNIQUEIDENTIFIER",
        Image => "IMAGE",
        NText => "NTEXT",
        SqlVariant => "SQL_VARIANT",
        Timestamp => "TIMESTAMP",
        Money => "MONEY",
        SmallMoney => "SMALLMONEY",
        DateTime2 => "DATETIME2",
        DateTimeOffset => "DATETIMEOFFSET",
        SmallDateTime => "SMALLDATETIME",
    }
}

column_types! {
    pub enum CqlType [4000] {
        Counter => "COUNTER",
        Duration => "DURATION",
        Inet => "INET",
        List => "LIST",
        Map => "MAP",
        Set => "SET",
        Tuple => "TUPLE",
        Vector => "VECTOR",
    }
}

column_types! {
    pub enum ClickHouseType [5000] {
        LowCardinality => "LowCardinality",
        Nullable => "Nullable",
        Array => "Array",
        Map => "Map",
        Tuple => "Tuple",
        Nested => "Nested",
        Enum8 => "Enum8",
        Enum16 => "Enum16",
        Date32 => "Date32",
        DateTime64 => "DateTime64",
        IPv4 => "IPv4",
        IPv6 => "IPv6",
        ObjectJson => "Object('json')",
        Decimal32 => "Decimal32",
        Decimal64 => "Decimal64",
        Decimal128 => "Decimal128",
        Decimal256 => "Decimal256",
        AggregateFunction => "AggregateFunction",
        SimpleAggregateFunction => "SimpleAggregateFunction",
    }
}

column_types! {
    pub enum PrestoType [6000] {
        Row => "ROW",
        Array => "ARRAY",
        Map => "MAP",
        IntervalYearToMonth => "INTERVAL YEAR TO MONTH",
        IntervalDayToSecond => "INTERVAL DAY TO SECOND",
        IpAddress => "IPADDRESS",
        Geometry => "GEOMETRY",
        BingTile => "BING_TILE",
        HyperLogLog => "HYPERLOGLOG",
        P4HyperLogLog => "P4HYPERLOGLOG",
        QDigest => "QDIGEST",
        TDigest => "TDIGEST",
        Barcode => "BARCODE",
        TimeWithTimeZone => "TIME WITH TIME ZONE",
        TimestampWithTimeZone => "TIMESTAMP WITH TIME ZONE",
    }
}

column_types! {
    pub enum OracleType [7000] {
        NClob => "NCLOB",
        Raw => "RAW",
        BinaryFloat => "BINARY_FLOAT",
        BinaryDouble => "BINARY_DOUBLE",
        IntervalYearToMonth => "INTERVAL YEAR TO MONTH",
        IntervalDayToSecond => "INTERVAL DAY TO SECOND",
        URowId => "UROWID",
        AnyData => "ANYDATA",
        AnyType => "ANYTYPE",
        AnyDataSet => "ANYDATASET",
        XmlType => "XMLTYPE",
        UriType => "URITYPE",
        DbUriType => "DBURITYPE",
        XdbUriType => "XDBURITYPE",
        HttpUriType => "HTTPURITYPE",
        SdoGeometry => "SDO_GEOMETRY",
        SdoTopoGeometry => "SDO_TOPO_GEOMETRY",
        SdoGeoRaster => "SDO_GEORASTER",
    }
}

column_types! {
    pub enum InformixType [8000] {
        LVarchar => "LVARCHAR",
        Byte => "BYTE",
        Money => "MONEY",
        Serial => "SERIAL",
        Serial8 => "SERIAL8",
        BigSerial => "BIGSERIAL",
        Clob => "CLOB",
        Interval => "INTERVAL",
        List => "LIST",
        MultiSet => "MULTISET",
        Set => "SET",
        Row => "ROW",
    }
}

/// Sentinel returned by [`name_of`] for codes outside every band.
pub const UNKNOWN: &str = "UNKNOWN";

/// An abstract, dialect-independent column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnType {
    Shared(SharedType),
    Postgresql(PostgresqlType),
    Mysql(MysqlType),
    SqlServer(SqlServerType),
    Cql(CqlType),
    ClickHouse(ClickHouseType),
    Presto(PrestoType),
    Oracle(OracleType),
    Informix(InformixType),
}

macro_rules! each_band {
    ($self:expr, $ty:ident => $e:expr) => {
        match $self {
            ColumnType::Shared($ty) => $e,
            ColumnType::Postgresql($ty) => $e,
            ColumnType::Mysql($ty) => $e,
            ColumnType::SqlServer($ty) => $e,
            ColumnType::Cql($ty) => $e,
            ColumnType::ClickHouse($ty) => $e,
            ColumnType::Presto($ty) => $e,
            ColumnType::Oracle($ty) => $e,
            ColumnType::Informix($ty) => $e,
        }
    };
}

/// How the resolution engine treats a type's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Character and binary strings, bit fields. Takes a length.
    Length(LengthKind),

    /// Fixed point decimals and currency. Takes precision and scale.
    Decimal(DecimalKind),

    /// UUID-like identifiers.
    Identifier,

    /// Everything else; the base type is used as is.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    Varchar,
    Char,
    Binary,
    Varbinary,
    Bit,
}

impl LengthKind {
    pub fn default_length(self) -> u32 {
        match self {
            LengthKind::Varchar | LengthKind::Varbinary => 255,
            LengthKind::Char | LengthKind::Binary | LengthKind::Bit => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalKind {
    Decimal,
    Money,
}

impl DecimalKind {
    /// Default `(precision, scale)`.
    pub fn default_precision(self) -> (u32, u32) {
        match self {
            DecimalKind::Decimal => (10, 2),
            DecimalKind::Money => (19, 4),
        }
    }
}

impl ColumnType {
    pub const VARCHAR: ColumnType = ColumnType::Shared(SharedType::Varchar);
    pub const CHAR: ColumnType = ColumnType::Shared(SharedType::Char);
    pub const TEXT: ColumnType = ColumnType::Shared(SharedType::Text);
    pub const INT: ColumnType = ColumnType::Shared(SharedType::Int);
    pub const BIG_INT: ColumnType = ColumnType::Shared(SharedType::BigInt);
    pub const BOOLEAN: ColumnType = ColumnType::Shared(SharedType::Boolean);
    pub const DECIMAL: ColumnType = ColumnType::Shared(SharedType::Decimal);
    pub const MONEY: ColumnType = ColumnType::Shared(SharedType::Money);
    pub const BIT: ColumnType = ColumnType::Shared(SharedType::Bit);
    pub const UUID: ColumnType = ColumnType::Shared(SharedType::Uuid);

    /// Iterates every shared type.
    pub fn shared() -> impl Iterator<Item = ColumnType> {
        SharedType::ALL.iter().copied().map(ColumnType::Shared)
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        each_band!(self, ty => ty.name())
    }

    /// Rust variant name (`Varchar`, `Jsonb`, ...).
    pub fn ident(self) -> &'static str {
        each_band!(self, ty => ty.ident())
    }

    /// Name of the band enum the variant belongs to (`SharedType`, ...).
    pub fn band_ident(self) -> &'static str {
        match self {
            ColumnType::Shared(_) => "SharedType",
            ColumnType::Postgresql(_) => "PostgresqlType",
            ColumnType::Mysql(_) => "MysqlType",
            ColumnType::SqlServer(_) => "SqlServerType",
            ColumnType::Cql(_) => "CqlType",
            ColumnType::ClickHouse(_) => "ClickHouseType",
            ColumnType::Presto(_) => "PrestoType",
            ColumnType::Oracle(_) => "OracleType",
            ColumnType::Informix(_) => "InformixType",
        }
    }

    /// Stable numeric code.
    pub fn code(self) -> u32 {
        each_band!(self, ty => ty.code())
    }

    pub fn from_code(code: u32) -> Option<ColumnType> {
        let offset = code % 1000;

        match code / 1000 {
            0 => SharedType::from_offset(offset).map(ColumnType::Shared),
            1 => PostgresqlType::from_offset(offset).map(ColumnType::Postgresql),
            2 => MysqlType::from_offset(offset).map(ColumnType::Mysql),
            3 => SqlServerType::from_offset(offset).map(ColumnType::SqlServer),
            4 => CqlType::from_offset(offset).map(ColumnType::Cql),
            5 => ClickHouseType::from_offset(offset).map(ColumnType::ClickHouse),
            6 => PrestoType::from_offset(offset).map(ColumnType::Presto),
            7 => OracleType::from_offset(offset).map(ColumnType::Oracle),
            8 => InformixType::from_offset(offset).map(ColumnType::Informix),
            _ => None,
        }
    }

    /// The dialect a dialect-specific type belongs to; `None` for shared types.
    pub fn owner(self) -> Option<Dialect> {
        match self {
            ColumnType::Shared(_) => None,
            ColumnType::Postgresql(_) => Some(Dialect::Postgresql),
            ColumnType::Mysql(_) => Some(Dialect::Mysql),
            ColumnType::SqlServer(_) => Some(Dialect::SqlServer),
            ColumnType::Cql(_) => Some(Dialect::Cql),
            ColumnType::ClickHouse(_) => Some(Dialect::ClickHouse),
            ColumnType::Presto(_) => Some(Dialect::Presto),
            ColumnType::Oracle(_) => Some(Dialect::Oracle),
            ColumnType::Informix(_) => Some(Dialect::Informix),
        }
    }

    pub fn is_shared(self) -> bool {
        matches!(self, ColumnType::Shared(_))
    }

    pub fn category(self) -> Category {
        let ColumnType::Shared(ty) = self else {
            return Category::Plain;
        };

        match ty {
            SharedType::Varchar => Category::Length(LengthKind::Varchar),
            SharedType::Char => Category::Length(LengthKind::Char),
            SharedType::Binary => Category::Length(LengthKind::Binary),
            SharedType::Varbinary => Category::Length(LengthKind::Varbinary),
            SharedType::Bit => Category::Length(LengthKind::Bit),
            SharedType::Decimal => Category::Decimal(DecimalKind::Decimal),
            SharedType::Money => Category::Decimal(DecimalKind::Money),
            SharedType::Uuid => Category::Identifier,
            _ => Category::Plain,
        }
    }

    /// True for integer and floating point kinds, the only ones that may
    /// auto-increment.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnType::Shared(
                SharedType::TinyInt
                    | SharedType::SmallInt
                    | SharedType::Int
                    | SharedType::BigInt
                    | SharedType::Real
                    | SharedType::Double
                    | SharedType::Bit
            ) | ColumnType::Mysql(MysqlType::Year)
                | ColumnType::Cql(CqlType::Counter)
                | ColumnType::Oracle(OracleType::BinaryFloat | OracleType::BinaryDouble)
                | ColumnType::Informix(
                    InformixType::Serial | InformixType::Serial8 | InformixType::BigSerial
                )
        )
    }

    /// Resolves a type written as `Variant` or `BandType::Variant`.
    ///
    /// A bare variant name prefers the shared band and otherwise must match
    /// exactly one dialect band.
    pub fn from_path(band: Option<&str>, variant: &str) -> Option<ColumnType> {
        match band {
            Some("SharedType") => SharedType::from_ident(variant).map(ColumnType::Shared),
            Some("PostgresqlType") => {
                PostgresqlType::from_ident(variant).map(ColumnType::Postgresql)
            }
            Some("MysqlType") => MysqlType::from_ident(variant).map(ColumnType::Mysql),
            Some("SqlServerType") => SqlServerType::from_ident(variant).map(ColumnType::SqlServer),
            Some("CqlType") => CqlType::from_ident(variant).map(ColumnType::Cql),
            Some("ClickHouseType") => {
                ClickHouseType::from_ident(variant).map(ColumnType::ClickHouse)
            }
            Some("PrestoType") => PrestoType::from_ident(variant).map(ColumnType::Presto),
            Some("OracleType") => OracleType::from_ident(variant).map(ColumnType::Oracle),
            Some("InformixType") => InformixType::from_ident(variant).map(ColumnType::Informix),
            Some(_) => None,
            None => {
                if let Some(ty) = SharedType::from_ident(variant) {
                    return Some(ColumnType::Shared(ty));
                }

                let mut found = [
                    PostgresqlType::from_ident(variant).map(ColumnType::Postgresql),
                    MysqlType::from_ident(variant).map(ColumnType::Mysql),
                    SqlServerType::from_ident(variant).map(ColumnType::SqlServer),
                    CqlType::from_ident(variant).map(ColumnType::Cql),
                    ClickHouseType::from_ident(variant).map(ColumnType::ClickHouse),
                    PrestoType::from_ident(variant).map(ColumnType::Presto),
                    OracleType::from_ident(variant).map(ColumnType::Oracle),
                    InformixType::from_ident(variant).map(ColumnType::Informix),
                ]
                .into_iter()
                .flatten();

                match (found.next(), found.next()) {
                    (Some(ty), None) => Some(ty),
                    _ => None,
                }
            }
        }
    }
}

macro_rules! impl_from_band {
    ( $( $band:ident => $variant:ident, )* ) => {
        $(
            impl From<$band> for ColumnType {
                fn from(value: $band) -> Self {
                    ColumnType::$variant(value)
                }
            }
        )*
    };
}

impl_from_band! {
    SharedType => Shared,
    PostgresqlType => Postgresql,
    MysqlType => Mysql,
    SqlServerType => SqlServer,
    CqlType => Cql,
    ClickHouseType => ClickHouse,
    PrestoType => Presto,
    OracleType => Oracle,
    InformixType => Informix,
}

impl core::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for a numeric type code, [`UNKNOWN`] outside every band.
pub fn name_of(code: u32) -> &'static str {
    ColumnType::from_code(code)
        .map(ColumnType::name)
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_codes_are_stable() {
        assert_eq!(ColumnType::VARCHAR.code(), 0);
        assert_eq!(ColumnType::Shared(SharedType::Xml).code(), 22);
        assert_eq!(ColumnType::Postgresql(PostgresqlType::Jsonb).code(), 1000);
        assert_eq!(ColumnType::Postgresql(PostgresqlType::PgSnapshot).code(), 1023);
        assert_eq!(ColumnType::Mysql(MysqlType::GeometryCollection).code(), 2016);
        assert_eq!(ColumnType::Informix(InformixType::Row).code(), 8011);
    }

    #[test]
    fn code_round_trips_through_every_band() {
        let all = SharedType::ALL
            .iter()
            .map(|ty| ty.code())
            .chain(PostgresqlType::ALL.iter().map(|ty| ty.code()))
            .chain(ClickHouseType::ALL.iter().map(|ty| ty.code()))
            .chain(OracleType::ALL.iter().map(|ty| ty.code()));

        for code in all {
            let ty = ColumnType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
        }
    }

    #[test]
    fn name_of_unknown_codes() {
        assert_eq!(name_of(0), "VARCHAR");
        assert_eq!(name_of(1000), "JSONB");
        assert_eq!(name_of(5012), "Object('json')");
        assert_eq!(name_of(23), UNKNOWN);
        assert_eq!(name_of(999), UNKNOWN);
        assert_eq!(name_of(1024), UNKNOWN);
        assert_eq!(name_of(9000), UNKNOWN);
        assert_eq!(name_of(u32::MAX), UNKNOWN);
    }

    #[test]
    fn bare_path_prefers_shared_band() {
        assert_eq!(ColumnType::from_path(None, "Xml"), Some(ColumnType::Shared(SharedType::Xml)));
        assert_eq!(
            ColumnType::from_path(None, "Jsonb"),
            Some(ColumnType::Postgresql(PostgresqlType::Jsonb))
        );
        assert_eq!(
            ColumnType::from_path(Some("SqlServerType"), "Xml"),
            Some(ColumnType::SqlServer(SqlServerType::Xml))
        );
    }

    #[test]
    fn ambiguous_bare_dialect_path_is_rejected() {
        // GEOMETRY exists for MySQL, SQL Server and Presto
        assert_eq!(ColumnType::from_path(None, "Geometry"), None);
        assert_eq!(ColumnType::from_path(Some("Nope"), "Varchar"), None);
    }

    #[test]
    fn owner_of_dialect_specific_types() {
        assert_eq!(ColumnType::VARCHAR.owner(), None);
        assert_eq!(
            ColumnType::Cql(CqlType::Counter).owner(),
            Some(Dialect::Cql)
        );
    }
}
