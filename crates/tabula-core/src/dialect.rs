use crate::Error;

/// A supported database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
    SqlServer,
    Cql,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
}

/// How a dialect quotes identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `` `name` ``
    Backtick,

    /// `"name"`
    Double,

    /// `[name]`
    Bracket,

    /// Identifiers are emitted as is.
    None,
}

impl Dialect {
    pub const ALL: &'static [Dialect] = &[
        Dialect::Mysql,
        Dialect::Postgresql,
        Dialect::Sqlite,
        Dialect::SqlServer,
        Dialect::Cql,
        Dialect::ClickHouse,
        Dialect::Presto,
        Dialect::Oracle,
        Dialect::Informix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Mysql => "MySQL",
            Dialect::Postgresql => "PostgreSQL",
            Dialect::Sqlite => "SQLite",
            Dialect::SqlServer => "SQLServer",
            Dialect::Cql => "CQL",
            Dialect::ClickHouse => "ClickHouse",
            Dialect::Presto => "Presto",
            Dialect::Oracle => "Oracle",
            Dialect::Informix => "Informix",
        }
    }

    pub fn quote_style(self) -> Quote {
        match self {
            Dialect::Mysql => Quote::Backtick,
            Dialect::SqlServer => Quote::Bracket,
            Dialect::Cql => Quote::None,
            Dialect::Postgresql
            | Dialect::Sqlite
            | Dialect::ClickHouse
            | Dialect::Presto
            | Dialect::Oracle
            | Dialect::Informix => Quote::Double,
        }
    }

    /// Quotes an identifier using the dialect's quoting rule.
    ///
    /// Embedded closing quote characters are doubled.
    pub fn quote(self, ident: &str) -> String {
        match self.quote_style() {
            Quote::Backtick => format!("`{}`", ident.replace('`', "``")),
            Quote::Double => format!("\"{}\"", ident.replace('"', "\"\"")),
            Quote::Bracket => format!("[{}]", ident.replace(']', "]]")),
            Quote::None => ident.to_string(),
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "postgresql" | "postgres" => Ok(Dialect::Postgresql),
            "sqlite" => Ok(Dialect::Sqlite),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            "cql" | "cassandra" => Ok(Dialect::Cql),
            "clickhouse" => Ok(Dialect::ClickHouse),
            "presto" => Ok(Dialect::Presto),
            "oracle" => Ok(Dialect::Oracle),
            "informix" => Ok(Dialect::Informix),
            _ => Err(Error::unsupported_feature(format!(
                "unsupported database dialect: {s}"
            ))),
        }
    }
}
