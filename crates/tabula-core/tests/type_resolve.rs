use tabula_core::{
    Column, ColumnType, Dialect, MysqlType, PostgresqlType, SharedType, SqlServerType, TypeMap,
};

fn resolve(dialect: Dialect, column: &Column) -> String {
    TypeMap::builtin()
        .unwrap()
        .resolve(dialect, column)
        .unwrap()
}

fn column(ty: SharedType) -> Column {
    Column::new("c", ty)
}

#[test]
fn resolution_is_idempotent() {
    let map = TypeMap::builtin().unwrap();
    let col = Column {
        length: Some(64),
        ..column(SharedType::Varchar)
    };

    for &dialect in Dialect::ALL {
        assert_eq!(
            map.resolve(dialect, &col).unwrap(),
            map.resolve(dialect, &col).unwrap()
        );
    }
}

#[test]
fn every_shared_type_resolves_everywhere() {
    let map = TypeMap::builtin().unwrap();

    for &dialect in Dialect::ALL {
        for ty in ColumnType::shared() {
            let resolved = map.resolve(dialect, &Column::new("c", ty)).unwrap();
            assert!(!resolved.trim().is_empty(), "{dialect} {ty}");
        }
    }
}

#[test]
fn explicit_override_wins() {
    let col = Column {
        explicit_type: Some("CITEXT".to_string()),
        length: Some(20),
        ..column(SharedType::Varchar)
    };

    for &dialect in Dialect::ALL {
        assert_eq!(resolve(dialect, &col), "CITEXT");
    }

    // Even for a type the dialect cannot map
    let col = Column {
        explicit_type: Some("JSONB".to_string()),
        ..Column::new("c", PostgresqlType::Jsonb)
    };
    assert_eq!(resolve(Dialect::Mysql, &col), "JSONB");
}

#[test]
fn varchar_length() {
    assert_eq!(resolve(Dialect::Mysql, &column(SharedType::Varchar)), "VARCHAR(255)");

    let col = Column {
        length: Some(100),
        ..column(SharedType::Varchar)
    };
    assert_eq!(resolve(Dialect::Mysql, &col), "VARCHAR(100)");
    assert_eq!(resolve(Dialect::Postgresql, &col), "VARCHAR(100)");
    assert_eq!(resolve(Dialect::Oracle, &col), "VARCHAR2(100)");
    assert_eq!(resolve(Dialect::Sqlite, &col), "TEXT");
    assert_eq!(resolve(Dialect::ClickHouse, &col), "String");
    assert_eq!(resolve(Dialect::Cql, &col), "TEXT");
}

#[test]
fn zero_length_uses_default() {
    let col = Column {
        length: Some(0),
        ..column(SharedType::Varchar)
    };
    assert_eq!(resolve(Dialect::Postgresql, &col), "VARCHAR(255)");

    let col = Column {
        length: Some(0),
        ..column(SharedType::Char)
    };
    assert_eq!(resolve(Dialect::SqlServer, &col), "CHAR(1)");
}

#[test]
fn binary_length() {
    let col = Column {
        length: Some(16),
        ..column(SharedType::Binary)
    };
    assert_eq!(resolve(Dialect::Mysql, &col), "BINARY(16)");
    assert_eq!(resolve(Dialect::Oracle, &col), "RAW(16)");
    assert_eq!(resolve(Dialect::Postgresql, &col), "BYTEA");
    assert_eq!(resolve(Dialect::Informix, &col), "BYTE");
    assert_eq!(resolve(Dialect::Presto, &col), "VARBINARY");

    assert_eq!(
        resolve(Dialect::SqlServer, &column(SharedType::Varbinary)),
        "VARBINARY(255)"
    );
}

#[test]
fn decimal_defaults() {
    assert_eq!(resolve(Dialect::Mysql, &column(SharedType::Decimal)), "DECIMAL(10,2)");
    assert_eq!(
        resolve(Dialect::Postgresql, &column(SharedType::Decimal)),
        "NUMERIC(10,2)"
    );

    let col = Column {
        precision: Some((12, 4)),
        ..column(SharedType::Decimal)
    };
    assert_eq!(resolve(Dialect::Oracle, &col), "NUMBER(12,4)");
}

#[test]
fn scale_larger_than_precision_passes_through() {
    let col = Column {
        precision: Some((2, 5)),
        ..column(SharedType::Decimal)
    };
    assert_eq!(resolve(Dialect::Mysql, &col), "DECIMAL(2,5)");
}

#[test]
fn money() {
    let col = Column {
        precision: Some((12, 2)),
        ..column(SharedType::Money)
    };

    assert_eq!(resolve(Dialect::Postgresql, &col), "MONEY");
    assert_eq!(resolve(Dialect::SqlServer, &col), "MONEY");
    assert_eq!(resolve(Dialect::Informix, &col), "MONEY");
    assert_eq!(resolve(Dialect::Mysql, &col), "DECIMAL(12,2)");
    assert_eq!(resolve(Dialect::Mysql, &column(SharedType::Money)), "DECIMAL(19,4)");
}

#[test]
fn money_check_ignores_case() {
    let map = TypeMap::builder()
        .dialect(
            Dialect::Sqlite,
            ColumnType::shared().map(|ty| (ty, if ty == ColumnType::MONEY { "SmallMoney" } else { "TEXT" })),
        )
        .build()
        .unwrap();

    let resolved = map.resolve(Dialect::Sqlite, &column(SharedType::Money)).unwrap();
    assert_eq!(resolved, "SmallMoney");
}

#[test]
fn single_bit() {
    let bit = column(SharedType::Bit);

    assert_eq!(resolve(Dialect::Mysql, &bit), "BIT(1)");
    assert_eq!(resolve(Dialect::Postgresql, &bit), "BIT(1)");
    assert_eq!(resolve(Dialect::Presto, &bit), "VARBIT(1)");
    assert_eq!(resolve(Dialect::SqlServer, &bit), "BIT");
    assert_eq!(resolve(Dialect::Sqlite, &bit), "INTEGER");
}

#[test]
fn multi_bit() {
    let map = TypeMap::builtin().unwrap();
    let bits = Column {
        length: Some(8),
        ..column(SharedType::Bit)
    };

    assert_eq!(map.resolve(Dialect::Mysql, &bits).unwrap(), "BIT(8)");
    assert_eq!(map.resolve(Dialect::Postgresql, &bits).unwrap(), "BIT(8)");
    assert_eq!(map.resolve(Dialect::Presto, &bits).unwrap(), "VARBIT(8)");

    for dialect in [Dialect::SqlServer, Dialect::Sqlite, Dialect::Oracle, Dialect::Cql] {
        let err = map.resolve(dialect, &bits).unwrap_err();
        assert!(err.is_unsupported_multi_bit_field(), "{dialect}");
    }
}

#[test]
fn uuid_is_unparameterized() {
    let col = Column {
        length: Some(99),
        ..column(SharedType::Uuid)
    };
    assert_eq!(resolve(Dialect::Mysql, &col), "CHAR(36)");
    assert_eq!(resolve(Dialect::SqlServer, &col), "UNIQUEIDENTIFIER");
}

#[test]
fn dialect_specific_types() {
    let jsonb = Column::new("doc", PostgresqlType::Jsonb);
    assert_eq!(resolve(Dialect::Postgresql, &jsonb), "JSONB");

    let map = TypeMap::builtin().unwrap();
    let err = map.resolve(Dialect::Mysql, &jsonb).unwrap_err();
    assert!(err.is_unsupported_combination());
    assert_eq!(
        err.to_string(),
        "unsupported combination: MySQL has no mapping for JSONB"
    );

    // Dialect-specific types ignore length parameters
    let set = Column {
        length: Some(10),
        ..Column::new("tags", MysqlType::Set)
    };
    assert_eq!(resolve(Dialect::Mysql, &set), "SET");

    let money = Column::new("amount", SqlServerType::SmallMoney);
    assert_eq!(resolve(Dialect::SqlServer, &money), "SMALLMONEY");
}

#[test]
fn dialect_missing_from_custom_map() {
    let map = TypeMap::builder()
        .dialect(Dialect::Sqlite, ColumnType::shared().map(|ty| (ty, "TEXT")))
        .build()
        .unwrap();

    let err = map
        .resolve(Dialect::Postgresql, &column(SharedType::Int))
        .unwrap_err();
    assert!(err.is_unsupported_combination());
}
