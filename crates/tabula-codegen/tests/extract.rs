use pretty_assertions::assert_eq;
use tabula_codegen::{extract, Extractor, Vocabulary};
use tabula_core::{Column, ColumnType, DefaultValue, PostgresqlType, SharedType};

#[test]
fn single_table_among_unrelated_items() {
    let entities = extract(
        r#"
        use tabula::dsl as t;

        const LIMIT: usize = 10;

        fn helper() -> i32 { 1 }

        struct NotATable { name: &'static str }

        static OTHER: NotATable = NotATable { name: "nope" };

        pub static UserSchema: t::Table = t::Table {
            name: "users",
            columns: &[t::int("id")],
        };
        "#,
    )
    .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "User");
    assert_eq!(entities[0].table_name, "users");
    assert_eq!(entities[0].columns, vec![Column::new("id", SharedType::Int)]);
    assert!(entities[0].diagnostics.is_empty());
}

#[test]
fn nothing_to_extract() {
    let entities = extract("fn main() {}\nconst X: i32 = 1;").unwrap();
    assert!(entities.is_empty());

    assert!(extract("").unwrap().is_empty());
}

#[test]
fn parse_failure() {
    let err = extract("static X: Table = Table { name: ").unwrap_err();
    assert!(err.is_parse_failure());
}

#[test]
fn column_order_and_options() {
    let entities = extract(
        r#"
        use tabula::prelude::*;

        pub static ProductDefinition: Table = Table {
            name: "products",
            columns: &[
                big_int("id", auto_increment(true)),
                varchar("title", length(200), default("untitled")),
                decimal("price").precision(12, 4),
                boolean("active").default(true),
                double("weight", default(-0.5)),
                char("grade").length(2).default('A'),
            ],
        };
        "#,
    )
    .unwrap();

    let product = &entities[0];
    assert_eq!(product.name, "Product");

    let names: Vec<&str> = product.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "title", "price", "active", "weight", "grade"]);

    assert!(product.columns[0].auto_increment);
    assert_eq!(product.columns[1].length, Some(200));
    assert_eq!(
        product.columns[1].default,
        Some(DefaultValue::Str("untitled".into()))
    );
    assert_eq!(product.columns[2].precision, Some((12, 4)));
    assert_eq!(product.columns[3].default, Some(DefaultValue::Bool(true)));
    assert_eq!(product.columns[4].default, Some(DefaultValue::Float(-0.5)));
    assert_eq!(product.columns[5].length, Some(2));
    assert_eq!(product.columns[5].default, Some(DefaultValue::Char('A')));
    assert!(product.diagnostics.is_empty());
}

#[test]
fn default_zero_is_present() {
    let entities = extract(
        r#"
        static CounterTable: Table = Table {
            name: "counters",
            columns: [int("value", default(0)), int("other")],
        };
        "#,
    )
    .unwrap();

    let counter = &entities[0];
    assert_eq!(counter.name, "Counter");
    assert_eq!(counter.columns[0].default, Some(DefaultValue::Int(0)));
    assert_eq!(counter.columns[1].default, None);
}

#[test]
fn suffix_handling() {
    let entities = extract(
        r#"
        static ORDER_TABLE: Table = Table { name: "orders" };
        static Schema: Table = Table { name: "schema" };
        static InvoiceTableSchema: Table = Table { name: "invoices" };
        "#,
    )
    .unwrap();

    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["ORDER", "Schema", "InvoiceTable"]);

    // Missing `columns` means no columns
    assert!(entities.iter().all(|e| e.columns.is_empty()));
}

#[test]
fn tables_without_a_name_are_dropped() {
    let entities = extract(
        r#"
        static AnonSchema: Table = Table { columns: &[int("id")] };
        static EmptySchema: Table = Table { name: "", columns: &[] };
        static ComputedSchema: Table = Table { name: NAME, columns: &[] };
        static KeptSchema: Table = Table { name: "kept", columns: vec![text("body")] };
        "#,
    )
    .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].table_name, "kept");
    assert_eq!(entities[0].columns[0].ty, ColumnType::TEXT);
}

#[test]
fn aliased_imports() {
    let entities = extract(
        r#"
        use tabula::dsl::{self, varchar as vc, Table as T};

        const AccountSchema: T = T {
            name: "accounts",
            columns: &[
                vc("email"),
                dsl::uuid("id"),
                tabula::dsl::json("meta"),
            ],
        };
        "#,
    )
    .unwrap();

    let tys: Vec<ColumnType> = entities[0].columns.iter().map(|c| c.ty).collect();
    assert_eq!(
        tys,
        [ColumnType::VARCHAR, ColumnType::UUID, SharedType::Json.into()]
    );
}

#[test]
fn unrelated_table_types_are_ignored() {
    let entities = extract(
        r#"
        use other::Table;
        use tabula::dsl as t;

        static FakeSchema: Table = Table { name: "fake", columns: &[] };
        static RealSchema: t::Table = t::Table { name: "real", columns: &[] };
        static OtherSchema: other::Table = other::Table { name: "other", columns: &[] };
        "#,
    )
    .unwrap();

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].table_name, "real");
}

#[test]
fn sql_type_override() {
    let entities = extract(
        r#"
        use tabula::dsl::*;
        use tabula::PostgresqlType as Pg;

        static DocSchema: Table = Table {
            name: "docs",
            columns: &[
                text("body", sql_type(PostgresqlType::Jsonb)),
                text("meta").sql_type(Pg::Hstore),
                text("search", sql_type("TSVECTOR")),
                varchar("code").sql_type(SharedType::Char).length(3),
            ],
        };
        "#,
    )
    .unwrap();

    let columns = &entities[0].columns;
    assert_eq!(columns[0].ty, ColumnType::Postgresql(PostgresqlType::Jsonb));
    assert_eq!(columns[0].explicit_type.as_deref(), Some("JSONB"));
    assert_eq!(columns[1].ty, ColumnType::Postgresql(PostgresqlType::Hstore));
    assert_eq!(columns[2].ty, ColumnType::TEXT);
    assert_eq!(columns[2].explicit_type.as_deref(), Some("TSVECTOR"));
    assert_eq!(columns[3].ty, ColumnType::CHAR);
    assert_eq!(columns[3].length, Some(3));
    assert!(entities[0].diagnostics.is_empty());
}

#[test]
fn unknown_options_are_silent() {
    let entities = extract(
        r#"
        static TagSchema: Table = Table {
            name: "tags",
            columns: &[varchar("label", indexed(true)).comment("shown in UI")],
        };
        "#,
    )
    .unwrap();

    assert_eq!(entities[0].columns.len(), 1);
    assert!(entities[0].diagnostics.is_empty());
}

#[test]
fn malformed_constructs_are_reported() {
    let entities = extract(
        r#"
static BadSchema: Table = Table {
    name: "bad",
    columns: &[
        varchar("a", length("ten")),
        varchar("b").precision(1),
        varchar("c", auto_increment(true)),
        geometry("d"),
        int(),
        int("e"),
        int("e"),
        int("f", default(99999999999999999999)),
        "g",
    ],
};
"#,
    )
    .unwrap();

    let bad = &entities[0];
    let names: Vec<&str> = bad.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "e", "f"]);

    // Malformed options leave the attribute unset
    assert_eq!(bad.columns[0].length, None);
    assert_eq!(bad.columns[1].precision, None);
    assert!(!bad.columns[2].auto_increment);
    assert_eq!(bad.columns[4].default, None);

    let lines: Vec<usize> = bad.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, [5, 6, 7, 8, 9, 11, 12, 13]);

    assert!(bad.diagnostics[3]
        .message
        .contains("unrecognized column constructor `geometry`"));
    assert!(bad.diagnostics[5].message.contains("duplicate column `e`"));
}

#[test]
fn custom_vocabulary() {
    let extractor = Extractor::new(
        Vocabulary::standard()
            .with_module("app::schema")
            .with_constructor("string", SharedType::Text),
    );

    let entities = extractor
        .extract(
            r#"
            use app::schema as s;

            static NoteSchema: s::Table = s::Table {
                name: "notes",
                columns: &[s::string("body")],
            };
            "#,
        )
        .unwrap();

    assert_eq!(entities[0].columns[0].ty, ColumnType::TEXT);
}

#[test]
fn extraction_is_repeatable() {
    let src = r#"
        static UserSchema: Table = Table {
            name: "users",
            columns: &[int("id", auto_increment(true)), varchar("email", length(64))],
        };
    "#;

    assert_eq!(extract(src).unwrap(), extract(src).unwrap());
}
