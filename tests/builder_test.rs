//! End-to-end builder flow: raw YAML job definition through source
//! registration, catalog metadata derivation, and SQL synthesis.

use streamweld_cdc::testing::MockEnvironment;
use streamweld_cdc::{
    CdcBuilderRegistry, CdcSourceConfig, Error, EventFormat, StartupMode, Table,
    WatermarkStrategy,
};

fn yaml(input: &str) -> serde_yaml::Value {
    serde_yaml::from_str(input).unwrap()
}

#[test]
fn test_mysql_job_end_to_end() {
    let value = yaml(
        r#"
        dialect: mysql-cdc
        hostname: db.example.com
        port: 3306
        username: repl
        password: hunter2
        database: inventory,billing
        table: inventory.orders
        startup_mode: initial
        properties:
          decimal.handling.mode: string
    "#,
    );

    let builder = CdcBuilderRegistry::global().instantiate_raw(&value).unwrap();
    assert_eq!(builder.handle(), "mysql-cdc");

    // Source registration.
    let mut env = MockEnvironment::new();
    let handle = builder.build(&mut env).unwrap();
    assert_eq!(handle.operator_name, "MySQL CDC Source");

    let registered = env.last();
    assert_eq!(registered.name, "MySQL CDC Source");
    assert_eq!(registered.watermarks, WatermarkStrategy::NoWatermarks);
    assert_eq!(registered.stream.hostname, "db.example.com");
    assert_eq!(registered.stream.port, 3306);
    assert_eq!(registered.stream.username, "repl");
    assert_eq!(registered.stream.password.expose(), "hunter2");
    assert_eq!(registered.stream.databases, ["inventory", "billing"]);
    assert_eq!(registered.stream.tables.as_deref(), Some("inventory.orders"));
    assert_eq!(registered.stream.format, EventFormat::DebeziumJson);
    assert_eq!(registered.stream.startup, StartupMode::Initial);
    assert_eq!(
        registered
            .stream
            .properties
            .get("decimal.handling.mode")
            .map(String::as_str),
        Some("string")
    );

    // Catalog metadata, one descriptor per schema.
    let metadata = builder.metadata_configs();
    assert_eq!(metadata.len(), 2);
    let inventory = &metadata["inventory"];
    assert_eq!(inventory.metadata_type, "MySql");
    assert_eq!(inventory.url, "mysql://db.example.com:3306/inventory");
    assert_eq!(inventory.name, inventory.url);
    assert_eq!(inventory.username.as_deref(), Some("repl"));
    assert_eq!(inventory.password.as_deref(), Some("hunter2"));

    // Projection SQL.
    let table = Table::new("inventory", "orders")
        .with_column("id")
        .with_column("amount");
    let sql = builder.insert_sql(&table, "src").unwrap();
    assert_eq!(
        sql,
        "INSERT INTO orders SELECT\n    `id` \n    ,`amount` \n FROM src"
    );
}

#[test]
fn test_every_builtin_dialect_resolves_and_quotes() {
    let registry = CdcBuilderRegistry::global();
    let expectations = [
        ("mysql-cdc", "`id`"),
        ("oracle-cdc", "\"id\""),
        ("postgres-cdc", "\"id\""),
        ("sqlserver-cdc", "[id]"),
    ];
    for (handle, quoted) in expectations {
        let prototype = registry.resolve(handle).unwrap();
        assert_eq!(prototype.handle(), handle);
        assert_eq!(prototype.quote_identifier("id"), quoted);
    }
}

#[test]
fn test_unknown_dialect_is_rejected() {
    let value = yaml(
        r#"
        dialect: mongo-cdc
        hostname: db.example.com
    "#,
    );
    let err = CdcBuilderRegistry::global()
        .instantiate_raw(&value)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDialect(key) if key == "mongo-cdc"));
}

#[test]
fn test_missing_dialect_fails_validation() {
    let value = yaml(
        r#"
        hostname: db.example.com
    "#,
    );
    let err = CdcBuilderRegistry::global()
        .instantiate_raw(&value)
        .unwrap_err();
    // The dialect field is required by the config schema, so this never
    // reaches registry lookup.
    assert!(!matches!(err, Error::UnsupportedDialect(_)));
}

#[test]
fn test_minimal_job_defaults() {
    let value = yaml(
        r#"
        dialect: postgres-cdc
        hostname: pg.example.com
        port: 5432
        username: repl
        password: hunter2
    "#,
    );
    let builder = CdcBuilderRegistry::global().instantiate_raw(&value).unwrap();

    let mut env = MockEnvironment::new();
    builder.build(&mut env).unwrap();

    let stream = &env.last().stream;
    assert!(stream.databases.is_empty());
    assert!(stream.tables.is_none());
    assert_eq!(stream.startup, StartupMode::Latest);
    assert!(stream.properties.is_empty());

    // No schemas configured, no catalog entries.
    assert!(builder.metadata_configs().is_empty());
}

#[test]
fn test_derivations_are_repeatable() {
    let config = CdcSourceConfig {
        dialect: "sqlserver-cdc".to_string(),
        hostname: Some("mssql.example.com".to_string()),
        port: Some(1433),
        username: Some("sa".to_string()),
        password: Some("hunter2".into()),
        database: Some("dbo".to_string()),
        ..Default::default()
    };
    let builder = CdcBuilderRegistry::global().instantiate(config).unwrap();

    assert_eq!(builder.metadata_configs(), builder.metadata_configs());

    let table = Table::new("dbo", "orders").with_column("id");
    assert_eq!(
        builder.insert_sql(&table, "src").unwrap(),
        builder.insert_sql(&table, "src").unwrap()
    );

    // Two builds register two independent sources.
    let mut env = MockEnvironment::new();
    builder.build(&mut env).unwrap();
    builder.build(&mut env).unwrap();
    assert_eq!(env.sources.len(), 2);
}
