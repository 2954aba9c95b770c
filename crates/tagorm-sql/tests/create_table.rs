mod support;

use support::{table, PROFILE, TOKEN, USER, WIDGET};

use pretty_assertions::assert_eq;
use tagorm_core::{
    schema::{Field, Table},
    stmt::Type,
};
use tagorm_sql::Serializer;

#[test]
fn serial_key_and_not_null_column() {
    let mut table = Table::build(
        "items".to_string(),
        vec![
            Field::new("ID", Type::I64, "primaryKey;autoIncrement"),
            Field::new("Name", Type::String, "not null"),
        ],
    )
    .unwrap();

    let sql = Serializer::postgresql().create_table(&mut table).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS items (\n  id SERIAL,\n  name VARCHAR(255) not null,\n  PRIMARY KEY (id)\n);"
    );
}

#[test]
fn full_model() {
    let sql = Serializer::postgresql().create_table(&mut table(&USER)).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS examples (\n\
         \x20 id SERIAL not null,\n\
         \x20 name VARCHAR(200) not null,\n\
         \x20 age INTEGER not null default 20 CHECK (age > 20),\n\
         \x20 birth_date DATE not null,\n\
         \x20 details JSONB,\n\
         \x20 username VARCHAR(255) not null CHECK (age > 20),\n\
         \x20 PRIMARY KEY (id),\n\
         \x20 UNIQUE(name, username)\n\
         );"
    );
}

#[test]
fn unique_and_array_columns() {
    let profiles = Serializer::postgresql().create_table(&mut table(&PROFILE)).unwrap();
    assert_eq!(
        profiles,
        "CREATE TABLE IF NOT EXISTS user_profiles (\n  id INTEGER,\n  name VARCHAR(255) not null,\n  user_id INTEGER not null,\n  PRIMARY KEY (id),\n  UNIQUE (user_id)\n);"
    );

    let tokens = Serializer::postgresql().create_table(&mut table(&TOKEN)).unwrap();
    assert_eq!(
        tokens,
        "CREATE TABLE IF NOT EXISTS tokens (\n  uuid UUID not null,\n  user_id INTEGER not null,\n  privileges TEXT[],\n  PRIMARY KEY (uuid)\n);"
    );
}

#[test]
fn unique_clause_count() {
    let mut table = Table::build(
        "accounts".to_string(),
        vec![
            Field::new("Email", Type::String, "unique"),
            Field::new("Handle", Type::String, "unique;uniqueIndex:a"),
            Field::new("Org", Type::I32, "uniqueIndex:a"),
            Field::new("Team", Type::I32, "uniqueIndex:b"),
        ],
    )
    .unwrap();

    let sql = Serializer::postgresql().create_table(&mut table).unwrap();
    let unique = sql.matches("UNIQUE").count();

    assert_eq!(unique, table.unique.len() + table.composite_unique.len());
    assert_eq!(unique, 4);
    assert!(sql.contains(",\n  UNIQUE(handle, org)"));
    assert!(sql.contains(",\n  UNIQUE(team)"));
}

#[test]
fn render_is_cached() {
    let mut table = table(&WIDGET);
    let serializer = Serializer::postgresql();

    let first = serializer.create_table(&mut table).unwrap();
    table.name = "gadgets".to_string();
    table.fields.pop();
    let second = serializer.create_table(&mut table).unwrap();
    let other_dialect = Serializer::mysql().create_table(&mut table).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, other_dialect);
    assert!(first.starts_with("CREATE TABLE IF NOT EXISTS widgets ("));
}

#[test]
fn unresolved_type() {
    let mut table = Table::build(
        "images".to_string(),
        vec![Field::new("Avatar", Type::Unknown("Image"), "not null")],
    )
    .unwrap();

    let err = Serializer::postgresql().create_table(&mut table).unwrap_err();
    assert!(err.is_type_resolution());
    assert_eq!(
        err.to_string(),
        "cannot resolve SQL type for column `images.avatar`; add a `type` tag"
    );
    assert!(!table.ddl().is_rendered());
}

#[test]
fn type_tag_compensates() {
    let mut table = Table::build(
        "images".to_string(),
        vec![Field::new("Avatar", Type::Unknown("Image"), "type:bytea")],
    )
    .unwrap();

    let sql = Serializer::postgresql().create_table(&mut table).unwrap();
    assert_eq!(sql, "CREATE TABLE IF NOT EXISTS images (\n  avatar BYTEA\n);");
}

#[test]
fn other_dialects() {
    let fields = || {
        vec![
            Field::new("ID", Type::I64, "primaryKey;autoIncrement"),
            Field::new("Meta", Type::Json, ""),
        ]
    };

    let mut mysql = Table::build("things".to_string(), fields()).unwrap();
    assert_eq!(
        Serializer::mysql().create_table(&mut mysql).unwrap(),
        "CREATE TABLE IF NOT EXISTS things (\n  id INTEGER AUTO_INCREMENT,\n  meta JSON,\n  PRIMARY KEY (id)\n);"
    );

    let mut sqlite = Table::build("things".to_string(), fields()).unwrap();
    assert_eq!(
        Serializer::sqlite().create_table(&mut sqlite).unwrap(),
        "CREATE TABLE IF NOT EXISTS things (\n  id INTEGER AUTOINCREMENT,\n  meta JSON,\n  PRIMARY KEY (id)\n);"
    );
}
