mod support;

use support::models::{AuditEntry, Category, Profile, User};

use pretty_assertions::assert_eq;
use tagorm::{Dialect, Filter, Model, Type, Value};

#[test]
fn table_names() {
    assert_eq!(Category::table().unwrap().name, "categories");
    assert_eq!(User::table().unwrap().name, "users");
    assert_eq!(AuditEntry::table().unwrap().name, "audit_log");
}

#[test]
fn descriptor_skips_skipped_fields() {
    let fields = User::descriptor().fields().unwrap();
    let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();

    assert_eq!(
        names,
        ["id", "name", "email", "age", "birthday", "tags", "settings", "profile"]
    );
    assert_eq!(fields[5].ty, Type::list(Type::String));
    assert!(fields[7].foreign_key);
}

#[test]
fn category_schema() {
    let sql = tagorm::schema(Category::descriptor(), Dialect::Postgresql).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS categories (\n  id SERIAL,\n  name VARCHAR(255) not null,\n  PRIMARY KEY (id),\n  UNIQUE (name)\n);"
    );
}

#[test]
fn user_schema() {
    let sql = tagorm::schema(User::descriptor(), Dialect::Postgresql).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS users (\n\
         \x20 id SERIAL,\n\
         \x20 name VARCHAR(100) not null,\n\
         \x20 email VARCHAR(255) not null,\n\
         \x20 age INTEGER CHECK (age >= 0) default 18,\n\
         \x20 birthday DATE,\n\
         \x20 tags TEXT[],\n\
         \x20 settings JSONB,\n\
         \x20 PRIMARY KEY (id),\n\
         \x20 UNIQUE(name, email)\n\
         );"
    );
}

#[test]
fn mysql_schema() {
    let sql = tagorm::schema(Category::descriptor(), Dialect::Mysql).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS categories (\n  id INTEGER AUTO_INCREMENT,\n  name VARCHAR(255) not null,\n  PRIMARY KEY (id),\n  UNIQUE (name)\n);"
    );
}

#[test]
fn columns_skip_relations() {
    let columns = tagorm::columns(User::descriptor()).unwrap();

    assert_eq!(
        columns.names,
        ["id", "name", "email", "age", "birthday", "tags", "settings"]
    );
    assert_eq!(columns.qualified[0], "users.id");
    assert_eq!(columns.qualified.len(), columns.names.len());
}

#[test]
fn user_foreign_key() {
    let table = User::table().unwrap();
    let fk = &table.foreign_keys[0];

    assert_eq!(fk.name, "users_profile_fkey");
    assert_eq!(fk.table, "profiles");
    assert_eq!(fk.column, "user_id");
    assert_eq!(fk.parent_table, "users");
    assert_eq!(fk.on_delete.as_deref(), Some("CASCADE"));
    assert_eq!(fk.on_update, None);
}

#[test]
fn insert_leaves_zero_key_out() {
    let category = Category {
        id: 0,
        name: "books".to_string(),
    };

    let stmt = tagorm::insert(&category, Dialect::Postgresql).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO categories (name) VALUES ($1) RETURNING *");
    assert_eq!(stmt.params, [Value::from("books")]);

    let category = Category { id: 3, ..category };
    let stmt = tagorm::insert(&category, Dialect::Sqlite).unwrap();
    assert_eq!(stmt.sql, "INSERT INTO categories (id, name) VALUES (?1, ?2)");
}

#[test]
fn insert_binds_model_values() {
    let user = User {
        name: "ada".to_string(),
        email: "ada@example.com".to_string(),
        age: 36,
        tags: vec!["admin".to_string()],
        ..User::default()
    };

    let stmt = tagorm::insert(&user, Dialect::Postgresql).unwrap();

    assert_eq!(
        stmt.sql,
        "INSERT INTO users (name, email, age, birthday, tags, settings) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
    );
    assert_eq!(stmt.params[2], Value::I16(36));
    assert_eq!(stmt.params[3], Value::Null);
    assert_eq!(stmt.params[4], Value::List(vec![Value::from("admin")]));
}

#[test]
fn update_renumbers_filter() {
    let category = Category {
        id: 7,
        name: "games".to_string(),
    };
    let filter = Filter::new("id = $1").arg(7_i32);

    let stmt = tagorm::update(&category, &filter, Dialect::Postgresql).unwrap();

    assert_eq!(stmt.sql, "UPDATE categories SET name = $1 WHERE id = $2 RETURNING *");
    assert_eq!(stmt.params, [Value::from("games"), Value::I32(7)]);
}

#[test]
fn update_requires_filter() {
    let err = tagorm::update(&Category::default(), &Filter::new(""), Dialect::Postgresql)
        .unwrap_err();
    assert!(err.is_missing_filter());
}

#[test]
fn delete_has_no_condition() {
    let stmt = tagorm::delete::<Profile>(Dialect::Postgresql).unwrap();
    assert_eq!(stmt.sql, "DELETE FROM profiles ");
    assert!(stmt.params.is_empty());
}
