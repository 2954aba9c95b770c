use super::{Formatter, Params, ToSql};

use tagorm_core::{schema::Field, Dialect};

/// One column line of a `CREATE TABLE` statement.
pub(super) struct ColumnDef<'a>(pub(super) &'a Field);

struct ColumnType<'a>(&'a Field);

struct Modifier<'a>(&'a str, Option<&'a str>);

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "  ", &self.0.column, " ", ColumnType(self.0));

        for (key, value) in self.0.tags.iter() {
            Modifier(key, value).to_sql(f);
        }
    }
}

impl ToSql for ColumnType<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let dialect = f.serializer.dialect;
        let sql_type = self.0.sql_type.as_deref().unwrap_or_default();

        if dialect == Dialect::Postgresql {
            if self.0.auto_increment() {
                return fmt!(f, "SERIAL");
            }

            if sql_type.eq_ignore_ascii_case("json") {
                return fmt!(f, "JSONB");
            }
        }

        fmt!(f, sql_type.to_uppercase());
    }
}

impl ToSql for Modifier<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = self.1.filter(|value| !value.is_empty());

        match (self.0, value) {
            // Table level constraints or relation metadata
            ("type" | "primaryKey" | "unique" | "uniqueIndex", _) => {}
            ("foreignKey" | "onDelete" | "onUpdate", _) => {}
            ("autoIncrement", _) => match f.serializer.dialect {
                Dialect::Postgresql => {}
                Dialect::Mysql => fmt!(f, " AUTO_INCREMENT"),
                Dialect::Sqlite => fmt!(f, " AUTOINCREMENT"),
            },
            ("check", Some(expr)) => fmt!(f, " CHECK (", expr, ")"),
            ("check", None) => {}
            (key, None) => fmt!(f, " ", key),
            (key, Some(value)) => fmt!(f, " ", key, " ", value),
        }
    }
}
