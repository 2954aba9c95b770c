use super::{column_def::ColumnDef, Comma, Delimited, Formatter, Params, Serializer, ToSql};

use tagorm_core::{schema::Table, Error, Result};

struct CreateTable<'a>(&'a Table);

impl Serializer {
    /// Renders `CREATE TABLE IF NOT EXISTS` for `table`.
    ///
    /// The first successful render is cached on the table. Later calls return
    /// that text, even if the table was changed or a different dialect is
    /// used.
    pub fn create_table(&self, table: &mut Table) -> Result<String> {
        let sql = table.render_ddl(|table| self.render_create_table(table))?;
        Ok(sql.to_string())
    }

    fn render_create_table(&self, table: &Table) -> Result<String> {
        if let Some(field) = table.columns().find(|field| field.sql_type.is_none()) {
            return Err(Error::type_resolution(&table.name, &field.column));
        }

        Ok(self.serialize(CreateTable(table)).sql)
    }
}

impl ToSql for CreateTable<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = self.0;
        let columns = Delimited(table.columns().map(ColumnDef), ",\n");

        fmt!(f, "CREATE TABLE IF NOT EXISTS ", &table.name, " (\n", columns);

        if let Some(pk) = table.primary_key_field() {
            fmt!(f, ",\n  PRIMARY KEY (", &pk.column, ")");
        }

        for field in table.unique_fields() {
            fmt!(f, ",\n  UNIQUE (", &field.column, ")");
        }

        for (_, fields) in table.composite_groups() {
            let columns = Comma(fields.into_iter().map(|field| &field.column));
            fmt!(f, ",\n  UNIQUE(", columns, ")");
        }

        fmt!(f, "\n);");
    }
}
