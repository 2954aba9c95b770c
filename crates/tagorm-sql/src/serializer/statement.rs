use super::{params::Param, Comma, Formatter, Params, Serializer, ToSql};
use crate::{Filter, Statement};

use tagorm_core::{
    schema::{Field, Table},
    stmt::Value,
    Result,
};

struct Insert<'a> {
    table: &'a Table,
    values: &'a [Value],
}

struct Update<'a> {
    table: &'a Table,
    values: &'a [Value],
}

struct Assignment<'a>(&'a Field, &'a Value);

impl Serializer {
    /// `INSERT INTO` over the table's columns.
    ///
    /// `values` holds one value per table field, in field order. Relation
    /// fields are skipped, and so is a primary key whose value is zero.
    pub fn insert(&self, table: &Table, values: &[Value]) -> Statement {
        debug_assert_eq!(table.fields.len(), values.len());
        self.serialize(Insert { table, values })
    }

    /// `UPDATE ... SET` over every column except the primary key. No `WHERE`
    /// clause is generated; see [`Serializer::update_where`].
    pub fn update(&self, table: &Table, values: &[Value]) -> Statement {
        debug_assert_eq!(table.fields.len(), values.len());
        self.serialize(Update { table, values })
    }

    /// An update restricted by `filter`, with the filter's placeholders
    /// renumbered after the assignments.
    pub fn update_where(&self, table: &Table, values: &[Value], filter: &Filter) -> Result<Statement> {
        filter.validate()?;

        let mut stmt = self.update(table, values);
        filter.apply_renumbered(&mut stmt, self.dialect);

        if self.dialect.supports_returning() {
            stmt.sql.push_str(" RETURNING *");
        }

        Ok(stmt)
    }

    /// `DELETE FROM <table> ` with no condition.
    pub fn delete(&self, table: &Table) -> Statement {
        Statement::new(format!("DELETE FROM {} ", table.name), vec![])
    }

    pub fn delete_where(&self, table: &Table, filter: &Filter) -> Result<Statement> {
        filter.validate()?;

        let mut stmt = self.delete(table);
        filter.apply(&mut stmt);
        Ok(stmt)
    }

    /// `SELECT` over the table qualified columns.
    pub fn select(&self, table: &Table) -> Statement {
        let columns = table.qualified_column_names().join(", ");
        Statement::new(format!("SELECT {columns} FROM {} ", table.name), vec![])
    }

    /// A select, optionally narrowed by `filter`. The filter is not
    /// validated; an incomplete filter only contributes its raw query.
    pub fn select_where(&self, table: &Table, filter: Option<&Filter>) -> Statement {
        let mut stmt = self.select(table);

        if let Some(filter) = filter {
            filter.apply(&mut stmt);
        }

        stmt
    }
}

impl ToSql for Insert<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let bound: Vec<_> = self
            .table
            .fields
            .iter()
            .zip(self.values)
            .filter(|(field, value)| field.is_column() && !(field.primary_key && value.is_zero()))
            .collect();

        let columns = Comma(bound.iter().map(|&(field, _)| &field.column));
        let params = Comma(bound.iter().map(|&(_, value)| Param(value)));

        fmt!(f, "INSERT INTO ", &self.table.name, " (", columns, ") VALUES (", params, ")");

        if f.serializer.dialect.supports_returning() {
            fmt!(f, " RETURNING *");
        }
    }
}

impl ToSql for Update<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = self
            .table
            .fields
            .iter()
            .zip(self.values)
            .filter(|(field, _)| field.is_column() && !field.primary_key)
            .map(|(field, value)| Assignment(field, value));

        fmt!(f, "UPDATE ", &self.table.name, " SET ", Comma(assignments));
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, &self.0.column, " = ", Param(self.1));
    }
}
