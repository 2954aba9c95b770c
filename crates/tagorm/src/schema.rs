//! SQL generation without a database.
//!
//! These helpers render the same statements [`Db`](crate::Db) runs, for a
//! given dialect.

use crate::Model;

use tagorm_core::{Descriptor, Dialect, Result};
use tagorm_sql::{Filter, Serializer, Statement};

/// Column names of a table, plain and qualified with the table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub names: Vec<String>,
    pub qualified: Vec<String>,
}

/// The `CREATE TABLE IF NOT EXISTS` statement for `descriptor`.
pub fn schema(descriptor: &Descriptor, dialect: Dialect) -> Result<String> {
    let mut table = descriptor.table()?;
    Serializer::new(dialect).create_table(&mut table)
}

pub fn columns(descriptor: &Descriptor) -> Result<Columns> {
    let table = descriptor.table()?;

    Ok(Columns {
        names: table.column_names().into_iter().map(String::from).collect(),
        qualified: table.qualified_column_names(),
    })
}

/// Inserts `model`. A zero primary key is left for the database to assign.
pub fn insert<M: Model>(model: &M, dialect: Dialect) -> Result<Statement> {
    let table = M::table()?;
    Ok(Serializer::new(dialect).insert(&table, &model.values()))
}

/// Updates every non-key column of `model` on the rows matching `filter`.
pub fn update<M: Model>(model: &M, filter: &Filter, dialect: Dialect) -> Result<Statement> {
    let table = M::table()?;
    Serializer::new(dialect).update_where(&table, &model.values(), filter)
}

/// `DELETE FROM` the model's table, with no condition.
pub fn delete<M: Model>(dialect: Dialect) -> Result<Statement> {
    let table = M::table()?;
    Ok(Serializer::new(dialect).delete(&table))
}
