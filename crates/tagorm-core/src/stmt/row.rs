use super::Value;
use crate::{err, Result};

/// A single result row: column names paired with their values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Row {
        assert_eq!(columns.len(), values.len(), "column and value counts differ");
        Row { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the value of the named column, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.position(column).map(|i| &self.values[i])
    }

    /// Moves the value of the named column out of the row, leaving `Null`
    /// in its place.
    pub fn take(&mut self, column: &str) -> Result<Value> {
        match self.position(column) {
            Some(i) => Ok(std::mem::take(&mut self.values[i])),
            None => Err(err!("column `{column}` missing from result row")),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
