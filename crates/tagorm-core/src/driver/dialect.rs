use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// A targeted SQL variant.
///
/// Only PostgreSQL can be executed against. MySQL and SQLite are available
/// for statement generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    #[default]
    Postgresql,
    Mysql,
    Sqlite,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgresql => "postgresql",
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Writes the placeholder for the 1-based parameter position `n`.
    pub fn placeholder(self, n: usize) -> String {
        match self {
            Dialect::Postgresql => format!("${n}"),
            Dialect::Mysql => "?".to_string(),
            Dialect::Sqlite => format!("?{n}"),
        }
    }

    /// Whether `INSERT` and `UPDATE` can return the written row.
    pub fn supports_returning(self) -> bool {
        matches!(self, Dialect::Postgresql)
    }

    /// Whether tagorm can execute statements in this dialect.
    pub fn is_executable(self) -> bool {
        matches!(self, Dialect::Postgresql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Dialect> {
        match s {
            "postgres" | "postgresql" => Ok(Dialect::Postgresql),
            "mysql" => Ok(Dialect::Mysql),
            "sqlite" => Ok(Dialect::Sqlite),
            "" => Err(Error::invalid_config("database dialect is empty")),
            other => Err(Error::invalid_config(format!("unsupported dialect `{other}`"))),
        }
    }
}
