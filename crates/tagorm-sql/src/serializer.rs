#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod create_table;
mod foreign_key;
mod statement;

use crate::Statement;

use tagorm_core::Dialect;

/// Renders table models to SQL text for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    dialect: Dialect,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        Serializer { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn serialize(&self, fragment: impl ToSql) -> Statement {
        let mut sql = String::new();
        let mut params = vec![];

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut sql,
            params: &mut params,
        };

        fragment.to_sql(&mut fmt);

        Statement { sql, params }
    }
}
