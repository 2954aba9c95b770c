pub mod db;
pub use db::{Config, Db, Pool, PoolConfig};

mod model;
pub use model::Model;

pub mod schema;
pub use schema::{columns, delete, insert, schema, update, Columns};

pub use tagorm_core::{
    async_trait, bail, err,
    stmt::{Date, Json, Primitive, Row, Type, Value},
    Connection, Descriptor, Dialect, Driver, Error, MissingFilterReason, Result, Table,
};
pub use tagorm_macros::Model;
pub use tagorm_sql::{Filter, Migration, Statement};

pub mod driver {
    pub use tagorm_core::driver::*;

    #[cfg(feature = "postgresql")]
    pub use tagorm_driver_postgresql::PostgreSQL;
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::Model;
    pub use tagorm_core::{
        schema::{Descriptor, FieldDescriptor, Shape},
        stmt::{Primitive, Row, Type, Value},
        Error, Result,
    };
}
