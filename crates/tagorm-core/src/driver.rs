mod dialect;
pub use dialect::Dialect;

use crate::{
    async_trait,
    stmt::{Row, Value},
    Result,
};

use std::fmt::Debug;

/// Opens connections to a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect spoken by connections of this driver.
    fn dialect(&self) -> Dialect;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Upper bound on concurrently open connections, if the database imposes
    /// one. `None` leaves the pool default in place.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single open database connection.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a statement that returns no rows. Returns the number of rows
    /// affected.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Runs a statement and collects the returned rows.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;
}
