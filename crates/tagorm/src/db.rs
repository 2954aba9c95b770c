mod config;
pub use config::Config;

mod pool;
pub use pool::{Pool, PoolConfig, PoolConnection, Timeouts};

use crate::Model;

use tagorm_core::{err, stmt::Row, Descriptor, Dialect, Driver, Error, Result};
use tagorm_sql::{Filter, Migration, Serializer, Statement};

/// A handle to a pooled database.
///
/// Every operation checks a connection out of the pool for its duration.
/// Cloning the handle shares the pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: Pool,
    serializer: Serializer,
}

impl Db {
    /// Connects with the built-in driver for the configured dialect.
    #[cfg(feature = "postgresql")]
    pub async fn connect(config: Config) -> Result<Db> {
        config.validate()?;

        let driver = tagorm_driver_postgresql::PostgreSQL::from_url(&config.url)?;
        Db::with_pool_config(driver, &config.pool).await
    }

    pub async fn new(driver: impl Driver) -> Result<Db> {
        Db::with_pool_config(driver, &PoolConfig::default()).await
    }

    pub async fn with_pool_config(driver: impl Driver, config: &PoolConfig) -> Result<Db> {
        let pool = Pool::new(driver, config).await?;
        let serializer = Serializer::new(pool.dialect());
        Ok(Db { pool, serializer })
    }

    pub fn dialect(&self) -> Dialect {
        self.pool.dialect()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Loads every row of the model's table, narrowed by `filter` when one
    /// is given.
    pub async fn find_all<M: Model>(&self, filter: Option<&Filter>) -> Result<Vec<M>> {
        let table = M::table()?;
        let stmt = self.serializer.select_where(&table, filter);

        self.query(&stmt)
            .await?
            .into_iter()
            .map(M::from_row)
            .collect()
    }

    /// Loads the single row matching `filter`.
    pub async fn find<M: Model>(&self, filter: &Filter) -> Result<M> {
        filter.validate()?;

        let table = M::table()?;
        let stmt = self.serializer.select_where(&table, Some(filter));
        let row = self.query_one(&stmt, &table.name).await?;
        M::from_row(row)
    }

    /// Inserts `model` and reloads it from the returned row, picking up
    /// database assigned values such as a serial primary key.
    pub async fn create<M: Model>(&self, model: &mut M) -> Result<()> {
        let table = M::table()?;
        let stmt = self.serializer.insert(&table, &model.values());

        if !self.dialect().supports_returning() {
            self.execute(&stmt).await?;
            return Ok(());
        }

        let row = self.query_one(&stmt, &table.name).await?;
        *model = M::from_row(row)?;
        Ok(())
    }

    /// Writes every non-key column of `model` to the row matching `filter`
    /// and reloads `model` from it.
    pub async fn update<M: Model>(&self, model: &mut M, filter: &Filter) -> Result<()> {
        let table = M::table()?;
        let stmt = self
            .serializer
            .update_where(&table, &model.values(), filter)?;

        if !self.dialect().supports_returning() {
            self.execute(&stmt).await?;
            return Ok(());
        }

        let row = self.query_one(&stmt, &table.name).await?;
        *model = M::from_row(row)?;
        Ok(())
    }

    /// Deletes the rows matching `filter`. Returns the number of rows
    /// deleted.
    pub async fn delete<M: Model>(&self, filter: &Filter) -> Result<u64> {
        let table = M::table()?;
        let stmt = self.serializer.delete_where(&table, filter)?;
        self.execute(&stmt).await
    }

    /// Creates the tables of `descriptors` and their foreign keys.
    ///
    /// Tables are created in the given order. A table that fails to create
    /// is logged and skipped along with its foreign keys. A foreign key that
    /// already exists is ignored; any other foreign key failure stops the
    /// migration.
    ///
    /// A model whose table or DDL cannot be built is logged and left out.
    /// The remaining tables are still created, then an error naming every
    /// skipped model is returned with the first failure as its cause.
    pub async fn auto_migrate(&self, descriptors: &[&'static Descriptor]) -> Result<()> {
        let mut migration = Migration::new(self.dialect());
        let mut invalid = Vec::new();

        for descriptor in descriptors {
            let registered = descriptor
                .table()
                .and_then(|table| migration.register(table));

            if let Err(err) = registered {
                tracing::warn!(model = descriptor.name, error = %err, "skipping model");
                invalid.push((descriptor.name, err));
            }
        }

        let steps = migration.steps()?;
        let mut connection = self.pool.get().await?;

        for step in steps {
            log_statement(&step.create, &[]);

            if let Err(err) = connection.execute(&step.create, &[]).await {
                tracing::warn!(table = %step.table, error = %err, "failed to create table");
                continue;
            }

            for alter in &step.foreign_keys {
                log_statement(alter, &[]);

                match connection.execute(alter, &[]).await {
                    Ok(_) => {}
                    Err(err) if err.to_string().contains("already exists") => {
                        tracing::debug!(table = %step.table, "foreign key already exists");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        let Some((_, first)) = invalid.first() else {
            return Ok(());
        };

        let models: Vec<_> = invalid.iter().map(|(model, _)| *model).collect();
        Err(first
            .clone()
            .context(err!("cannot migrate models {}", models.join(", "))))
    }

    /// Closes the pool. Connections in use are closed when returned.
    pub fn close(&self) {
        self.pool.close();
    }

    async fn query(&self, stmt: &Statement) -> Result<Vec<Row>> {
        log_statement(&stmt.sql, &stmt.params);

        let mut connection = self.pool.get().await?;
        connection.query(&stmt.sql, &stmt.params).await
    }

    async fn query_one(&self, stmt: &Statement, table: &str) -> Result<Row> {
        let mut rows = self.query(stmt).await?;

        match rows.len() {
            0 => Err(Error::record_not_found(table)),
            1 => Ok(rows.remove(0)),
            n => Err(Error::too_many_records(table, n)),
        }
    }

    async fn execute(&self, stmt: &Statement) -> Result<u64> {
        log_statement(&stmt.sql, &stmt.params);

        let mut connection = self.pool.get().await?;
        connection.execute(&stmt.sql, &stmt.params).await
    }
}

fn log_statement(sql: &str, params: &[tagorm_core::stmt::Value]) {
    tracing::info!(target: "tagorm::query", sql, ?params, "query");
}
