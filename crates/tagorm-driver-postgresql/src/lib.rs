mod row;

mod value;
pub(crate) use value::Value;

use postgres_types::ToSql;
use tagorm_core::{async_trait, driver, err, stmt, Dialect, Error, Result};
use tokio_postgres::{tls::MakeTlsConnect, Client, Config, Socket};
use url::Url;

/// Opens PostgreSQL connections.
#[derive(Debug, Clone)]
pub struct PostgreSQL {
    config: Config,
}

impl PostgreSQL {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the driver from a `postgres://` or `postgresql://` URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::invalid_config(e.to_string()))?;

        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(Error::invalid_config(format!(
                "connection URL does not have a `postgresql` scheme; url={url}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_config(format!("missing host in connection URL; url={url}"))
        })?;

        let dbname = url.path().trim_start_matches('/');

        if dbname.is_empty() {
            return Err(Error::invalid_config(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        for (key, value) in url.query_pairs() {
            if key == "application_name" {
                config.application_name(&*value);
            }
        }

        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl driver::Driver for PostgreSQL {
    fn dialect(&self) -> Dialect {
        Dialect::Postgresql
    }

    async fn connect(&self) -> Result<Box<dyn driver::Connection>> {
        let connection = Connection::connect_with_config(self.config.clone(), tokio_postgres::NoTls).await?;
        Ok(Box::new(connection))
    }
}

/// One PostgreSQL client connection.
#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl Connection {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects with an explicit TLS connector and drives the connection on
    /// a background task.
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(driver_error)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "postgresql connection error");
            }
        });

        Ok(Self::new(client))
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_closed()
    }
}

impl From<Client> for Connection {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl driver::Connection for Connection {
    async fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        self.client.execute(sql, &args).await.map_err(driver_error)
    }

    async fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<stmt::Row>> {
        let params = params.iter().cloned().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        let rows = self.client.query(sql, &args).await.map_err(driver_error)?;
        rows.iter().map(row::postgres_to_tagorm).collect()
    }
}

/// Database errors carry the server message in their source, which the
/// driver error displays.
fn driver_error(e: tokio_postgres::Error) -> Error {
    if e.is_closed() {
        return Error::driver(e).context(err!("postgresql connection closed"));
    }

    Error::driver(e)
}
