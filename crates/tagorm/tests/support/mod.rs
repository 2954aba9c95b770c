#![allow(dead_code)]

use tagorm::{async_trait, err, Connection, Dialect, Driver, Result, Row, Value};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A statement received by a [`Recording`] connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Default)]
struct State {
    executed: Vec<Executed>,

    /// Result sets handed out to `query` calls, in order
    results: VecDeque<Vec<Row>>,

    /// Statements containing the pattern fail with the message
    failures: Vec<(String, String)>,

    connections: usize,
}

/// An in-memory driver that records every statement.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    state: Arc<Mutex<State>>,
}

impl Recording {
    pub fn new() -> Recording {
        Recording::default()
    }

    /// Queues the rows returned by the next `query`.
    pub fn returns(&self, rows: Vec<Row>) -> &Self {
        self.state.lock().unwrap().results.push_back(rows);
        self
    }

    /// Makes statements containing `pattern` fail with `message`.
    pub fn fails(&self, pattern: &str, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((pattern.to_string(), message.to_string()));
        self
    }

    pub fn executed(&self) -> Vec<Executed> {
        self.state.lock().unwrap().executed.clone()
    }

    pub fn sql(&self) -> Vec<String> {
        self.executed().into_iter().map(|e| e.sql).collect()
    }

    pub fn connections(&self) -> usize {
        self.state.lock().unwrap().connections
    }

    fn record(&self, sql: &str, params: &[Value]) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        state.executed.push(Executed {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        match state.failures.iter().find(|(pattern, _)| sql.contains(pattern)) {
            Some((_, message)) => Err(err!("{message}")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Driver for Recording {
    fn dialect(&self) -> Dialect {
        Dialect::Postgresql
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.state.lock().unwrap().connections += 1;
        Ok(Box::new(RecordingConnection {
            driver: self.clone(),
        }))
    }
}

#[derive(Debug)]
struct RecordingConnection {
    driver: Recording,
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        self.driver.record(sql, params)?;
        Ok(1)
    }

    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        self.driver.record(sql, params)?;
        let mut state = self.driver.state.lock().unwrap();
        Ok(state.results.pop_front().unwrap_or_default())
    }
}

/// Builds a row from column name and value pairs.
pub fn row<const N: usize>(columns: [(&str, Value); N]) -> Row {
    let (columns, values) = columns
        .into_iter()
        .map(|(column, value)| (column.to_string(), value))
        .unzip();
    Row::new(columns, values)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub mod models;
