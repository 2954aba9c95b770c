use crate::{err, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// A JSON object stored in a `JSON` (or `JSONB`) column.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub serde_json::Map<String, serde_json::Value>);

impl Json {
    pub fn new() -> Json {
        Json::default()
    }

    pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
        self.0
    }
}

impl ops::Deref for Json {
    type Target = serde_json::Map<String, serde_json::Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for Json {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Json {
    fn from(value: serde_json::Map<String, serde_json::Value>) -> Self {
        Json(value)
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Json {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Json> {
        match serde_json::from_str::<serde_json::Value>(s)? {
            serde_json::Value::Object(map) => Ok(Json(map)),
            serde_json::Value::Null => Ok(Json::default()),
            other => Err(err!("expected a JSON object, got `{other}`")),
        }
    }
}
