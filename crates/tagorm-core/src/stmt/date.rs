use crate::{err, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A calendar date stored in a `DATE` column.
///
/// Text form is always `YYYY-MM-DD`, both for `Display` and for serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(jiff::civil::Date);

const FORMAT: &str = "%Y-%m-%d";

impl Date {
    pub fn new(year: i16, month: i8, day: i8) -> Result<Date> {
        Ok(Date(jiff::civil::Date::new(year, month, day)?))
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    pub fn day(&self) -> i8 {
        self.0.day()
    }

    pub fn into_inner(self) -> jiff::civil::Date {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Date(jiff::civil::Date::ZERO)
    }
}

impl From<jiff::civil::Date> for Date {
    fn from(value: jiff::civil::Date) -> Self {
        Date(value)
    }
}

impl From<Date> for jiff::civil::Date {
    fn from(value: Date) -> Self {
        value.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(FORMAT))
    }
}

impl FromStr for Date {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Date> {
        jiff::fmt::strtime::parse(FORMAT, s)
            .and_then(|tm| tm.to_date())
            .map(Date)
            .map_err(|_| err!("date should be of the format: yyyy-mm-dd, got `{s}`"))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
