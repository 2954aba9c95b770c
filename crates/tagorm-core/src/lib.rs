pub mod driver;
pub use driver::{Connection, Dialect, Driver};

mod error;
pub use error::{Error, IntoError, MissingFilterReason};

pub mod schema;
pub use schema::{Descriptor, Table};

pub mod stmt;

/// A Result type alias that uses tagorm's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
