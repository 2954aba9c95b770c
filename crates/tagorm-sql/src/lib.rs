pub mod filter;
pub use filter::Filter;

pub mod migration;
pub use migration::{Migration, MigrationStep};

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

mod statement;
pub use statement::Statement;
