use tagorm_core::{
    schema::{Descriptor, Table},
    stmt::{Row, Value},
    Result,
};

/// A struct mapped to a table, usually through `#[derive(Model)]`.
pub trait Model: Sized + Send + Sync + 'static {
    /// The static description of the struct's members and tags.
    fn descriptor() -> &'static Descriptor;

    /// One value per exported member, in declaration order. Relation members
    /// contribute `Null`.
    fn values(&self) -> Vec<Value>;

    /// Loads an instance from a row, reading each column by name.
    fn from_row(row: Row) -> Result<Self>;

    /// Builds a fresh table model.
    fn table() -> Result<Table> {
        Self::descriptor().table()
    }
}
