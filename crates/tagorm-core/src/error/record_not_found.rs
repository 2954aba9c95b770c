use super::Error;

/// A single-row read came back empty.
#[derive(Debug)]
pub(super) struct RecordNotFoundError {
    table: Box<str>,
}

impl std::error::Error for RecordNotFoundError {}

impl core::fmt::Display for RecordNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no row found in `{}`", self.table)
    }
}

impl Error {
    /// `table` is the table the statement read from.
    pub fn record_not_found(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecordNotFound(RecordNotFoundError {
            table: table.into().into(),
        }))
    }

    pub fn is_record_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotFound(_))
    }
}
