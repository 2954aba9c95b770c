use super::Error;

/// A single-row read or a reloading update matched more than one row.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    table: Box<str>,
    rows: usize,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expected one row in `{}`, got {}", self.table, self.rows)
    }
}

impl Error {
    /// `rows` is the number of rows the statement returned.
    pub fn too_many_records(table: impl Into<String>, rows: usize) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            table: table.into().into(),
            rows,
        }))
    }

    pub fn is_too_many_records(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRecords(_))
    }

    /// Number of rows returned, for a too many records error.
    pub fn matched_rows(&self) -> Option<usize> {
        match self.kind() {
            super::ErrorKind::TooManyRecords(err) => Some(err.rows),
            _ => None,
        }
    }
}
