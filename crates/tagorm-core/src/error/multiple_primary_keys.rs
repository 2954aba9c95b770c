use super::Error;

/// Error when more than one field of a model carries the `primaryKey` tag.
#[derive(Debug)]
pub(super) struct MultiplePrimaryKeysError {
    table: Box<str>,
    first: Box<str>,
    second: Box<str>,
}

impl std::error::Error for MultiplePrimaryKeysError {}

impl core::fmt::Display for MultiplePrimaryKeysError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table `{}` declares more than one primary key (`{}`, `{}`)",
            self.table, self.first, self.second
        )
    }
}

impl Error {
    /// Creates a multiple primary keys error.
    pub fn multiple_primary_keys(
        table: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MultiplePrimaryKeys(
            MultiplePrimaryKeysError {
                table: table.into().into(),
                first: first.into().into(),
                second: second.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a multiple primary keys error.
    pub fn is_multiple_primary_keys(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MultiplePrimaryKeys(_))
    }
}
