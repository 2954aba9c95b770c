use super::Error;

/// Error when no SQL type can be inferred for a column and no explicit `type`
/// tag was given.
#[derive(Debug)]
pub(super) struct TypeResolutionError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for TypeResolutionError {}

impl core::fmt::Display for TypeResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot resolve SQL type for column `{}.{}`; add a `type` tag",
            self.table, self.column
        )
    }
}

impl Error {
    /// Creates a type resolution error.
    pub fn type_resolution(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeResolution(TypeResolutionError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a type resolution error.
    pub fn is_type_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeResolution(_))
    }
}
