use super::Error;

/// Error when a descriptor that does not describe a record is used where a
/// model is expected.
#[derive(Debug)]
pub(super) struct NotAStructError {
    name: Box<str>,
}

impl std::error::Error for NotAStructError {}

impl core::fmt::Display for NotAStructError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} is not a struct", self.name)
    }
}

impl Error {
    /// Creates a not-a-struct error for the named type.
    pub fn not_a_struct(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotAStruct(NotAStructError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a not-a-struct error.
    pub fn is_not_a_struct(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotAStruct(_))
    }
}
