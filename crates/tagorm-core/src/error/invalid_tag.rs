use super::Error;

/// Error when a field tag cannot be interpreted, e.g. a `foreignKey` value
/// that is not of the form `field->column`.
#[derive(Debug)]
pub(super) struct InvalidTag {
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidTag {}

impl core::fmt::Display for InvalidTag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid tag on field `{}`: {}", self.field, self.message)
    }
}

impl Error {
    /// Creates an invalid tag error for the named field.
    pub fn invalid_tag(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTag(InvalidTag {
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid tag error.
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTag(_))
    }
}
