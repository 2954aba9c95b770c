use super::Error;

/// Why a filter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFilterReason {
    /// No filter was supplied.
    Absent,

    /// The filter has no WHERE clause text.
    EmptyWhere,

    /// The filter has no arguments.
    EmptyArgs,
}

/// Error when an update, delete or single-row find is issued without a usable
/// filter.
#[derive(Debug)]
pub(super) struct MissingFilterError {
    reason: MissingFilterReason,
}

impl std::error::Error for MissingFilterError {}

impl core::fmt::Display for MissingFilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self.reason {
            MissingFilterReason::Absent => "query filter is required",
            MissingFilterReason::EmptyWhere => "query filter where clause cannot be empty",
            MissingFilterReason::EmptyArgs => "query filter args cannot be empty",
        })
    }
}

impl Error {
    /// Creates a missing filter error.
    pub fn missing_filter(reason: MissingFilterReason) -> Error {
        Error::from(super::ErrorKind::MissingFilter(MissingFilterError { reason }))
    }

    /// Returns `true` if this error is a missing filter error.
    pub fn is_missing_filter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingFilter(_))
    }

    /// Returns the reason when this is a missing filter error.
    pub fn missing_filter_reason(&self) -> Option<MissingFilterReason> {
        match self.kind() {
            super::ErrorKind::MissingFilter(err) => Some(err.reason),
            _ => None,
        }
    }
}
