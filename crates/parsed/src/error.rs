//! Error types for parsed values.

/// Errors raised when a [`Parsed`](crate::Parsed) is used incorrectly.
///
/// Text that fails to convert is not an error; it is an ordinary absent
/// value. This type only covers contract violations such as reading the
/// payload of an empty container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsedError {
    /// The container holds no value.
    #[error("no underlying value present for {type_name}")]
    NoValue {
        /// Name of the payload type.
        type_name: &'static str,
    },
}

impl ParsedError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoValue { .. } => "PARSED_NO_VALUE",
        }
    }
}
