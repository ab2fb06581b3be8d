//! Text rendering for [`Parsed`].

use std::fmt;

use crate::parsed::Parsed;

/// What an empty container with no input displays as.
pub const NULL_DISPLAY: &str = "<null>";

/// Renders the value if present, otherwise the quoted raw input, otherwise
/// [`NULL_DISPLAY`].
///
/// Width, precision and other format flags are forwarded to the value's
/// own `Display` impl.
impl<T: fmt::Display, C> fmt::Display for Parsed<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.input) {
            (Some(value), _) => fmt::Display::fmt(value, f),
            (None, Some(input)) => write!(f, "\"{input}\""),
            (None, None) => f.write_str(NULL_DISPLAY),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Parsed<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parsed")
            .field("value", &self.value)
            .field("input", &self.input)
            .finish()
    }
}
