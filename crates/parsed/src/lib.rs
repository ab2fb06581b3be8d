//! # nebula-parsed
//!
//! An optional value that remembers the text it was parsed from.
//!
//! [`Parsed<T>`](Parsed) acts like an `Option<T>` for equality, ordering,
//! hashing and conversion. It also keeps the raw input it was built from,
//! so text that failed to parse can still be shown back to the user instead
//! of being lost.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_parsed::prelude::*;
//!
//! let port: Parsed<u16> = Parsed::parse("8080");
//! assert_eq!(port.value(), Ok(&8080));
//!
//! let typo: Parsed<u16> = Parsed::parse("80800");
//! assert_eq!(typo.state(), ParsedState::Invalid);
//! assert_eq!(typo.to_string(), "\"80800\"");
//!
//! let port: Option<u16> = port.into();
//! assert_eq!(port, Some(8080));
//! ```
//!
//! ## Converters
//!
//! Conversion is delegated to a [`ValueConverter`](convert::ValueConverter)
//! chosen by the second type parameter. The default,
//! [`FromStrConverter`](convert::FromStrConverter), uses the type's own
//! [`FromStr`](std::str::FromStr) impl.
//! [`TrimmedConverter`](convert::TrimmedConverter) also accepts text with
//! surrounding whitespace.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Parsed`].

mod cmp;
pub mod convert;
mod display;
pub mod error;
pub mod parsed;
#[cfg(feature = "serde")]
pub mod serde;

pub use convert::{ConvertError, FromStrConverter, TrimmedConverter, ValueConverter};
pub use display::NULL_DISPLAY;
pub use error::ParsedError;
pub use parsed::{Parsed, ParsedState};

/// Result type used throughout nebula-parsed.
pub type Result<T, E = ParsedError> = std::result::Result<T, E>;

/// Common imports.
pub mod prelude {
    pub use crate::convert::{ConvertError, FromStrConverter, TrimmedConverter, ValueConverter};
    pub use crate::error::ParsedError;
    pub use crate::parsed::{Parsed, ParsedState};
}
