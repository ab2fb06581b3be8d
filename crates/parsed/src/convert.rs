//! Text-to-value conversion capability.
//!
//! A [`ValueConverter`] decides whether a piece of text is convertible to a
//! value type and performs the conversion. Converters are stateless and are
//! selected through a type parameter on [`Parsed`](crate::Parsed), so the
//! choice is resolved once per type at compile time.
//!
//! Two converters ship with the crate:
//!
//! - [`FromStrConverter`] delegates to the type's own [`FromStr`] impl.
//! - [`TrimmedConverter`] does the same after stripping surrounding
//!   whitespace.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A single failed conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert `{input}` to {type_name}: {reason}")]
pub struct ConvertError {
    /// Name of the target type.
    pub type_name: &'static str,
    /// The text that was offered.
    pub input: String,
    /// Why the converter rejected it.
    pub reason: String,
}

impl ConvertError {
    /// Build an error for a conversion into `T`.
    pub fn new<T>(input: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            type_name: type_name::<T>(),
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Converts text into values of `T`.
///
/// Implementations must be pure: the same text always yields the same
/// outcome, and no shared state is touched.
///
/// [`Parsed`](crate::Parsed) calls [`is_valid`](Self::is_valid) before
/// [`convert`](Self::convert) and only converts text that passes, so a
/// converter may override `is_valid` to be stricter than `convert`.
///
/// # Examples
///
/// ```rust
/// use nebula_parsed::convert::{ConvertError, ValueConverter};
///
/// /// Accepts `on`/`off` as booleans.
/// struct Switch;
///
/// impl ValueConverter<bool> for Switch {
///     fn convert(text: &str) -> Result<bool, ConvertError> {
///         match text {
///             "on" => Ok(true),
///             "off" => Ok(false),
///             other => Err(ConvertError::new::<bool>(other, "expected `on` or `off`")),
///         }
///     }
/// }
///
/// assert!(Switch::is_valid("on"));
/// assert!(!Switch::is_valid("true"));
/// ```
pub trait ValueConverter<T> {
    /// Convert `text` into a `T`.
    fn convert(text: &str) -> Result<T, ConvertError>;

    /// Whether `text` converts successfully.
    fn is_valid(text: &str) -> bool {
        Self::convert(text).is_ok()
    }
}

/// Converter backed by [`FromStr`].
///
/// This is the default for [`Parsed`](crate::Parsed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FromStrConverter;

impl<T> ValueConverter<T> for FromStrConverter
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn convert(text: &str) -> Result<T, ConvertError> {
        text.parse::<T>()
            .map_err(|err| ConvertError::new::<T>(text, err))
    }
}

/// Converter that ignores leading and trailing whitespace.
///
/// Only the text handed to the inner converter is trimmed; callers still
/// keep the original text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrimmedConverter<C = FromStrConverter> {
    _inner: PhantomData<C>,
}

impl<T, C> ValueConverter<T> for TrimmedConverter<C>
where
    C: ValueConverter<T>,
{
    fn convert(text: &str) -> Result<T, ConvertError> {
        C::convert(text.trim()).map_err(|err| ConvertError {
            input: text.to_owned(),
            ..err
        })
    }

    fn is_valid(text: &str) -> bool {
        C::is_valid(text.trim())
    }
}
