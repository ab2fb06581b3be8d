//! The [`Parsed`] container.
//!
//! `Parsed<T>` behaves like an `Option<T>` that also remembers the text it
//! was parsed from. Text that fails to convert leaves the container empty
//! but keeps the text around so it can be shown back to whoever typed it.

use std::any::type_name;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::convert::{ConvertError, FromStrConverter, ValueConverter};
use crate::Result;
use crate::error::ParsedError;

/// Which of the four possible states a [`Parsed`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedState {
    /// No value and no input.
    Unset,
    /// Holds a value that was supplied directly.
    Value,
    /// Holds a value converted from the retained input.
    Valid,
    /// The retained input did not convert; no value.
    Invalid,
}

/// An optional value of `T` that may have been parsed from text.
///
/// Equality, ordering and hashing only look at the stored value, so a
/// `Parsed<i32>` built from `5` and one parsed from `"5"` are equal. The
/// retained input only shows up in [`input`](Self::input) and in the
/// `Display` output of an invalid container.
///
/// The converter `C` decides what text is acceptable; it defaults to the
/// type's own [`FromStr`] implementation.
///
/// # Examples
///
/// ```rust
/// use nebula_parsed::Parsed;
///
/// let ok: Parsed<i32> = Parsed::parse("42");
/// assert_eq!(ok.value(), Ok(&42));
/// assert_eq!(ok.to_string(), "42");
///
/// let bad: Parsed<i32> = Parsed::parse("forty");
/// assert!(!bad.has_value());
/// assert_eq!(bad.input(), Some("forty"));
/// assert_eq!(bad.to_string(), "\"forty\"");
///
/// assert_eq!(ok, Parsed::<i32>::from_value(42));
/// ```
pub struct Parsed<T, C = FromStrConverter> {
    pub(crate) value: Option<T>,
    pub(crate) input: Option<String>,
    _converter: PhantomData<fn() -> C>,
}

impl<T, C> Parsed<T, C> {
    /// Create an empty container with no value and no input.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_parts(None, None)
    }

    /// Create a container holding `value`.
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self::from_parts(Some(value), None)
    }

    /// Create a container from an optional value.
    #[must_use]
    pub const fn from_option(value: Option<T>) -> Self {
        Self::from_parts(value, None)
    }

    const fn from_parts(value: Option<T>, input: Option<String>) -> Self {
        Self {
            value,
            input,
            _converter: PhantomData,
        }
    }

    /// Whether a value is present.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the value.
    ///
    /// # Errors
    ///
    /// [`ParsedError::NoValue`] if the container is empty, whether it was
    /// never set or its input failed to convert.
    pub fn value(&self) -> Result<&T> {
        self.value.as_ref().ok_or_else(no_value::<T>)
    }

    /// Take the value out of the container.
    ///
    /// # Errors
    ///
    /// [`ParsedError::NoValue`] if the container is empty.
    pub fn into_value(self) -> Result<T> {
        self.value.ok_or_else(no_value::<T>)
    }

    /// The value, or `fallback` when empty.
    #[must_use]
    pub fn value_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// The value, or `T::default()` when empty.
    #[must_use]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    /// The text this container was last parsed from.
    ///
    /// `None` when the value was supplied directly, even if one is present.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ParsedState {
        match (&self.value, &self.input) {
            (None, None) => ParsedState::Unset,
            (Some(_), None) => ParsedState::Value,
            (Some(_), Some(_)) => ParsedState::Valid,
            (None, Some(_)) => ParsedState::Invalid,
        }
    }

    /// Whether the container holds input that failed to convert.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.state(), ParsedState::Invalid)
    }

    /// Borrow the value as an `Option`.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Copy the value out as an `Option`.
    #[must_use]
    pub fn to_option(&self) -> Option<T>
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Convert into the underlying `Option`, dropping the input.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Split into the stored value and the retained input.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        (self.value, self.input)
    }

    /// Map the value, like [`Option::map`].
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.value.map(f)
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.value = None;
        self.input = None;
    }
}

impl<T, C> Parsed<T, C>
where
    C: ValueConverter<T>,
{
    /// Parse `text`, keeping it as the raw input.
    ///
    /// Text that does not convert produces an empty container; it is not an
    /// error.
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        let mut parsed = Self::new();
        parsed.set_input(Some(text));
        parsed
    }

    /// Parse optional text. `None` produces an empty container with no
    /// retained input.
    #[must_use]
    pub fn from_input<S: Into<String>>(input: Option<S>) -> Self {
        let mut parsed = Self::new();
        parsed.set_input(input);
        parsed
    }

    /// Replace the raw input and convert it again.
    ///
    /// The converter's [`is_valid`](ValueConverter::is_valid) is consulted
    /// first; text it rejects is never handed to `convert`.
    ///
    /// The previous value is always discarded, including one that was
    /// supplied directly.
    pub fn set_input<S: Into<String>>(&mut self, input: Option<S>) {
        match input {
            Some(text) => {
                let text = text.into();
                self.value = convert_input::<T, C>(&text);
                self.input = Some(text);
            }
            None => self.clear(),
        }
    }

    /// Why the retained input failed to convert.
    ///
    /// Runs the converter's validity check and conversion again; returns
    /// `None` unless the container is [`Invalid`](ParsedState::Invalid).
    #[must_use]
    pub fn conversion_error(&self) -> Option<ConvertError> {
        if self.has_value() {
            return None;
        }
        self.input
            .as_deref()
            .and_then(|text| check_input::<T, C>(text).err())
    }
}

fn convert_input<T, C: ValueConverter<T>>(text: &str) -> Option<T> {
    match check_input::<T, C>(text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(
                target_type = err.type_name,
                reason = %err.reason,
                "input did not convert"
            );
            None
        }
    }
}

/// Ask the converter's validity check first; only valid text is converted.
fn check_input<T, C: ValueConverter<T>>(text: &str) -> Result<T, ConvertError> {
    if !C::is_valid(text) {
        return Err(ConvertError::new::<T>(text, REJECTED_BY_VALIDITY_CHECK));
    }
    C::convert(text)
}

const REJECTED_BY_VALIDITY_CHECK: &str = "rejected by validity check";

fn no_value<T>() -> ParsedError {
    ParsedError::NoValue {
        type_name: type_name::<T>(),
    }
}

impl<T, C> Default for Parsed<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C> Clone for Parsed<T, C> {
    fn clone(&self) -> Self {
        Self::from_parts(self.value.clone(), self.input.clone())
    }
}

impl<T, C> From<T> for Parsed<T, C> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T, C> From<Option<T>> for Parsed<T, C> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T, C> From<Parsed<T, C>> for Option<T> {
    fn from(parsed: Parsed<T, C>) -> Self {
        parsed.value
    }
}

impl<T, C> FromStr for Parsed<T, C>
where
    C: ValueConverter<T>,
{
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TrimmedConverter;

    #[test]
    fn default_is_unset() {
        let parsed = Parsed::<i32>::default();
        assert_eq!(parsed.state(), ParsedState::Unset);
        assert!(!parsed.has_value());
        assert_eq!(parsed.input(), None);
    }

    #[test]
    fn from_value_has_no_input() {
        let parsed = Parsed::<i32>::from_value(5);
        assert_eq!(parsed.state(), ParsedState::Value);
        assert_eq!(parsed.value(), Ok(&5));
        assert_eq!(parsed.input(), None);
    }

    #[test]
    fn from_none_option_is_unset() {
        let parsed = Parsed::<i32>::from_option(None);
        assert_eq!(parsed.state(), ParsedState::Unset);
    }

    #[test]
    fn parse_valid_keeps_input() {
        let parsed = Parsed::<i32>::parse("42");
        assert_eq!(parsed.state(), ParsedState::Valid);
        assert_eq!(parsed.value(), Ok(&42));
        assert_eq!(parsed.input(), Some("42"));
    }

    #[test]
    fn parse_invalid_keeps_input_without_value() {
        let parsed = Parsed::<i32>::parse("forty");
        assert_eq!(parsed.state(), ParsedState::Invalid);
        assert!(parsed.is_invalid());
        assert_eq!(parsed.input(), Some("forty"));
        assert_eq!(
            parsed.value(),
            Err(ParsedError::NoValue { type_name: "i32" })
        );
    }

    #[test]
    fn from_input_none_is_unset() {
        let parsed = Parsed::<i32>::from_input(None::<String>);
        assert_eq!(parsed.state(), ParsedState::Unset);
    }

    #[test]
    fn set_input_replaces_direct_value() {
        let mut parsed = Parsed::<i32>::from_value(1);
        parsed.set_input(Some("nope"));
        assert_eq!(parsed.state(), ParsedState::Invalid);
        assert_eq!(parsed.as_option(), None);
    }

    #[test]
    fn set_input_recomputes_from_scratch() {
        let mut parsed = Parsed::<u8>::parse("7");
        parsed.set_input(Some("300"));
        assert!(!parsed.has_value());
        parsed.set_input(Some("8"));
        assert_eq!(parsed.value(), Ok(&8));
        assert_eq!(parsed.input(), Some("8"));
    }

    #[test]
    fn set_input_none_clears_everything() {
        let mut parsed = Parsed::<i32>::parse("3");
        parsed.set_input(None::<&str>);
        assert_eq!(parsed.state(), ParsedState::Unset);
    }

    #[test]
    fn clear_resets() {
        let mut parsed = Parsed::<i32>::parse("bad");
        parsed.clear();
        assert_eq!(parsed.state(), ParsedState::Unset);
    }

    #[test]
    fn conversion_error_only_when_invalid() {
        assert!(Parsed::<i32>::parse("1").conversion_error().is_none());
        assert!(Parsed::<i32>::from_value(1).conversion_error().is_none());
        assert!(Parsed::<i32>::new().conversion_error().is_none());

        let err = Parsed::<i32>::parse("x").conversion_error().unwrap();
        assert_eq!(err.input, "x");
        assert_eq!(err.type_name, "i32");
    }

    #[test]
    fn trimmed_converter_keeps_raw_input() {
        let parsed = Parsed::<i32, TrimmedConverter>::parse(" 12 ");
        assert_eq!(parsed.value(), Ok(&12));
        assert_eq!(parsed.input(), Some(" 12 "));
    }

    #[test]
    fn from_str_never_fails() {
        let parsed: Parsed<f64> = "2.5".parse().unwrap();
        assert_eq!(parsed.value(), Ok(&2.5));
        let parsed: Parsed<f64> = "two".parse().unwrap();
        assert!(parsed.is_invalid());
    }

    #[test]
    fn converts_into_option() {
        let some: Option<i32> = Parsed::<i32>::parse("9").into();
        assert_eq!(some, Some(9));
        let none: Option<i32> = Parsed::<i32>::parse("nine").into();
        assert_eq!(none, None);
    }

    #[test]
    fn converts_from_value_and_option() {
        let parsed: Parsed<i32> = 4_i32.into();
        assert_eq!(parsed.value(), Ok(&4));
        let parsed: Parsed<i32> = Some(4_i32).into();
        assert_eq!(parsed.value(), Ok(&4));
        let parsed: Parsed<i32> = None::<i32>.into();
        assert!(!parsed.has_value());
    }

    #[test]
    fn value_fallbacks() {
        assert_eq!(Parsed::<i32>::parse("x").value_or(3), 3);
        assert_eq!(Parsed::<i32>::parse("x").value_or_default(), 0);
        assert_eq!(Parsed::<i32>::parse("5").value_or(3), 5);
    }

    #[test]
    fn into_value_and_parts() {
        assert_eq!(Parsed::<i32>::parse("5").into_value(), Ok(5));
        assert!(Parsed::<i32>::new().into_value().is_err());
        assert_eq!(
            Parsed::<i32>::parse("5").into_parts(),
            (Some(5), Some("5".to_owned()))
        );
    }

    #[test]
    fn map_behaves_like_option() {
        assert_eq!(Parsed::<i32>::parse("5").map(|v| v * 2), Some(10));
        assert_eq!(Parsed::<i32>::parse("five").map(|v| v * 2), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = Parsed::<i32>::parse("1");
        let mut copy = original.clone();
        copy.set_input(Some("2"));
        assert_eq!(original.value(), Ok(&1));
        assert_eq!(copy.value(), Ok(&2));
    }

    /// Converts any integer but only calls even ones valid.
    struct EvenOnly;

    impl ValueConverter<i32> for EvenOnly {
        fn convert(text: &str) -> Result<i32, ConvertError> {
            text.parse::<i32>()
                .map_err(|err| ConvertError::new::<i32>(text, err))
        }

        fn is_valid(text: &str) -> bool {
            Self::convert(text).is_ok_and(|v| v % 2 == 0)
        }
    }

    #[test]
    fn validity_check_gates_conversion() {
        let odd = Parsed::<i32, EvenOnly>::parse("3");
        assert_eq!(odd.state(), ParsedState::Invalid);
        assert_eq!(odd.input(), Some("3"));
        assert_eq!(odd.to_string(), "\"3\"");

        let even = Parsed::<i32, EvenOnly>::parse("4");
        assert_eq!(even.state(), ParsedState::Valid);
        assert_eq!(even.value(), Ok(&4));
    }

    #[test]
    fn conversion_error_reports_validity_rejection() {
        let err = Parsed::<i32, EvenOnly>::parse("3")
            .conversion_error()
            .unwrap();
        assert_eq!(err.input, "3");
        assert_eq!(err.reason, REJECTED_BY_VALIDITY_CHECK);
        assert!(Parsed::<i32, EvenOnly>::parse("4").conversion_error().is_none());
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parsed<i64>>();
        assert_send_sync::<Parsed<f32, TrimmedConverter>>();
    }
}
