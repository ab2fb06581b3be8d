//! Serde support, behind the `serde` feature.
//!
//! A container serializes as its raw input when it has one, so invalid text
//! survives a round-trip unchanged. Otherwise it serializes as the value,
//! or as `none` when empty.
//!
//! Deserialization needs a self-describing format. Strings go through the
//! converter and never fail; invalid text yields an invalid container.
//! Other scalars are deserialized directly as `T`, and `null` yields an
//! empty container.
//!
//! The wire form does not record how a container was built. A value whose
//! own serialized form is a string (`char`, `SocketAddr`, date types) comes
//! back as [`Valid`](crate::ParsedState::Valid), with that string as its raw
//! input, rather than as [`Value`](crate::ParsedState::Value). The stored
//! value, and therefore equality, is unchanged.

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, IntoDeserializer, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convert::ValueConverter;
use crate::parsed::Parsed;

impl<T: Serialize, C> Serialize for Parsed<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (&self.input, &self.value) {
            (Some(input), _) => serializer.serialize_str(input),
            (None, Some(value)) => value.serialize(serializer),
            (None, None) => serializer.serialize_none(),
        }
    }
}

impl<'de, T, C> Deserialize<'de> for Parsed<T, C>
where
    T: Deserialize<'de>,
    C: ValueConverter<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParsedVisitor(PhantomData))
    }
}

struct ParsedVisitor<T, C>(PhantomData<fn() -> (T, C)>);

macro_rules! visit_scalar {
    ($($method:ident($ty:ty);)*) => {$(
        fn $method<E: de::Error>(self, v: $ty) -> Result<Self::Value, E> {
            T::deserialize(<$ty as IntoDeserializer<'de, E>>::into_deserializer(v))
                .map(Parsed::from_value)
        }
    )*};
}

impl<'de, T, C> Visitor<'de> for ParsedVisitor<T, C>
where
    T: Deserialize<'de>,
    C: ValueConverter<T>,
{
    type Value = Parsed<T, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, a scalar value or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Parsed::parse(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Parsed::parse(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Parsed::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Parsed::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    visit_scalar! {
        visit_bool(bool);
        visit_i64(i64);
        visit_i128(i128);
        visit_u64(u64);
        visit_u128(u128);
        visit_f64(f64);
        visit_char(char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed::ParsedState;

    #[test]
    fn serializes_raw_input_over_value() {
        let json = serde_json::to_string(&Parsed::<i32>::parse("042")).unwrap();
        assert_eq!(json, r#""042""#);
    }

    #[test]
    fn deserializes_null_as_unset() {
        let parsed: Parsed<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(parsed.state(), ParsedState::Unset);
    }

    #[test]
    fn rejects_sequences() {
        assert!(serde_json::from_str::<Parsed<i32>>("[1]").is_err());
    }
}
