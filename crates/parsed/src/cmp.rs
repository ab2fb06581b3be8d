//! Equality, ordering and hashing for [`Parsed`].
//!
//! All of these delegate to the stored `Option<T>`. The retained input is
//! never compared or hashed, so two containers that hold equal values are
//! interchangeable as map keys no matter how they were built.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::parsed::Parsed;

impl<T: PartialEq, C1, C2> PartialEq<Parsed<T, C2>> for Parsed<T, C1> {
    fn eq(&self, other: &Parsed<T, C2>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, C> Eq for Parsed<T, C> {}

impl<T: PartialEq, C> PartialEq<Option<T>> for Parsed<T, C> {
    fn eq(&self, other: &Option<T>) -> bool {
        self.value == *other
    }
}

impl<T: PartialEq, C> PartialEq<Parsed<T, C>> for Option<T> {
    fn eq(&self, other: &Parsed<T, C>) -> bool {
        *self == other.value
    }
}

impl<T: PartialEq, C> PartialEq<T> for Parsed<T, C> {
    fn eq(&self, other: &T) -> bool {
        self.value.as_ref() == Some(other)
    }
}

impl<T: PartialOrd, C1, C2> PartialOrd<Parsed<T, C2>> for Parsed<T, C1> {
    fn partial_cmp(&self, other: &Parsed<T, C2>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, C> Ord for Parsed<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: PartialOrd, C> PartialOrd<Option<T>> for Parsed<T, C> {
    fn partial_cmp(&self, other: &Option<T>) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T: PartialOrd, C> PartialOrd<Parsed<T, C>> for Option<T> {
    fn partial_cmp(&self, other: &Parsed<T, C>) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl<T: Hash, C> Hash for Parsed<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
