//! Typed Identifiers
//!
//! Sequential integer identifiers tagged with the entity type they belong to, so an
//! employee id can never be handed to a vehicle lookup.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Identifier issued by the repository of `T`.
pub struct TypedId<T>(u32, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value, PhantomData)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u32> for TypedId<T> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<T> From<TypedId<T>> for u32 {
    fn from(value: TypedId<T>) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn ids_compare_by_value() {
        let first = TypedId::<Marker>::new(1);
        let second = TypedId::<Marker>::new(2);

        assert!(first < second);
        assert_eq!(first, TypedId::from(1));
        assert_eq!(u32::from(second), 2);
    }

    #[test]
    fn display_and_debug_show_raw_value() {
        let id = TypedId::<Marker>::new(42);

        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "42");
    }
}
