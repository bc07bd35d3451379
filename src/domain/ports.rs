use crate::core::set::Set;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::hash::Hash;

/// Bound shared by every set element: equality plus a hash consistent with it.
///
/// Blanket-implemented, so any `T: Eq + Hash` qualifies. A type whose `Hash`
/// disagrees with its `Eq` breaks the uniqueness guarantee of [`Set`].
pub trait Element: Eq + Hash {}

impl<T: Eq + Hash> Element for T {}

/// Converts sets to and from one serialized representation.
///
/// `Encoded` is what `encode` produces, `Source` is what `decode` reads (the
/// borrowed form of `Encoded`).
pub trait Codec {
    type Encoded;
    type Source: ?Sized;

    fn encode<T>(&self, set: &Set<T>) -> Result<Self::Encoded>
    where
        T: Element + Serialize;

    fn decode<T>(&self, input: &Self::Source) -> Result<Set<T>>
    where
        T: Element + DeserializeOwned;
}
