//! Vendors the [`equivalent`](https://crates.io/crates/equivalent) crate in order to avoid conflicts.

use std::borrow::Borrow;

/// Key equivalence trait.
///
/// Lookup methods accept any probe type `Q` implementing `Equivalent<K>`, so a map keyed by
/// `String` can be probed with a `&str` without allocating. [`Hash`](std::hash::Hash) will have
/// to be implemented to make sure that the same hash value is generated for equivalent keys.
pub trait Equivalent<K: ?Sized> {
    /// Compares `self` to `key` and returns `true` if they are equal.
    fn equivalent(&self, key: &K) -> bool;
}

impl<Q: ?Sized, K: ?Sized> Equivalent<K> for Q
where
    Q: Eq,
    K: Borrow<Q>,
{
    #[inline]
    fn equivalent(&self, key: &K) -> bool {
        PartialEq::eq(self, key.borrow())
    }
}
