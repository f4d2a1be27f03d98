//! The [`Set`] trait and the lazy iterators produced by its set operations.
//!
//! Set operations are written purely in terms of [`Set::iter`] and [`Set::contains`], so the two
//! sides of an operation only need to agree on their element type, not on their implementation.

use std::iter::{Chain, FusedIterator};

/// A collection of distinct elements, supporting membership queries and set algebra.
///
/// Implementors provide the basic capabilities (insertion, removal, membership, iteration and
/// size). Everything else is provided in terms of those. The `other` side of every operation can
/// be any set with the same element type.
///
/// No implementation is required to iterate in any particular order, so the output of
/// [`values`](Set::values) and of the set operations is only meaningful as a set.
///
/// # Examples
/// ```
/// # use hashset::collections::hash::HashSet;
/// # use hashset::collections::traits::set::Set;
/// let mut a = HashSet::new();
/// a.add([1, 2, 3]);
/// let b: HashSet<_> = [2, 3, 4].into_iter().collect();
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.intersection(&b), [2, 3].into_iter().collect());
/// assert_eq!(a.union(&b), [1, 2, 3, 4].into_iter().collect());
/// assert_eq!(a.subtract(&b), [1].into_iter().collect());
/// ```
pub trait Set: Sized {
    /// The type of the elements in the set.
    type Item;

    /// The borrowed iterator returned by [`Set::iter`].
    type Iter<'a>: Iterator<Item = &'a Self::Item> where Self: 'a;

    /// Adds `item` to the set, returning true if it wasn't already present. Adding an element that
    /// is already present doesn't change the set.
    fn insert(&mut self, item: Self::Item) -> bool;

    /// Removes `item` from the set, returning it if it was present.
    fn remove(&mut self, item: &Self::Item) -> Option<Self::Item>;

    /// Returns true if `item` is in the set.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Returns an iterator over all elements in the set, as references, in no particular order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements from the set.
    fn clear(&mut self);

    /// Adds every element of `items` to the set. Duplicates, within `items` or with the existing
    /// contents, are ignored.
    fn add<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes every element of `items` from the set. Elements that aren't present are ignored.
    fn remove_all<'i, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'i Self::Item>,
        Self::Item: 'i,
    {
        for item in items {
            self.remove(item);
        }
    }

    /// Returns true if every element of `items` is in the set. This is vacuously true when `items`
    /// is empty, even for an empty set.
    fn contains_all<'i, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'i Self::Item>,
        Self::Item: 'i,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Returns a snapshot of the elements in the set. The returned [`Vec`] is independent of the
    /// set, and its order is unspecified.
    fn values(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if at least one element of `self` is also in `other`, stopping at the first
    /// match.
    fn intersects<O: Set<Item = Self::Item>>(&self, other: &O) -> bool {
        self.iter().any(|item| other.contains(item))
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset<O: Set<Item = Self::Item>>(&self, other: &O) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset<O: Set<Item = Self::Item>>(&self, other: &O) -> bool {
        other.is_subset(self)
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn iter_difference<'a, O: Set<Item = Self::Item>>(
        &'a self,
        other: &'a O,
    ) -> Difference<'a, Self, O> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn iter_symmetric_difference<'a, O: Set<Item = Self::Item>>(
        &'a self,
        other: &'a O,
    ) -> SymmetricDifference<'a, Self, O> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn iter_intersection<'a, O: Set<Item = Self::Item>>(
        &'a self,
        other: &'a O,
    ) -> Intersection<'a, Self, O> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. Every
    /// element of `self` is produced, followed by the elements of `other` that aren't in `self`.
    /// (`self ∪ other`)
    fn iter_union<'a, O: Set<Item = Self::Item>>(&'a self, other: &'a O) -> Union<'a, Self, O> {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }

    /// Returns a new set of the elements in `self` but not `other`. Neither input is modified.
    fn subtract<O: Set<Item = Self::Item>>(&self, other: &O) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone,
    {
        self.iter_difference(other).cloned().collect()
    }

    /// Returns a new set of the elements in exactly one of `self` and `other`. Neither input is
    /// modified.
    fn symmetric_difference<O: Set<Item = Self::Item>>(&self, other: &O) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone,
    {
        self.iter_symmetric_difference(other).cloned().collect()
    }

    /// Returns a new set of the elements in both `self` and `other`. Neither input is modified.
    fn intersection<O: Set<Item = Self::Item>>(&self, other: &O) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone,
    {
        self.iter_intersection(other).cloned().collect()
    }

    /// Returns a new set of the elements in `self`, `other` or both. Neither input is modified.
    fn union<O: Set<Item = Self::Item>>(&self, other: &O) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone,
    {
        self.iter_union(other).cloned().collect()
    }
}

/// A lazy iterator over the elements of one set which aren't in another. See
/// [`Set::iter_difference`].
pub struct Difference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a O,
}

impl<'a, S, O> Iterator for Difference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S, O> FusedIterator for Difference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
    S::Iter<'a>: FusedIterator,
{}

/// A lazy iterator over the elements in exactly one of two sets. See
/// [`Set::iter_symmetric_difference`].
pub struct SymmetricDifference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    pub(crate) inner: Chain<Difference<'a, S, O>, Difference<'a, O, S>>,
}

impl<'a, S, O> Iterator for SymmetricDifference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S, O> FusedIterator for SymmetricDifference<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
    S::Iter<'a>: FusedIterator,
    O::Iter<'a>: FusedIterator,
{}

/// A lazy iterator over the elements of one set which are also in another. See
/// [`Set::iter_intersection`].
pub struct Intersection<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a O,
}

impl<'a, S, O> Iterator for Intersection<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S, O> FusedIterator for Intersection<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
    S::Iter<'a>: FusedIterator,
{}

/// A lazy iterator over the elements in either of two sets, without duplicates. See
/// [`Set::iter_union`].
pub struct Union<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, O, S>>,
}

impl<'a, S, O> Iterator for Union<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S, O> FusedIterator for Union<'a, S, O>
where
    S: Set + 'a,
    O: Set<Item = S::Item> + 'a,
    S::Iter<'a>: FusedIterator,
    O::Iter<'a>: FusedIterator,
{}
