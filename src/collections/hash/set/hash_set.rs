use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::collections::hash::map::{CapacityOverflow, HashMap};
use crate::collections::traits::set::Set;
use crate::util::fmt::{DebugRaw, write_joined};

/// The most elements [`Extend`] reserves space for before inserting.
const MAX_EXTEND_RESERVE: usize = 4096;

/// A set of distinct values which relies on the values implementing [`Hash`] and [`Eq`].
///
/// HashSet is a [`HashMap`] where every key maps to the unit type, so membership follows the
/// element type's hashing and equality. Set algebra is provided by the [`Set`] trait, and works
/// against any other [`Set`] with the same element type.
///
/// Iteration order is unspecified. It depends on the hasher and the current capacity, so it may
/// differ between runs, between two sets with equal contents, and after any mutation.
///
/// It is a logic error for an element to be modified in a way that changes its hash while it is in
/// the set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other set.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `intersects` | `O(n)` |
/// | `union` | `O(n+m)` |
/// | `intersection` | `O(n)` |
/// | `subtract` | `O(n)` |
/// | `values` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the HashSet doesn't have enough capacity for the new element, `insert` will take `O(n)`.
///
/// # Examples
/// ```
/// # use hashset::collections::hash::HashSet;
/// # use hashset::collections::traits::set::Set;
/// let mut set = HashSet::new();
/// set.add([1, 2, 3]);
/// set.remove(&2);
///
/// assert!(set.contains_all(&[1, 3]));
/// assert!(!set.contains_all(&[1, 2]));
/// assert_eq!(set.len(), 2);
/// ```
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit value is the presence marker: buckets store nothing beyond the element.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T, RandomState> {
    /// Creates a new, empty HashSet with capacity 0 and a randomly seeded hasher.
    pub fn new() -> HashSet<T, RandomState> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with exactly `cap` buckets and a randomly seeded hasher.
    pub fn with_cap(cap: usize) -> HashSet<T, RandomState> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with exactly `cap` buckets and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the HashSet, in buckets.
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns a reference to the hasher builder used by the HashSet.
    pub const fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    ///
    /// If an equal element is already present, the set is left unchanged and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes the element equal to `item`, returning it if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(k, _)| k)
    }

    /// Returns true if an element equal to `item` is in the set.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns a reference to the element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_entry(item).map(|(k, _)| k)
    }

    /// Increases the capacity of the HashSet so that `extra` more elements fit without
    /// reallocation.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Increases the capacity of the HashSet so that `extra` more elements fit without
    /// reallocation, returning an error if the required capacity overflows a [`usize`].
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner.try_reserve(extra)
    }

    /// Retains only the elements for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.inner.retain(|k, _| f(k))
    }

    /// Removes all elements, releasing the bucket allocation.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all elements in the HashSet, as references, in no particular
    /// order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set for HashSet<T, B> {
    type Item = T;

    type Iter<'a> = Iter<'a, T> where Self: 'a;

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        HashSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter(&self) -> Iter<'_, T> {
        HashSet::iter(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::default();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Duplicates may make the hint far larger than the number of new elements, so only part
        // of it is reserved up front and anything beyond that grows on demand.
        let hint = iter.size_hint().0;
        let extra = if self.is_empty() { hint } else { hint.div_ceil(2) };
        self.reserve(cmp::min(extra, MAX_EXTEND_RESERVE));

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!(
                "{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

/// Writes `HashSet` on its own line, followed by every element joined with `", "`, in iteration
/// order.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashSet")?;
        write_joined(f, self.iter(), ", ", |f, item| write!(f, "{item}"))
    }
}
