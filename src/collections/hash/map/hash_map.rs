use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use super::{CapacityOverflow, IndexNoCap, IntoKeys, Iter, Keys};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Entries are stored in a single allocation of buckets using open addressing with linear probing.
/// A custom load factor is not supported at this point, with the default being 4/5, so there is
/// always at least one empty bucket to end a search.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// Iteration visits buckets in storage order, which depends on the hasher and the capacity. No
/// order is guaranteed and it may change after any mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `retain` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

/// Allocates `cap` empty buckets.
fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<K: Hash + Eq, V> HashMap<K, V, RandomState> {
    /// Creates a new HashMap with capacity 0 and a randomly seeded hasher. Memory will be
    /// allocated when the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use hashset::collections::hash::HashMap;
    /// let map: HashMap<u8, &str> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.cap(), 0);
    /// ```
    pub fn new() -> HashMap<K, V, RandomState> {
        HashMap::with_hasher(RandomState::new())
    }

    /// Creates a new HashMap with exactly `cap` buckets and a randomly seeded hasher.
    ///
    /// Because of the load factor, only `cap * 4 / 5` entries can be inserted before the map
    /// reallocates. Use [`reserve`](HashMap::reserve) to allocate by entry count instead.
    pub fn with_cap(cap: usize) -> HashMap<K, V, RandomState> {
        HashMap::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(0),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with exactly `cap` buckets and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap, in buckets.
    pub fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns a reference to the hasher builder used by the HashMap.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use hashset::collections::hash::HashMap;
    /// let mut map: HashMap<&str, u8> = HashMap::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        // Replacing the value of an existing key never grows the table.
        if let Ok(index) = self.find_index_for_key(&key)
            && let Some(existing) = &mut self.arr[index]
        {
            return Some(mem::replace(&mut existing.1, value));
        }

        if self.should_grow() {
            self.grow()
        }

        // UNREACHABLE: We've just grown if necessary, so there is at least one bucket. The key
        // isn't present, so the bucket at index is empty.
        let index = self.find_index_for_key(&key).throw();
        self.arr[index] = Some((key, value));
        self.len += 1;
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q represents a borrowed version of K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // A map with no buckets contains nothing.
        let index = self.find_index_for_key(key).ok()?;

        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    ///
    /// The following entries in the same run of occupied buckets are shifted back into the freed
    /// bucket where their search path allows it, so every remaining key stays reachable from its
    /// ideal bucket without tombstones.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut hole = self.find_index_for_key(key).ok()?;
        let removed = self.arr[hole].take()?;
        self.len -= 1;

        let cap = self.cap();
        let mut next = (hole + 1) % cap;

        // The load factor guarantees an empty bucket, which ends the run.
        while let Some(entry) = &self.arr[next] {
            // UNREACHABLE: The map has at least one bucket.
            let ideal = self.index_from_key(&entry.0).throw();

            // The entry can fill the hole if probing from its ideal bucket reaches the hole before
            // its current bucket.
            if (hole + cap - ideal) % cap < (next + cap - ideal) % cap {
                self.arr.swap(hole, next);
                hole = next;
            }

            next = (next + 1) % cap;
        }

        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor, returning an error if the required capacity overflows a
    /// [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use hashset::collections::hash::{CapacityOverflow, HashMap};
    /// let mut map: HashMap<u8, u8> = HashMap::new();
    /// assert_eq!(map.try_reserve(usize::MAX), Err(CapacityOverflow));
    /// assert_eq!(map.try_reserve(4), Ok(()));
    /// assert!(map.cap() >= 5);
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra)
            .and_then(|required| required.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .map(|scaled| scaled.div_ceil(LOAD_FACTOR_NUMERATOR))
            .ok_or(CapacityOverflow)?;

        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
        Ok(())
    }

    /// Retains only the entries for which `f` returns true, dropping the rest. The capacity is
    /// unchanged.
    pub fn retain<F: FnMut(&K, &V) -> bool>(&mut self, mut f: F) {
        let cap = self.cap();
        let old_arr = mem::replace(&mut self.arr, empty_buckets(cap));
        self.len = 0;

        for (key, value) in old_arr.into_iter().flatten() {
            if f(&key, &value) {
                // UNREACHABLE: The old array held this entry, so the capacity isn't 0.
                let index = self.find_index_for_key(&key).throw();
                self.arr[index] = Some((key, value));
                self.len += 1;
            }
        }
    }

    /// Drops all entries and releases the bucket allocation, leaving a map with capacity 0.
    pub fn clear(&mut self) {
        self.arr = empty_buckets(0);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.arr.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap.saturating_mul(LOAD_FACTOR_NUMERATOR) / LOAD_FACTOR_DENOMINATOR < self.len {
            return;
        }

        log::trace!(
            "reallocating hash table: {} -> {} buckets, {} entries",
            self.cap(), new_cap, self.len
        );

        // Replace the buckets first so that we can consume the old ones.
        let old_arr = mem::replace(&mut self.arr, empty_buckets(new_cap));

        for entry in old_arr.into_iter().flatten() {
            // UNREACHABLE: If the new capacity is 0, the old buckets had no entries and we can't
            // enter this loop.
            let index = self.find_index_for_key(&entry.0).throw();

            self.arr[index] = Some(entry);
        }
    }

    /// Calculates the ideal index of a bucket for the provided `hashable`. This method doesn't
    /// consider hash collisions, see [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Result<usize, IndexNoCap> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64)
            .map(|i| i as usize)
            .ok_or(IndexNoCap)
    }

    /// Finds the first valid index for the provided `key`. This is done by calculating the ideal
    /// index and then iterating until a bucket is found that is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Result<usize, IndexNoCap>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a value at the current index, but the key
        // isn't equal, increment the index (wrapping at the capacity) and check again.
        while let Some(existing) = &self.arr[index]
            && <K as Borrow<Q>>::borrow(&existing.0) != key
        {
            index = (index + 1) % self.cap();
        }

        // After that loop, index is either empty or contains an equal key.
        Ok(index)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut map = HashMap::with_hasher(B::default());
        map.reserve(iter.size_hint().0);

        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &self.arr.iter()
                .map(|o| DebugRaw(match o {
                    Some((k, v)) => format!("({k:?}: {v:?})"),
                    None => "-".into(),
                }))
                .collect::<Vec<_>>()
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter().map(|(k, v)| (k, v))).finish()
    }
}
