#![cfg(test)]

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

fn sorted_values<T: Ord, V>(map: HashMap<ManualHash<T>, V, BadHasherBuilder>) -> Vec<T> {
    let mut values = map.into_keys().map(|k| k.value()).collect::<Vec<_>>();
    values.sort();
    values
}

#[test]
fn test_insert_and_get() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    assert_eq!(map.insert("one", 1), None);
    assert_eq!(map.insert("two", 2), None);
    assert_eq!(
        map.insert("one", 10), Some(1),
        "Inserting an existing key should return the previous value."
    );

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("one"), Some(&10));
    assert_eq!(map.get_entry("two"), Some((&"two", &2)));
    assert_eq!(map.get("three"), None);
    assert!(map.contains("two"));
    assert!(!map.contains("three"));
}

#[test]
fn test_lookup_without_capacity() {
    let map: HashMap<u8, ()> = HashMap::new();
    assert_eq!(map.cap(), 0);
    assert!(
        !map.contains(&0),
        "A map with no buckets should report keys as absent rather than panicking."
    );
    assert_eq!(map.get(&0), None);

    let mut map = map;
    assert_eq!(map.remove(&0), None);
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(0, "zero"), ());
    map.insert(ManualHash::new(0, "one"), ());
    map.insert(ManualHash::new(2, "two"), ());
    map.insert(ManualHash::new(0, "three"), ());
    map.insert(ManualHash::new(2, "four"), ());
    map.insert(ManualHash::new(1, "five"), ());

    map.remove(&ManualHash::new(0, "zero"));
    map.remove(&ManualHash::new(2, "two"));

    for remaining in ["one", "three", "four", "five"] {
        assert!(
            map.contains(&ManualHash::new(match remaining {
                "four" => 2,
                "five" => 1,
                _ => 0,
            }, remaining)),
            "HashMap should handle hash collisions so that no elements are lost during removal."
        );
    }

    assert_eq!(sorted_values(map), ["five", "four", "one", "three"]);
}

#[test]
fn test_removal_keeps_later_run_members_reachable() {
    let mut map = HashMap::with_cap_and_hasher(10, BadHasherBuilder);
    // Bucket 0: a, bucket 1: b (ideal 1), bucket 2: c (ideal 0, displaced past b).
    map.insert(ManualHash::new(0, 'a'), 1);
    map.insert(ManualHash::new(1, 'b'), 2);
    map.insert(ManualHash::new(0, 'c'), 3);

    assert_eq!(map.remove(&ManualHash::new(0, 'a')), Some(1));
    assert_eq!(
        map.get(&ManualHash::new(0, 'c')), Some(&3),
        "An entry displaced past a correctly placed one should still be found after removal."
    );
    assert_eq!(map.get(&ManualHash::new(1, 'b')), Some(&2));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_wrapping_collisions() {
    let mut map = HashMap::with_cap_and_hasher(6, BadHasherBuilder);
    map.insert(ManualHash::new(5, "zero"), ());
    map.insert(ManualHash::new(5, "one"), ());
    map.insert(ManualHash::new(1, "two"), ());
    map.insert(ManualHash::new(5, "three"), ());

    assert_eq!(map.cap(), 6, "Four entries fit in six buckets without growing.");

    map.remove(&ManualHash::new(5, "zero"));

    assert!(map.contains(&ManualHash::new(5, "one")));
    assert!(map.contains(&ManualHash::new(5, "three")));
    assert!(
        map.contains(&ManualHash::new(1, "two")),
        "Hash collisions should be handled in a wrapping manner."
    );
    assert_eq!(sorted_values(map), ["one", "three", "two"]);
}

#[test]
fn test_growth() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    for i in 0..100 {
        map.insert(i, i * 2);
    }

    assert_eq!(map.len(), 100);
    assert!(
        map.cap() * 4 / 5 >= map.len(),
        "The load factor should never be exceeded."
    );
    for i in 0..100 {
        assert_eq!(map.get(&i), Some(&(i * 2)));
    }
}

#[test]
fn test_replacing_doesnt_grow() {
    let mut map: HashMap<u32, char> = HashMap::new();
    map.insert(1, 'a');
    let cap = map.cap();
    assert_eq!(cap, 2);

    for value in ['b', 'c', 'd'] {
        assert!(map.insert(1, value).is_some());
    }
    assert_eq!(map.len(), 1);
    assert_eq!(map.cap(), cap, "Replacing a value shouldn't reallocate.");
    assert_eq!(map.get(&1), Some(&'d'));

    // Only a new key at the load factor grows the table.
    map.insert(2, 'e');
    assert_eq!(map.cap(), 4);
}

#[test]
fn test_index_without_capacity() {
    let map: HashMap<u32, u32> = HashMap::new();
    assert_eq!(map.index_from_key(&1), Err(IndexNoCap));
    assert_eq!(map.find_index_for_key(&1), Err(IndexNoCap));

    let map: HashMap<u32, u32> = HashMap::with_cap(4);
    assert!(map.index_from_key(&1).is_ok_and(|i| i < 4));
}

#[test]
fn test_reserve() {
    let mut map: HashMap<u32, ()> = HashMap::new();
    map.reserve(8);
    let cap = map.cap();
    assert_eq!(cap, 10);

    for i in 0..8 {
        map.insert(i, ());
    }
    assert_eq!(map.cap(), cap, "Reserved entries should fit without reallocation.");

    assert_eq!(map.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(map.len(), 8, "A failed reservation shouldn't touch the entries.");

    assert_panics!({
        let mut map: HashMap<u32, ()> = HashMap::new();
        map.reserve(usize::MAX);
    });
}

#[test]
fn test_retain_and_clear() {
    let mut map: HashMap<u32, u32> = (0..20).map(|i| (i, i)).collect();
    map.retain(|k, _| k % 2 == 0);

    assert_eq!(map.len(), 10);
    assert!(map.contains(&4));
    assert!(!map.contains(&5));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 0);
    assert_eq!(map.iter().count(), 0);

    map.insert(1, 1);
    assert_eq!(map.get(&1), Some(&1), "A cleared map should be usable again.");
}

#[test]
fn test_iteration() {
    let map: HashMap<u32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();

    let iter = map.iter();
    assert_eq!(iter.len(), 3);

    let mut keys = map.keys().copied().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, [1, 2, 3]);

    let mut entries = map.into_iter().collect::<Vec<_>>();
    entries.sort();
    assert_eq!(entries, [(1, 'a'), (2, 'b'), (3, 'c')]);
}

#[test]
fn test_display() {
    let mut map: HashMap<u8, &str> = HashMap::new();
    assert_eq!(map.to_string(), "#{}");

    map.insert(1, "one");
    assert_eq!(map.to_string(), "#{1: \"one\"}");
}
