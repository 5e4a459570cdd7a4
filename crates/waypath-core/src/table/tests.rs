use super::*;
use std::hash::{BuildHasherDefault, Hasher};

/// Hashes integer keys to themselves so bucket placement is predictable
#[derive(Default)]
struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = (self.0 << 8) | u64::from(*byte);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
}

type IdentityTable<V> = HashTable<u64, V, BuildHasherDefault<IdentityHasher>>;

fn identity_table<V>(capacity: usize) -> IdentityTable<V> {
    HashTable::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
}

#[test]
fn test_put_and_get() {
    let mut table = HashTable::with_capacity(8);
    table.put("test".to_string(), "true").unwrap();

    assert!(table.contains_key(&"test".to_string()));
    assert_eq!(*table.get(&"test".to_string()).unwrap(), "true");
    assert_eq!(table.len(), 1);
    assert_eq!(table.capacity(), 8);
}

#[test]
fn test_duplicate_key_rejected() {
    let mut table = HashTable::with_capacity(8);
    table.put("test".to_string(), 1).unwrap();

    let err = table.put("test".to_string(), 2).unwrap_err();
    assert!(matches!(err, WaypathError::DuplicateKey { .. }));
    assert_eq!(*table.get(&"test".to_string()).unwrap(), 1);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_absent_key_handling() {
    let mut table: HashTable<String, i32> = HashTable::with_capacity(8);

    let err = table.put(None::<String>, 1).unwrap_err();
    assert!(matches!(err, WaypathError::InvalidKey));

    let err = table.get(None::<&String>).unwrap_err();
    assert!(matches!(err, WaypathError::KeyNotFound { .. }));

    let err = table.remove(None::<&String>).unwrap_err();
    assert!(matches!(err, WaypathError::KeyNotFound { .. }));

    assert!(!table.contains_key(None::<&String>));
    assert!(table.is_empty());
}

#[test]
fn test_absent_values_are_allowed() {
    let mut table: HashTable<String, Option<&str>> = HashTable::with_capacity(8);
    table.put("tec".to_string(), None).unwrap();

    assert!(table.contains_key(&"tec".to_string()));
    assert_eq!(*table.get(&"tec".to_string()).unwrap(), None);
}

#[test]
fn test_missing_key_lookup() {
    let mut table: HashTable<String, String> = HashTable::new();

    assert!(!table.contains_key(&"test".to_string()));
    assert!(matches!(
        table.get(&"test".to_string()),
        Err(WaypathError::KeyNotFound { .. })
    ));
    assert!(matches!(
        table.remove(&"test".to_string()),
        Err(WaypathError::KeyNotFound { .. })
    ));
}

#[test]
fn test_collisions_chain_in_one_bucket() {
    let mut table = identity_table(8);
    table.put(2, "a").unwrap();
    table.put(10, "b").unwrap();
    table.put(18, "c").unwrap();

    assert_eq!(table.occupied_buckets(), 1);
    assert_eq!(table.len(), 3);
    assert_eq!(*table.get(&10).unwrap(), "b");

    // removing from the middle of a chain leaves its neighbours intact
    assert_eq!(table.remove(&10).unwrap(), "b");
    assert_eq!(*table.get(&2).unwrap(), "a");
    assert_eq!(*table.get(&18).unwrap(), "c");
    assert_eq!(table.occupied_buckets(), 1);

    table.remove(&2).unwrap();
    table.remove(&18).unwrap();
    assert_eq!(table.occupied_buckets(), 0);
    assert!(table.is_empty());
}

#[test]
fn test_resize_triggers_at_threshold() {
    let mut table = identity_table(8);
    for key in 0..6 {
        table.put(key, key * 10).unwrap();
    }
    // 6 of 8 buckets occupied is below 0.8
    assert_eq!(table.capacity(), 8);

    table.put(6, 60).unwrap();
    assert_eq!(table.capacity(), 16);
    assert_eq!(table.occupied_buckets(), 7);
}

#[test]
fn test_resize_counts_buckets_not_entries() {
    let mut table = identity_table(8);
    // all of these land in bucket 0
    for key in 0..20 {
        table.put(key * 8, key).unwrap();
    }
    assert_eq!(table.capacity(), 8);
    assert_eq!(table.len(), 20);
    assert_eq!(table.occupied_buckets(), 1);
}

#[test]
fn test_resize_preserves_contents() {
    let mut table = HashTable::with_capacity(2);
    for i in 0..500 {
        table.put(format!("key-{i}"), i).unwrap();
    }

    assert_eq!(table.len(), 500);
    assert!(table.capacity() > 2);
    assert!(table.load_factor() < RESIZE_THRESHOLD);
    for i in 0..500 {
        assert_eq!(*table.get(&format!("key-{i}")).unwrap(), i);
    }
}

#[test]
fn test_clear_keeps_capacity() {
    let mut table = identity_table(8);
    for key in 0..7 {
        table.put(key, ()).unwrap();
    }
    let capacity = table.capacity();

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), capacity);
    assert_eq!(table.occupied_buckets(), 0);
    assert!(!table.contains_key(&3));

    table.put(3, ()).unwrap();
    assert!(table.contains_key(&3));
}

#[test]
fn test_keys_and_values() {
    let mut table = identity_table(8);
    table.put(3, "c").unwrap();
    table.put(1, "a").unwrap();
    table.put(9, "b").unwrap();

    let keys: Vec<u64> = table.keys().copied().collect();
    assert_eq!(keys, vec![1, 9, 3]);

    let mut values: Vec<&str> = table.values().copied().collect();
    values.sort();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut table = HashTable::new();
    table.put('x', 1).unwrap();
    *table.get_mut(&'x').unwrap() += 41;
    assert_eq!(*table.get(&'x').unwrap(), 42);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let mut table = HashTable::with_capacity(0);
    assert_eq!(table.capacity(), 1);
    table.put(1u8, "one").unwrap();
    assert_eq!(*table.get(&1u8).unwrap(), "one");
}
