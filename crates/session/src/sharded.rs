//! A hash map split across independently locked shards.

use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Concurrent map with a fixed number of `RwLock`ed shards. A key always
/// maps to the same shard, so operations on one key are serialized while
/// unrelated keys rarely contend.
pub struct ShardedMap<K, V> {
    shards: Box<[RwLock<FxHashMap<K, V>>]>,
    hasher: FxBuildHasher,
}

impl<K, V> ShardedMap<K, V>
where
    K: Eq + Hash,
{
    /// `shard_count` is clamped to at least one.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| RwLock::new(FxHashMap::default()))
            .collect();
        Self {
            shards,
            hasher: FxBuildHasher,
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, key: &K) -> &RwLock<FxHashMap<K, V>> {
        let index = (self.hasher.hash_one(key) as usize) % self.shards.len();
        &self.shards[index]
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.shard(key).read().get(key).cloned()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.shard(key).read().contains_key(key)
    }

    /// Insert or overwrite; returns the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.shard(&key).write().insert(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.shard(key).write().remove(key)
    }

    /// Total entries. Shards are read one at a time, so the count is only
    /// exact when no writers are active.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }

    /// Clone out every entry.
    pub fn snapshot(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = Vec::new();
        for shard in self.shards.iter() {
            entries.extend(shard.read().iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_basic_operations() {
        let map: ShardedMap<String, u32> = ShardedMap::new(4);
        assert!(map.is_empty());

        assert_eq!(map.insert("a".into(), 1), None);
        assert_eq!(map.insert("a".into(), 2), Some(1));
        map.insert("b".into(), 3);

        assert_eq!(map.get(&"a".to_string()), Some(2));
        assert!(map.contains_key(&"b".to_string()));
        assert_eq!(map.len(), 2);

        assert_eq!(map.remove(&"a".to_string()), Some(2));
        assert_eq!(map.get(&"a".to_string()), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_zero_shards_is_clamped() {
        let map: ShardedMap<u32, u32> = ShardedMap::new(0);
        assert_eq!(map.shard_count(), 1);
        map.insert(7, 7);
        assert_eq!(map.get(&7), Some(7));
    }

    #[test]
    fn test_snapshot() {
        let map = ShardedMap::new(8);
        for i in 0..20u32 {
            map.insert(i, i * 10);
        }
        let mut entries = map.snapshot();
        entries.sort();
        assert_eq!(entries.len(), 20);
        assert_eq!(entries[3], (3, 30));
    }

    #[test]
    fn test_concurrent_writers() {
        let map = Arc::new(ShardedMap::new(16));
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for i in 0..500u32 {
                        map.insert((t, i), i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(map.len(), 8 * 500);
        assert_eq!(map.get(&(7, 499)), Some(499));
    }
}
