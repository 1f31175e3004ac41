//! Keyed pool of shared instances.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Cache that hands out one shared instance per distinct key.
///
/// Instances are built lazily on the first request for a key and live as
/// long as the cache (or longer, while a caller still holds an `Arc`).
/// There is no eviction.
///
/// # Example
///
/// ```rust
/// use patterncore::flyweight::FlyweightCache;
/// use std::sync::Arc;
///
/// let glyphs: FlyweightCache<char, String> = FlyweightCache::new();
///
/// let a = glyphs.get_or_insert_with('a', |c| format!("glyph {c}"));
/// let again = glyphs.get_or_insert_with('a', |_| unreachable!());
///
/// assert!(Arc::ptr_eq(&a, &again));
/// assert_eq!(glyphs.len(), 1);
/// ```
pub struct FlyweightCache<K, V> {
    instances: DashMap<K, Arc<V>>,
    constructed: AtomicUsize,
}

impl<K: Eq + Hash, V> FlyweightCache<K, V> {
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
            constructed: AtomicUsize::new(0),
        }
    }

    /// Return the instance for `key`, building it with `factory` if needed.
    ///
    /// `factory` runs at most once per key, even when several threads ask
    /// for the same new key at the same time: the check and the insert
    /// happen under the key's shard lock. If `factory` fails, its error is
    /// returned and nothing is stored, so the next call tries again.
    ///
    /// `factory` must not call back into this cache.
    pub fn get_or_create<F, E>(&self, key: K, factory: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(existing) = self.instances.get(&key) {
            return Ok(Arc::clone(existing.value()));
        }

        match self.instances.entry(key) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let instance = Arc::new(factory(entry.key())?);
                let total = self.constructed.fetch_add(1, Ordering::SeqCst) + 1;
                debug!("New object created ({total} shared instances)");
                Ok(Arc::clone(entry.insert(instance).value()))
            }
        }
    }

    /// Infallible form of [`get_or_create`](Self::get_or_create).
    pub fn get_or_insert_with<F>(&self, key: K, factory: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        match self.get_or_create(key, |key| Ok::<V, Infallible>(factory(key))) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// The instance for `key`, if one was already built.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.instances.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.instances.contains_key(key)
    }

    /// Number of distinct keys cached.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// How many times a factory produced an instance.
    ///
    /// Always equal to [`len`](Self::len), since nothing is ever evicted.
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }
}

impl<K: Eq + Hash, V> Default for FlyweightCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
