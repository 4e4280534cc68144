//! One-shot reveal trigger keyed by element.

use fnv::FnvHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Registry of elements waiting to become visible.
///
/// An element is removed the moment it qualifies, so its payload is handed
/// out at most once no matter how many intersection reports follow.
#[derive(Debug)]
pub struct VisibilityTrigger<K, V> {
    threshold: f64,
    observed: FnvHashMap<K, V>,
}

impl<K: Eq + Hash, V> VisibilityTrigger<K, V> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: FnvHashMap::default(),
        }
    }

    /// Register `key`. Returns false if it was already being observed.
    pub fn observe(&mut self, key: K, value: V) -> bool {
        if self.observed.contains_key(&key) {
            return false;
        }
        self.observed.insert(key, value);
        true
    }

    /// Feed one intersection report. Returns the payload the first time the
    /// element is intersecting with at least the threshold ratio visible.
    pub fn on_intersection<Q>(&mut self, key: &Q, ratio: f64, intersecting: bool) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if !intersecting || ratio < self.threshold {
            return None;
        }
        self.observed.remove(key)
    }

    pub fn is_observed<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.observed.contains_key(key)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
