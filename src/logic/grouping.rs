//! Buckets keyed by first appearance.

use std::collections::HashMap;
use std::hash::Hash;

/// Values grouped by key. Keys iterate in the order they were first inserted;
/// values within a bucket keep insertion order.
#[derive(Clone, Debug)]
pub struct OrderedBuckets<K, V> {
    buckets: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedBuckets<K, V> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> OrderedBuckets<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the bucket for `key`, opening the bucket at the end if it is new.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.buckets[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&i| self.buckets[i].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.buckets
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for OrderedBuckets<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for (k, v) in iter {
            buckets.push(k, v);
        }
        buckets
    }
}
