//! Insertion-ordered occurrence counting.

use std::collections::HashMap;
use std::hash::Hash;

/// A counter that remembers the order in which keys were first seen.
///
/// Ranking uses a stable sort by descending count, so keys with equal
/// counts come out in first-encountered order and top-N output is
/// deterministic for a given input stream.
#[derive(Debug, Default, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, u64>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-encountered order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// All (key, count) pairs sorted by descending count, ties in
    /// first-encountered order.
    pub fn ranked(&self) -> Vec<(K, u64)> {
        let mut ranked: Vec<(K, u64)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-count entries, truncating the remainder.
    pub fn top(&self, n: usize) -> Vec<(K, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
