use ahash::RandomState;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A counter that remembers the order in which keys were first seen.
///
/// Rankings sort by count and fall back to first-seen order, so two runs
/// over the same input always rank ties the same way.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    slots: HashMap<K, usize, RandomState>,
    entries: Vec<(K, u64)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Hash + Eq + ?Sized,
    {
        self.add(key, 1);
    }

    pub fn add<Q>(&mut self, key: &Q, n: u64)
    where
        K: Borrow<Q>,
        Q: ToOwned<Owned = K> + Hash + Eq + ?Sized,
    {
        if let Some(&slot) = self.slots.get(key) {
            self.entries[slot].1 += n;
            return;
        }

        let owned = key.to_owned();
        self.slots.insert(owned.clone(), self.entries.len());
        self.entries.push((owned, n));
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries by count, highest first; ties keep first-seen order.
    ///
    /// `limit = None` returns every entry.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&K, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Fold `other` in as if its keys had been counted after ours.
    pub fn merge(&mut self, other: Tally<K>) {
        for (key, n) in other.entries {
            match self.slots.get(&key) {
                Some(&slot) => self.entries[slot].1 += n,
                None => {
                    self.slots.insert(key.clone(), self.entries.len());
                    self.entries.push((key, n));
                }
            }
        }
    }
}

impl<'a, K: Eq + Hash + Clone + 'a> FromIterator<&'a K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = &'a K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.incr(key);
        }
        tally
    }
}
