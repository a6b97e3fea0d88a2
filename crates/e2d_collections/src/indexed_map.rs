use std::hash::Hash;
use std::{borrow::Borrow, collections::HashMap};

/// An append-only map that keeps values in insertion order.
///
/// Values can be reached both by their position and by their key.
/// The only way to remove a value is [`IndexedMap::pop`], which undoes the
/// most recent insertion, so positions of the remaining values never shift.
#[derive(Debug)]
pub struct IndexedMap<K, V> {
    index_to_value: Vec<(K, V)>,
    key_to_index: HashMap<K, usize>,
}

impl<K, V> Default for IndexedMap<K, V> {
    fn default() -> Self {
        Self {
            index_to_value: Default::default(),
            key_to_index: Default::default(),
        }
    }
}

impl<K, V> IndexedMap<K, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.index_to_value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index_to_value.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.index_to_value.get(index).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.index_to_value.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Eq + Hash + Clone, V> IndexedMap<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index_to_value: Vec::with_capacity(capacity),
            key_to_index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value and returns its position.
    /// An insert with the existing key overwrites the value in place.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        match self.key_to_index.get(&key) {
            Some(&index) => {
                self.index_to_value[index].1 = value;
                index
            }
            None => {
                let index = self.index_to_value.len();
                self.key_to_index.insert(key.clone(), index);
                self.index_to_value.push((key, value));
                index
            }
        }
    }

    /// Removes the most recently inserted value.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let (key, value) = self.index_to_value.pop()?;
        self.key_to_index.remove(&key);
        Some((key, value))
    }

    pub fn get_index<Q: ?Sized>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key_to_index.get(key).cloned()
    }

    pub fn get_by_key<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.get_index(key).and_then(|index| self.get(index))
    }

    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key_to_index.contains_key(key)
    }
}
