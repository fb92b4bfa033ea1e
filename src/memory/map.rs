use std::{
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use super::EntityIndex;

/// Dense map from entity indices to values.
///
/// Every index below [`SecondaryMap::len`] has a value; indices beyond it read as the default
/// value and are materialised on mutable access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryMap<K, V> {
    values: Vec<V>,
    default: V,
    phantom: PhantomData<K>,
}

impl<K: EntityIndex, V: Clone> SecondaryMap<K, V> {
    pub fn new() -> Self
    where
        V: Default,
    {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self
    where
        V: Default,
    {
        Self {
            values: Vec::with_capacity(capacity),
            default: V::default(),
            phantom: PhantomData,
        }
    }

    /// Number of materialised entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grows the map with default values until `index` is materialised.
    pub fn ensure(&mut self, index: K) {
        let len = index.index() + 1;

        if len > self.values.len() {
            self.values.resize(len, self.default.clone());
        }
    }

    /// Sets every entry to the default value and resizes the map to exactly `len` entries.
    ///
    /// The existing allocation is reused when the length is unchanged.
    pub fn reset(&mut self, len: usize) {
        if self.values.len() == len {
            self.values.fill(self.default.clone());
        } else {
            self.values.clear();
            self.values.resize(len, self.default.clone());
        }
    }

    /// Borrows the value at `index` if it has been materialised.
    #[inline]
    pub fn get(&self, index: K) -> Option<&V> {
        self.values.get(index.index())
    }

    /// Iterates over the materialised entries in index order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.values.iter().enumerate(),
            phantom: PhantomData,
        }
    }
}

impl<K: EntityIndex, V: Default + Clone> Default for SecondaryMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntityIndex, V> Index<K> for SecondaryMap<K, V> {
    type Output = V;

    fn index(&self, index: K) -> &Self::Output {
        self.values.get(index.index()).unwrap_or(&self.default)
    }
}

impl<K: EntityIndex, V: Clone> IndexMut<K> for SecondaryMap<K, V> {
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        self.ensure(index);
        &mut self.values[index.index()]
    }
}

/// Iterator created by [`SecondaryMap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, V>>,
    phantom: PhantomData<K>,
}

impl<'a, K: EntityIndex, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, value) = self.inner.next()?;
        Some((K::new(index), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: EntityIndex, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K: EntityIndex, V> FusedIterator for Iter<'a, K, V> {}
