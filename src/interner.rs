//! Interning of node keys into dense indices.
use std::collections::HashMap;
use std::iter::FusedIterator;

use crate::key::{CanonicalKey, NodeKey};
use crate::memory::EntityIndex;
use crate::NodeIndex;

/// Get-or-create mapping from [`NodeKey`]s to [`NodeIndex`]es.
///
/// Indices are issued in first-seen order and always form the contiguous range `0..len()`.
/// Nothing is ever removed, so an index stays valid for the lifetime of the interner.
///
/// # Example
///
/// ```
/// # use graphx::interner::Interner;
/// let mut interner = Interner::new();
///
/// let a = interner.intern((1, 2));
/// let b = interner.intern(7);
///
/// assert_eq!(interner.intern((1, 2)), a);
/// assert_eq!(interner.find(7), Some(b));
/// assert_eq!(interner.find((2, 1)), None);
/// assert_eq!(interner.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interner {
    ids: HashMap<CanonicalKey, NodeIndex>,
    keys: Vec<CanonicalKey>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Returns the index of `key`, allocating the next free one if the key is new.
    pub fn intern(&mut self, key: impl Into<NodeKey>) -> NodeIndex {
        let key = key.into().canonical();

        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let id = NodeIndex::new(self.keys.len());
        self.ids.insert(key, id);
        self.keys.push(key);
        id
    }

    /// Looks up the index of `key` without interning it.
    #[inline]
    pub fn find(&self, key: impl Into<NodeKey>) -> Option<NodeIndex> {
        self.ids.get(&key.into().canonical()).copied()
    }

    /// Returns the canonical key that was interned as `id`.
    pub fn key(&self, id: NodeIndex) -> Option<NodeKey> {
        self.keys.get(id.index()).copied().map(NodeKey::from)
    }

    /// Number of distinct keys interned so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the interned keys in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.keys.iter().enumerate())
    }
}

/// Iterator created by [`Interner::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a>(std::iter::Enumerate<std::slice::Iter<'a, CanonicalKey>>);

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeIndex, NodeKey);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, key) = self.0.next()?;
        Some((NodeIndex::new(index), NodeKey::from(*key)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
impl<'a> FusedIterator for Iter<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dense_first_seen_order() {
        let mut interner = Interner::new();

        assert_eq!(interner.intern(10).index(), 0);
        assert_eq!(interner.intern((10, 1)).index(), 1);
        assert_eq!(interner.intern((10, 1, 1)).index(), 2);
        assert_eq!(interner.intern(10).index(), 0);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn find_does_not_intern() {
        let mut interner = Interner::new();
        assert_eq!(interner.find(4), None);
        assert!(interner.is_empty());

        let id = interner.intern(4);
        assert_eq!(interner.find((4, 0, 0)), Some(id));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn reverse_lookup_is_canonical() {
        let mut interner = Interner::new();
        let id = interner.intern((3, 4));

        assert_eq!(interner.key(id), Some(NodeKey::Triple(3, 4, 0)));
        assert_eq!(interner.key(NodeIndex::new(1)), None);
        assert!(interner.iter().eq([(id, NodeKey::from((3, 4)))]));
    }

    fn arb_key() -> impl Strategy<Value = NodeKey> {
        prop_oneof![
            (-2i64..3).prop_map(NodeKey::Scalar),
            (-2i64..3, -2i64..3).prop_map(|(a, b)| NodeKey::Pair(a, b)),
            (-2i64..3, -2i64..3, -2i64..3).prop_map(|(a, b, c)| NodeKey::Triple(a, b, c)),
        ]
    }

    proptest! {
        #[test]
        fn intern_is_stable_and_injective(keys in prop::collection::vec(arb_key(), 0..64)) {
            let mut interner = Interner::new();
            let ids: Vec<_> = keys.iter().map(|&k| interner.intern(k)).collect();

            for (i, a) in keys.iter().enumerate() {
                prop_assert_eq!(interner.intern(*a), ids[i]);
                prop_assert_eq!(interner.find(*a), Some(ids[i]));
                for (j, b) in keys.iter().enumerate() {
                    prop_assert_eq!(a.canonical() == b.canonical(), ids[i] == ids[j]);
                }
            }

            let distinct: std::collections::HashSet<_> = keys.iter().map(|k| k.canonical()).collect();
            prop_assert_eq!(interner.len(), distinct.len());
            prop_assert!(ids.iter().all(|id| id.index() < interner.len()));
        }
    }
}
