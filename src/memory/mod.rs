//! Dense index types and the storage keyed by them.
//!
//! Node identities are interned into contiguous indices, so every per-node table in the crate is
//! a plain vector addressed by an [`EntityIndex`].
pub mod map;

pub use map::SecondaryMap;

/// A copyable index into dense per-entity storage.
pub trait EntityIndex: Copy + Eq + Default {
    /// Creates an index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not fit the backing integer type.
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(index) => index,
            None => panic!("entity index {index} exceeds the backing type"),
        }
    }

    fn try_new(index: usize) -> Option<Self>;
    fn index(self) -> usize;
}

/// Macro which provides the common implementation of an n-bit entity reference
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
#[macro_export]
macro_rules! entity_impl {
    ($entity:ident, $backing:ty) => {
        impl $crate::memory::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if ix <= (<$backing>::MAX as usize) || (<$backing>::BITS) > usize::BITS {
                    Some($entity(ix as $backing))
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
