//! Caller-facing node identities.
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical form of a [`NodeKey`]: three components with unused slots set to zero.
pub type CanonicalKey = [i64; 3];

/// The identity of a node as supplied by the caller.
///
/// Keys come in three shapes. All of them are normalised to a [`CanonicalKey`] by padding the
/// missing trailing components with `0`, and equality and hashing are defined on that canonical
/// form. As a consequence a scalar key aliases the pair and triple that extend it with zeros:
///
/// ```
/// # use graphx::NodeKey;
/// assert_eq!(NodeKey::from(5), NodeKey::from((5, 0)));
/// assert_eq!(NodeKey::from((5, 0)), NodeKey::from((5, 0, 0)));
/// assert_ne!(NodeKey::from(5), NodeKey::from((0, 5)));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum NodeKey {
    Scalar(i64),
    Pair(i64, i64),
    Triple(i64, i64, i64),
}

impl NodeKey {
    /// Returns the zero-padded triple this key is identified by.
    #[inline]
    pub fn canonical(self) -> CanonicalKey {
        match self {
            NodeKey::Scalar(a) => [a, 0, 0],
            NodeKey::Pair(a, b) => [a, b, 0],
            NodeKey::Triple(a, b, c) => [a, b, c],
        }
    }

    /// Number of components the key was declared with.
    pub fn arity(self) -> usize {
        match self {
            NodeKey::Scalar(_) => 1,
            NodeKey::Pair(..) => 2,
            NodeKey::Triple(..) => 3,
        }
    }
}

impl From<CanonicalKey> for NodeKey {
    fn from([a, b, c]: CanonicalKey) -> Self {
        NodeKey::Triple(a, b, c)
    }
}

impl PartialEq for NodeKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for NodeKey {}

impl Hash for NodeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Scalar(a) => write!(f, "{a}"),
            NodeKey::Pair(a, b) => write!(f, "({a}, {b})"),
            NodeKey::Triple(a, b, c) => write!(f, "({a}, {b}, {c})"),
        }
    }
}

macro_rules! key_from {
    ($($int:ty),*) => {
        $(
            impl From<$int> for NodeKey {
                #[inline]
                fn from(a: $int) -> Self {
                    NodeKey::Scalar(a.into())
                }
            }

            impl From<($int, $int)> for NodeKey {
                #[inline]
                fn from((a, b): ($int, $int)) -> Self {
                    NodeKey::Pair(a.into(), b.into())
                }
            }

            impl From<($int, $int, $int)> for NodeKey {
                #[inline]
                fn from((a, b, c): ($int, $int, $int)) -> Self {
                    NodeKey::Triple(a.into(), b.into(), c.into())
                }
            }
        )*
    };
}

key_from!(i32, i64);
