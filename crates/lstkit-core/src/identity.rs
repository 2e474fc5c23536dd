//! Node identity and reference-equality.
//!
//! # NodeId
//!
//! [`NodeId`] is the stable identity of a tree node. Ids are random 128-bit
//! values assigned once when a node is created and carried unchanged through
//! every with-copy, so two nodes with the same id are "the same node" even
//! after an edit changed their content. Ids are the key for side tables
//! such as [`SpanTable`](crate::span::SpanTable) and for reconciling padded
//! lists.
//!
//! # RefEq
//!
//! [`RefEq`] answers "is this the value I already hold?" for the with-protocol.
//! Shared node handles compare by pointer, plain data compares by value. A
//! `with_*` call whose argument is `ref_eq` to the current field returns the
//! original node instead of allocating a copy.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A globally unique, immutable identifier for a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one received over the wire).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The raw 128-bit value.
    pub fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Anything that carries a [`NodeId`].
pub trait HasId {
    fn id(&self) -> NodeId;
}

/// Reference equality used by the with-protocol short-circuit.
pub trait RefEq {
    fn ref_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> RefEq for Arc<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: RefEq> RefEq for Option<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.ref_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: RefEq> RefEq for Vec<T> {
    fn ref_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ref_eq(b))
    }
}

/// Implement [`RefEq`] by value for plain data types.
#[macro_export]
macro_rules! ref_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::identity::RefEq for $ty {
                fn ref_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

ref_eq_by_value!(bool, char, u8, u16, u32, u64, usize, i32, i64, String, NodeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_distinct() {
        let a = NodeId::random();
        let b = NodeId::random();
        assert_ne!(a, b);
        assert_eq!(a, NodeId::from_uuid(a.0));
    }

    #[test]
    fn arc_ref_eq_is_pointer_identity() {
        let a = Arc::new(String::from("x"));
        let b = Arc::new(String::from("x"));
        assert!(a.ref_eq(&Arc::clone(&a)));
        assert!(!a.ref_eq(&b));
    }

    #[test]
    fn vec_and_option_ref_eq() {
        let a = Arc::new(1);
        assert!(vec![Arc::clone(&a)].ref_eq(&vec![Arc::clone(&a)]));
        assert!(!vec![Arc::clone(&a)].ref_eq(&vec![Arc::new(1)]));
        assert!(None::<Arc<i32>>.ref_eq(&None));
        assert!(!Some(a).ref_eq(&None));
        assert!(String::from("a").ref_eq(&String::from("a")));
    }

    #[test]
    fn display_wraps_uuid() {
        let id = NodeId::random();
        assert!(id.to_string().starts_with("NodeId("));
    }
}
