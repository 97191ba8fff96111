//! Opaque ID newtypes for floorplan entities.
//!
//! Each ID is a thin `u32` wrapper that is `Copy`, `Hash`, and
//! `Serialize`/`Deserialize`. [`BlockId`] indexes the block table of a
//! [`Design`](crate::design::Design), [`GroupId`] its symmetry-group table,
//! and [`NodeId`] the node slab of one [`BStarTree`](crate::tree::BStarTree).

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns the index as a `usize`, for slice access.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a hard block in the design.
    BlockId
);

define_id!(
    /// Opaque, copyable ID for a symmetry group (and its island).
    GroupId
);

define_id!(
    /// Opaque, copyable ID for a node within one B*-tree.
    NodeId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn block_id_roundtrip() {
        let id = BlockId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn id_equality() {
        let a = NodeId::from_raw(3);
        let b = NodeId::from_raw(3);
        let c = NodeId::from_raw(4);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(GroupId::from_raw(1));
        set.insert(GroupId::from_raw(2));
        set.insert(GroupId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = BlockId::from_raw(55);
        let json = serde_json::to_string(&id).unwrap();
        let restored: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", NodeId::from_raw(7)), "7");
    }
}
