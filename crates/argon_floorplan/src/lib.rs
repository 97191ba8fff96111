//! Two-level B\*-tree floorplan representation for the Argon placement
//! engine.
//!
//! The floorplan has two packing levels:
//!
//! 1. One [`AsfIsland`] per symmetry group packs only the representative
//!    half of the group in its own B\*-tree and derives the mirrored half by
//!    a closed-form reflection.
//! 2. The [`HbTree`] treats every island as a single rigid rectangle and
//!    co-packs it with all solo blocks.
//!
//! A [`Floorplan`] bundles a [`Design`] with both levels and exposes the
//! reversible perturbations ([`UndoOp`]) the annealer drives.
//!
//! # Usage
//!
//! ```ignore
//! use argon_floorplan::{Block, Design, Floorplan};
//!
//! let mut design = Design::new();
//! design.add_block(Block::new("m1", 10, 10));
//! let mut fp = Floorplan::new(design);
//! let area = fp.pack();
//! ```

#![warn(missing_docs)]

pub mod block;
pub mod contour;
pub mod design;
pub mod floorplan;
pub mod hbtree;
pub mod ids;
pub mod island;
pub mod moves;
pub mod symmetry;
pub mod tree;

pub use block::Block;
pub use design::Design;
pub use floorplan::Floorplan;
pub use hbtree::{HbEntry, HbTree};
pub use ids::{BlockId, GroupId, NodeId};
pub use island::{AsfIsland, Rep, RepKind};
pub use moves::{LeafMove, UndoOp};
pub use symmetry::{Axis, SymGroup, SymPair, SymSelf};
pub use tree::{BStarTree, Slot, TreeNode};
