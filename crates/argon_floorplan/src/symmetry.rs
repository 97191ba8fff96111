//! Symmetry constraints: axes, mirrored pairs, and self-symmetric blocks.

use crate::ids::BlockId;
use serde::{Deserialize, Serialize};

/// Direction of a symmetry axis.
///
/// A `Vertical` axis is a vertical line (blocks mirror left/right across
/// it); a `Horizontal` axis mirrors bottom/top. The axis direction is a
/// property of the whole group, never of an individual pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Mirror across a vertical line (x = axis position).
    Vertical,
    /// Mirror across a horizontal line (y = axis position).
    Horizontal,
}

/// Two blocks constrained to mirror each other across the group axis.
///
/// `b` is the canonical representative: the island packs `b` and derives
/// `a`'s placement by reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymPair {
    /// The mirrored mate, placed by reflection only.
    pub a: BlockId,
    /// The representative, placed by the island's B*-tree.
    pub b: BlockId,
}

/// A block whose geometric center must lie on the group axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymSelf {
    /// The self-symmetric block.
    pub block: BlockId,
}

/// A symmetry group: a shared axis, its mirrored pairs, and its
/// self-symmetric blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymGroup {
    /// Group name from the input netlist.
    pub name: String,
    /// Axis direction shared by every constraint in the group.
    pub axis: Axis,
    /// Mirrored pairs.
    pub pairs: Vec<SymPair>,
    /// Self-symmetric blocks.
    pub selfs: Vec<SymSelf>,
}

impl SymGroup {
    /// Creates an empty group with the given axis.
    pub fn new(name: impl Into<String>, axis: Axis) -> Self {
        Self {
            name: name.into(),
            axis,
            pairs: Vec::new(),
            selfs: Vec::new(),
        }
    }

    /// Number of blocks constrained by this group (both pair halves).
    pub fn block_count(&self) -> usize {
        self.pairs.len() * 2 + self.selfs.len()
    }

    /// All block IDs in the group, mates included.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| [p.a, p.b])
            .chain(self.selfs.iter().map(|s| s.block))
    }
}
