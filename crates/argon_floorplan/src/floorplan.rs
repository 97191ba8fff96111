//! Floorplan: a design together with its two-level packing state.

use crate::block::Block;
use crate::design::Design;
use crate::hbtree::HbTree;

/// A design plus the HB-tree (and, inside it, the per-group islands) that
/// pack it. This is the object the annealer perturbs, packs, and scores.
#[derive(Debug, Clone)]
pub struct Floorplan {
    /// The problem instance. Block placement state is updated in place by
    /// every pack.
    pub design: Design,
    pub(crate) hb: HbTree,
}

impl Floorplan {
    /// Builds the two-level packing state for a design.
    pub fn new(mut design: Design) -> Self {
        let hb = HbTree::new(&mut design);
        Self { design, hb }
    }

    /// Packs both levels and returns the global bounding-box area.
    pub fn pack(&mut self) -> i64 {
        self.hb.pack_and_area(&mut self.design.blocks)
    }

    /// Global bounding-box area of the last pack.
    pub fn area(&self) -> i64 {
        self.hb.area()
    }

    /// Number of blocks in the design.
    pub fn block_count(&self) -> usize {
        self.design.block_count()
    }

    /// Read access to the outer tree and islands.
    pub fn hb(&self) -> &HbTree {
        &self.hb
    }

    /// Deep copy of the current block placement, for best-solution memoing.
    pub fn snapshot_blocks(&self) -> Vec<Block> {
        self.design.blocks.clone()
    }

    /// Restores a previously snapshotted placement.
    pub fn restore_blocks(&mut self, blocks: Vec<Block>) {
        debug_assert_eq!(blocks.len(), self.design.blocks.len());
        self.design.blocks = blocks;
    }
}
