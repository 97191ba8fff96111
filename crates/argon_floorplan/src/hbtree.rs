//! HB-tree: the outer packing level over islands and solo blocks.
//!
//! Every symmetry island is abstracted to a single rigid rectangle (its
//! packed bounding box) and co-packed with all solo blocks in one B\*-tree.
//! After the global pack, each island's interior is translated to its
//! assigned corner, which also carries the island's axis into global
//! coordinates.

use crate::block::Block;
use crate::design::Design;
use crate::ids::{BlockId, GroupId, NodeId};
use crate::island::AsfIsland;
use crate::tree::{BStarTree, Slot};

/// What an HB-tree node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HbEntry {
    /// A single block outside any symmetry group.
    Solo(BlockId),
    /// A whole symmetry island, packed as a rigid rectangle.
    Island(GroupId),
}

/// The outer B\*-tree over islands and solo blocks.
#[derive(Debug, Clone)]
pub struct HbTree {
    tree: BStarTree<HbEntry>,
    islands: Vec<AsfIsland>,
}

impl HbTree {
    /// Builds the HB-tree for a design: one island per symmetry group, one
    /// leaf per solo block, and an initial balanced tree by descending area.
    pub fn new(design: &mut Design) -> Self {
        let mut islands: Vec<AsfIsland> = design
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| AsfIsland::new(GroupId::from_raw(i as u32), g, &design.blocks))
            .collect();
        // Islands need a first pack so their bounding boxes can seed the
        // initial area-descending tree.
        for island in &mut islands {
            island.pack(&mut design.blocks);
        }

        let mut tree = BStarTree::new();
        for id in design.solo_ids().collect::<Vec<_>>() {
            let b = design.block(id);
            tree.add_node(HbEntry::Solo(id), b.rotated_w(), b.rotated_h());
        }
        for island in &islands {
            if island.node_count() == 0 {
                continue;
            }
            let (w, h) = island.bbox();
            tree.add_node(HbEntry::Island(island.group_id()), w, h);
        }
        let ids: Vec<NodeId> = tree.ids().collect();
        tree.build_balanced_by_area(&ids);

        Self { tree, islands }
    }

    /// Reloads every node's packing shape: solo nodes from their block's
    /// current rotation, island nodes from the island's latest bbox.
    fn refresh_shapes(&mut self, blocks: &[Block]) {
        for id in self.tree.ids() {
            let (w, h) = match self.tree.node(id).payload {
                HbEntry::Solo(b) => {
                    let b = &blocks[b.index()];
                    (b.rotated_w(), b.rotated_h())
                }
                HbEntry::Island(g) => self.islands[g.index()].bbox(),
            };
            self.tree.set_shape(id, w, h);
        }
    }

    /// Packs everything and returns the global bounding-box area.
    ///
    /// Re-packs each island (so interior coordinates and bboxes reflect the
    /// current rotations and island trees), packs the outer tree, then
    /// translates island interiors and writes solo coordinates.
    pub fn pack_and_area(&mut self, blocks: &mut [Block]) -> i64 {
        for island in &mut self.islands {
            island.pack(blocks);
        }
        self.refresh_shapes(blocks);
        self.tree.pack();

        for id in self.tree.ids() {
            let (x, y, entry) = {
                let n = self.tree.node(id);
                (n.x, n.y, n.payload)
            };
            match entry {
                HbEntry::Solo(b) => {
                    let b = &mut blocks[b.index()];
                    b.x = x;
                    b.y = y;
                }
                HbEntry::Island(g) => {
                    self.islands[g.index()].translate(x, y, blocks);
                }
            }
        }
        self.tree.area()
    }

    /// Global bounding-box area of the last pack.
    pub fn area(&self) -> i64 {
        self.tree.area()
    }

    /// Number of outer-tree nodes (solos plus islands).
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Outer-tree node by dense index.
    pub fn node_at(&self, idx: usize) -> NodeId {
        debug_assert!(idx < self.tree.len());
        NodeId::from_raw(idx as u32)
    }

    /// What the given node stands for.
    pub fn entry(&self, node: NodeId) -> HbEntry {
        self.tree.node(node).payload
    }

    /// Rotates a node: a solo block flips its 90° rotation, an island
    /// mirrors its internal tree. Returns what was touched for undo.
    pub fn rotate_node(&mut self, node: NodeId, blocks: &mut [Block]) -> HbEntry {
        let entry = self.entry(node);
        match entry {
            HbEntry::Solo(b) => blocks[b.index()].rotate(),
            HbEntry::Island(g) => self.islands[g.index()].mirror(),
        }
        entry
    }

    /// Exchanges the tree positions of two outer nodes.
    pub fn swap_nodes(&mut self, a: NodeId, b: NodeId) {
        self.tree.swap_payloads(a, b);
    }

    /// Detaches a leaf from the outer tree, returning its vacated slot.
    pub fn detach_leaf(&mut self, leaf: NodeId) -> (NodeId, Slot) {
        self.tree.detach_leaf(leaf)
    }

    /// Reattaches a detached node into a free outer-tree slot.
    pub fn attach_leaf(&mut self, leaf: NodeId, parent: NodeId, slot: Slot) {
        self.tree.attach_leaf(leaf, parent, slot)
    }

    /// Outer-tree leaves that are not the root.
    pub fn movable_leaves(&self) -> Vec<NodeId> {
        self.tree
            .leaves()
            .into_iter()
            .filter(|&id| self.tree.node(id).parent.is_some())
            .collect()
    }

    /// Free outer-tree insertion slots, excluding those on `skip`.
    pub fn free_slots_excluding(&self, skip: NodeId) -> Vec<(NodeId, Slot)> {
        self.tree
            .free_slots()
            .into_iter()
            .filter(|&(id, _)| id != skip)
            .collect()
    }

    /// Number of symmetry islands.
    pub fn island_count(&self) -> usize {
        self.islands.len()
    }

    /// The island for a symmetry group.
    pub fn island(&self, g: GroupId) -> &AsfIsland {
        &self.islands[g.index()]
    }

    /// Mutable access to the island for a symmetry group.
    pub fn island_mut(&mut self, g: GroupId) -> &mut AsfIsland {
        &mut self.islands[g.index()]
    }
}
